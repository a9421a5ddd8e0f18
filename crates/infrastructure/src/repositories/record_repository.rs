use async_trait::async_trait;
use opentld_application::ports::RecordRepository;
use opentld_domain::{ResolveError, StoredRecord, WILDCARD_HOST};
use sqlx::SqlitePool;
use tracing::{error, instrument};

type RecordRow = (String, String, String, Option<i64>, Option<i64>);

pub struct SqliteRecordRepository {
    pool: SqlitePool,
}

impl SqliteRecordRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_record(row: RecordRow) -> StoredRecord {
        let (record_type, host, value, priority, ttl) = row;
        StoredRecord {
            record_type,
            host,
            value,
            priority: priority.map(|p| p as u16),
            ttl: ttl.map(|t| t as u32),
        }
    }
}

#[async_trait]
impl RecordRepository for SqliteRecordRepository {
    #[instrument(skip(self))]
    async fn list(&self, domain_id: i64, host: &str) -> Result<Vec<StoredRecord>, ResolveError> {
        let rows = sqlx::query_as::<_, RecordRow>(
            "SELECT type, host, value, priority, ttl FROM records
             WHERE domain_id = ? AND (host = ? OR host = ?)",
        )
        .bind(domain_id)
        .bind(host)
        .bind(WILDCARD_HOST)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query records");
            ResolveError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Self::row_to_record).collect())
    }
}
