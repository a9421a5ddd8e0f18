use async_trait::async_trait;
use opentld_application::ports::TldRepository;
use opentld_domain::{ResolveError, Tld};
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::{error, instrument};

type TldRow = (String, i64, i64);

pub struct SqliteTldRepository {
    pool: SqlitePool,
}

impl SqliteTldRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_tld(row: TldRow) -> Tld {
        let (name, is_public, price) = row;
        Tld {
            name: Arc::from(name.as_str()),
            is_public: is_public != 0,
            price,
        }
    }
}

#[async_trait]
impl TldRepository for SqliteTldRepository {
    #[instrument(skip(self))]
    async fn lookup(&self, name: &str) -> Result<Option<Tld>, ResolveError> {
        let row = sqlx::query_as::<_, TldRow>(
            "SELECT name, is_public, price FROM tlds WHERE name = ?",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query TLD");
            ResolveError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(Self::row_to_tld))
    }
}
