use async_trait::async_trait;
use opentld_application::ports::DomainRepository;
use opentld_domain::{RegisteredDomain, ResolveError};
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::{error, instrument};

type DomainRow = (i64, String, String);

pub struct SqliteDomainRepository {
    pool: SqlitePool,
}

impl SqliteDomainRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_domain(row: DomainRow) -> RegisteredDomain {
        let (id, tld, name) = row;
        RegisteredDomain {
            id,
            tld: Arc::from(tld.as_str()),
            name: Arc::from(name.as_str()),
        }
    }
}

#[async_trait]
impl DomainRepository for SqliteDomainRepository {
    #[instrument(skip(self))]
    async fn lookup(
        &self,
        tld: &str,
        name: &str,
    ) -> Result<Option<RegisteredDomain>, ResolveError> {
        let row = sqlx::query_as::<_, DomainRow>(
            "SELECT id, tld, name FROM domains WHERE tld = ? AND name = ?",
        )
        .bind(tld)
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query domain");
            ResolveError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(Self::row_to_domain))
    }
}
