use opentld_infrastructure::repositories::{
    SqliteDomainRepository, SqliteRecordRepository, SqliteTldRepository,
};
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Repositories {
    pub tlds: Arc<SqliteTldRepository>,
    pub domains: Arc<SqliteDomainRepository>,
    pub records: Arc<SqliteRecordRepository>,
}

impl Repositories {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            tlds: Arc::new(SqliteTldRepository::new(pool.clone())),
            domains: Arc::new(SqliteDomainRepository::new(pool.clone())),
            records: Arc::new(SqliteRecordRepository::new(pool)),
        }
    }
}
