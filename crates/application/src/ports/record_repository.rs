use async_trait::async_trait;
use opentld_domain::{ResolveError, StoredRecord};

#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Records for `domain_id` whose host equals `host` or the wildcard `*`.
    async fn list(&self, domain_id: i64, host: &str) -> Result<Vec<StoredRecord>, ResolveError>;
}
