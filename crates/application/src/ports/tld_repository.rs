use async_trait::async_trait;
use opentld_domain::{ResolveError, Tld};

#[async_trait]
pub trait TldRepository: Send + Sync {
    async fn lookup(&self, name: &str) -> Result<Option<Tld>, ResolveError>;
}
