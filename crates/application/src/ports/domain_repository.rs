use async_trait::async_trait;
use opentld_domain::{RegisteredDomain, ResolveError};

#[async_trait]
pub trait DomainRepository: Send + Sync {
    async fn lookup(&self, tld: &str, name: &str)
        -> Result<Option<RegisteredDomain>, ResolveError>;
}
