use super::Repositories;
use opentld_application::use_cases::{ResolveQueryUseCase, ResolverSettings};
use opentld_domain::Config;
use opentld_infrastructure::dns::{DohUpstreamResolver, HickoryWireCodec};
use std::sync::Arc;
use std::time::Duration;

pub struct Services {
    pub resolve: Arc<ResolveQueryUseCase>,
}

impl Services {
    pub fn new(config: &Config, repos: &Repositories) -> Self {
        let settings = ResolverSettings {
            registry: config.registry.clone(),
            deadline: Duration::from_secs(config.server.request_timeout_secs),
        };

        let resolve = Arc::new(ResolveQueryUseCase::new(
            Arc::new(HickoryWireCodec::new()),
            repos.tlds.clone(),
            repos.domains.clone(),
            repos.records.clone(),
            Arc::new(DohUpstreamResolver::new(config.upstream.clone())),
            settings,
        ));

        Self { resolve }
    }
}
