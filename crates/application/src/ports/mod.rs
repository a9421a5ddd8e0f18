mod domain_repository;
mod record_repository;
mod tld_repository;
mod upstream_resolver;
mod wire_codec;

pub use domain_repository::DomainRepository;
pub use record_repository::RecordRepository;
pub use tld_repository::TldRepository;
pub use upstream_resolver::{UpstreamReply, UpstreamResolver};
pub use wire_codec::{DecodedQuery, WireCodec};

// Re-export for convenience
pub use opentld_domain::Question;
