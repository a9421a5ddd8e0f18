use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ResolveError {
    #[error("Invalid DNS query: {0}")]
    InvalidQuery(String),

    #[error("Name not resolvable")]
    NameNotResolvable,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Upstream error: {0}")]
    UpstreamError(String),

    #[error("Codec error: {0}")]
    CodecError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
