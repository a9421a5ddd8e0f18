use async_trait::async_trait;
use opentld_domain::ResolveError;

/// Verbatim relay of an upstream DoH response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamReply {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

#[async_trait]
pub trait UpstreamResolver: Send + Sync {
    /// POST the raw query bytes to the provider's DoH endpoint and relay the
    /// response unchanged. Unrecognized provider keys use the default.
    async fn forward(
        &self,
        raw_query: &[u8],
        provider: Option<&str>,
    ) -> Result<UpstreamReply, ResolveError>;
}
