//! Upstream DoH forwarder (RFC 8484).
//!
//! Unmanaged queries are POSTed byte-for-byte to the selected public
//! resolver and the reply is relayed unchanged: status, body and content
//! type, non-2xx included. No retry, no caching.

use async_trait::async_trait;
use opentld_application::ports::{UpstreamReply, UpstreamResolver};
use opentld_domain::config::UpstreamConfig;
use opentld_domain::ResolveError;
use std::time::Duration;
use tracing::debug;

const DNS_MESSAGE_CONTENT_TYPE: &str = "application/dns-message";

pub struct DohUpstreamResolver {
    client: reqwest::Client,
    config: UpstreamConfig,
}

impl DohUpstreamResolver {
    pub fn new(config: UpstreamConfig) -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(Duration::from_secs(10))
            .pool_max_idle_per_host(4)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self { client, config }
    }
}

#[async_trait]
impl UpstreamResolver for DohUpstreamResolver {
    async fn forward(
        &self,
        raw_query: &[u8],
        provider: Option<&str>,
    ) -> Result<UpstreamReply, ResolveError> {
        let url = self.config.endpoint_for(provider).ok_or_else(|| {
            ResolveError::ConfigError("no upstream providers configured".to_string())
        })?;

        debug!(
            url = %url,
            provider = provider.unwrap_or("default"),
            message_len = raw_query.len(),
            "Forwarding DoH query"
        );

        let response = self
            .client
            .post(url)
            .header("Content-Type", DNS_MESSAGE_CONTENT_TYPE)
            .header("Accept", DNS_MESSAGE_CONTENT_TYPE)
            .body(raw_query.to_vec())
            .send()
            .await
            .map_err(|e| {
                ResolveError::UpstreamError(format!("DoH request to {} failed: {}", url, e))
            })?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let body = response.bytes().await.map_err(|e| {
            ResolveError::UpstreamError(format!("failed to read DoH response from {}: {}", url, e))
        })?;

        debug!(url = %url, status, response_len = body.len(), "DoH response relayed");

        Ok(UpstreamReply {
            status,
            content_type,
            body: body.to_vec(),
        })
    }
}
