use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamProvider {
    pub key: String,

    pub url: String,
}

/// Fixed provider-key → DoH endpoint map for the proxy path. Unrecognized
/// keys fall back to `default_provider`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_provider_key")]
    pub default_provider: String,

    #[serde(default = "default_providers")]
    pub providers: Vec<UpstreamProvider>,
}

impl UpstreamConfig {
    /// Endpoint for a provider key, falling back to the default provider and
    /// finally to the first configured provider.
    pub fn endpoint_for(&self, key: Option<&str>) -> Option<&str> {
        key.and_then(|k| self.find(k))
            .or_else(|| self.find(&self.default_provider))
            .or_else(|| self.providers.first())
            .map(|provider| provider.url.as_str())
    }

    fn find(&self, key: &str) -> Option<&UpstreamProvider> {
        self.providers
            .iter()
            .find(|provider| provider.key.eq_ignore_ascii_case(key))
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            default_provider: default_provider_key(),
            providers: default_providers(),
        }
    }
}

fn default_provider_key() -> String {
    "cloudflare".to_string()
}

fn default_providers() -> Vec<UpstreamProvider> {
    vec![
        UpstreamProvider {
            key: "cloudflare".to_string(),
            url: "https://cloudflare-dns.com/dns-query".to_string(),
        },
        UpstreamProvider {
            key: "google".to_string(),
            url: "https://dns.google/dns-query".to_string(),
        },
        UpstreamProvider {
            key: "quad9".to_string(),
            url: "https://dns.quad9.net/dns-query".to_string(),
        },
    ]
}
