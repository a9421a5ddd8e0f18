use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_http_port")]
    pub http_port: u16,

    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Hard deadline for one resolution, store lookups and upstream forward
    /// included.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: default_http_port(),
            bind_address: default_bind_address(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

fn default_http_port() -> u16 {
    8053
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_request_timeout() -> u64 {
    10
}
