use serde::{Deserialize, Serialize};

/// Registry-side settings: the static system TLD set answered locally in
/// addition to everything registered in the store.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RegistryConfig {
    #[serde(default = "default_system_tlds")]
    pub system_tlds: Vec<String>,
}

impl RegistryConfig {
    pub fn is_system_tld(&self, name: &str) -> bool {
        self.system_tlds
            .iter()
            .any(|tld| tld.eq_ignore_ascii_case(name))
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            system_tlds: default_system_tlds(),
        }
    }
}

fn default_system_tlds() -> Vec<String> {
    vec!["free".to_string(), "open".to_string(), "oss".to_string()]
}
