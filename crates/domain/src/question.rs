use crate::record::RecordType;
use std::sync::Arc;

/// Host value denoting the apex of a domain.
pub const APEX_HOST: &str = "@";

/// A parsed DNS question (class is always IN).
///
/// `name` keeps the inbound spelling so the question section can be echoed
/// back verbatim; all derivations below are case-insensitive.
#[derive(Debug, Clone)]
pub struct Question {
    pub name: Arc<str>,
    pub record_type: RecordType,
}

impl Question {
    pub fn new(name: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            name: name.into(),
            record_type,
        }
    }

    /// Lowercased labels of the query name, root/empty labels dropped.
    pub fn labels(&self) -> Vec<String> {
        self.name
            .split('.')
            .filter(|label| !label.is_empty())
            .map(|label| label.to_lowercase())
            .collect()
    }

    /// Last label of the name.
    pub fn tld(&self) -> Option<String> {
        self.labels().pop()
    }

    /// Second-to-last label; absent for bare-TLD queries.
    pub fn domain(&self) -> Option<String> {
        let labels = self.labels();
        if labels.len() < 2 {
            return None;
        }
        Some(labels[labels.len() - 2].clone())
    }

    /// Leading labels joined by `.`, or `@` when the query hits the apex.
    pub fn host(&self) -> String {
        let labels = self.labels();
        if labels.len() <= 2 {
            return APEX_HOST.to_string();
        }
        labels[..labels.len() - 2].join(".")
    }
}
