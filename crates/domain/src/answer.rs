use serde_json::Value;
use std::sync::Arc;

/// A formatted answer awaiting wire encoding. `name` is the original query
/// name, `record_type` the stored tag, and `data` the RR Formatter output
/// for that tag's family. Class is always IN.
#[derive(Debug, Clone, PartialEq)]
pub struct Answer {
    pub name: Arc<str>,
    pub record_type: String,
    pub ttl: u32,
    pub data: Value,
}
