//! RR Formatter — turns a stored record value into the structured shape the
//! wire encoder expects for its type tag.
//!
//! Total over every tag: unknown tags pass through as opaque strings, and a
//! malformed structured value degrades to an empty object instead of failing
//! the whole answer set.

use crate::record::RecordFamily;
use serde_json::{json, Value};

/// Format a stored value for its type tag.
///
/// Values that look like JSON (`{`/`[` after trimming) are parsed
/// speculatively; a parse failure silently keeps the raw string. Plenty of
/// legacy rows store plain strings where JSON is expected today, and those
/// must keep resolving.
pub fn format(type_tag: &str, raw_value: &str, priority: Option<u16>) -> Value {
    let tag = type_tag.to_uppercase();
    let parsed = speculative_parse(raw_value);

    match RecordFamily::of(&tag) {
        RecordFamily::Opaque => Value::String(raw_value.to_string()),

        RecordFamily::TextList => match parsed {
            Some(Value::Array(items)) => Value::Array(items),
            _ => json!([raw_value]),
        },

        RecordFamily::PriorityTuple => match parsed {
            Some(Value::Object(fields)) => Value::Object(fields),
            _ => priority_tuple(&tag, raw_value, priority),
        },

        RecordFamily::Structured => match parsed {
            Some(value @ (Value::Object(_) | Value::Array(_))) => value,
            _ => json!({}),
        },
    }
}

fn speculative_parse(raw_value: &str) -> Option<Value> {
    let trimmed = raw_value.trim();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        serde_json::from_str(trimmed).ok()
    } else {
        None
    }
}

/// Per-type tuple synthesis for plain-string values.
fn priority_tuple(tag: &str, raw_value: &str, priority: Option<u16>) -> Value {
    match tag {
        "MX" => json!({
            "preference": priority.unwrap_or(10),
            "exchange": raw_value,
        }),
        "KX" => json!({
            "preference": priority.unwrap_or(10),
            "exchanger": raw_value,
        }),
        "AFSDB" => json!({
            "subtype": priority.unwrap_or(1),
            "hostname": raw_value,
        }),
        "RT" => json!({
            "preference": priority.unwrap_or(10),
            "intermediate": raw_value,
        }),
        "URI" => json!({
            "priority": priority.unwrap_or(10),
            "weight": 1,
            "target": raw_value,
        }),
        _ => Value::String(raw_value.to_string()),
    }
}
