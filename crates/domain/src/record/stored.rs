use super::RecordType;

/// Host value matching any host without a row of its own.
pub const WILDCARD_HOST: &str = "*";

/// Answer TTL used when a record row carries none.
pub const DEFAULT_TTL: u32 = 300;

/// A registry record row as read from the store. The type tag and value are
/// kept loosely typed: the management API writes arbitrary tags, and
/// structured values arrive as their JSON serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRecord {
    pub record_type: String,

    pub host: String,

    pub value: String,

    pub priority: Option<u16>,

    pub ttl: Option<u32>,
}

impl StoredRecord {
    pub fn ttl_or_default(&self) -> u32 {
        self.ttl.unwrap_or(DEFAULT_TTL)
    }

    /// Type filter for an answer set: a record is kept when its tag matches
    /// the question type, the question is `ANY`, or the record is a CNAME
    /// (always included, never flattened).
    pub fn answers_query(&self, query_type: RecordType) -> bool {
        query_type == RecordType::ANY
            || query_type.matches_tag(&self.record_type)
            || self.record_type.eq_ignore_ascii_case("CNAME")
    }
}
