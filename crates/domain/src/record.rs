mod family;
mod record_type;
mod stored;

pub use family::RecordFamily;
pub use record_type::RecordType;
pub use stored::{StoredRecord, DEFAULT_TTL, WILDCARD_HOST};
