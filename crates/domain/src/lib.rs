//! opentld Domain Layer
pub mod answer;
pub mod config;
pub mod errors;
pub mod formatter;
pub mod question;
pub mod record;
pub mod registry;

pub use answer::Answer;
pub use config::Config;
pub use errors::ResolveError;
pub use question::{Question, APEX_HOST};
pub use record::{RecordFamily, RecordType, StoredRecord, DEFAULT_TTL, WILDCARD_HOST};
pub use registry::{RegisteredDomain, Tld};
