use std::sync::Arc;

/// A user-claimed top-level domain as registered in the store. System TLDs
/// live in configuration instead and are implicitly public and free.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tld {
    pub name: Arc<str>,
    pub is_public: bool,
    pub price: i64,
}

/// A domain registered under a managed TLD. `(tld, name)` is unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredDomain {
    pub id: i64,
    pub tld: Arc<str>,
    pub name: Arc<str>,
}
