#![allow(dead_code)]

use async_trait::async_trait;
use opentld_application::ports::{
    DecodedQuery, DomainRepository, RecordRepository, TldRepository, UpstreamReply,
    UpstreamResolver, WireCodec,
};
use opentld_domain::{Answer, Question, RecordType, RegisteredDomain, ResolveError, StoredRecord, Tld};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::RwLock;

// ── MockTldRepository ──────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockTldRepository {
    tlds: Arc<RwLock<Vec<Tld>>>,
}

impl MockTldRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tlds(names: Vec<&str>) -> Self {
        let tlds = names
            .into_iter()
            .map(|name| Tld {
                name: Arc::from(name),
                is_public: true,
                price: 0,
            })
            .collect();
        Self {
            tlds: Arc::new(RwLock::new(tlds)),
        }
    }
}

#[async_trait]
impl TldRepository for MockTldRepository {
    async fn lookup(&self, name: &str) -> Result<Option<Tld>, ResolveError> {
        let tlds = self.tlds.read().await;
        Ok(tlds.iter().find(|t| t.name.as_ref() == name).cloned())
    }
}

// ── MockDomainRepository ───────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockDomainRepository {
    domains: Arc<RwLock<Vec<RegisteredDomain>>>,
}

impl MockDomainRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_domain(tld: &str, name: &str, id: i64) -> Self {
        Self {
            domains: Arc::new(RwLock::new(vec![RegisteredDomain {
                id,
                tld: Arc::from(tld),
                name: Arc::from(name),
            }])),
        }
    }
}

#[async_trait]
impl DomainRepository for MockDomainRepository {
    async fn lookup(
        &self,
        tld: &str,
        name: &str,
    ) -> Result<Option<RegisteredDomain>, ResolveError> {
        let domains = self.domains.read().await;
        Ok(domains
            .iter()
            .find(|d| d.tld.as_ref() == tld && d.name.as_ref() == name)
            .cloned())
    }
}

// ── MockRecordRepository ───────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockRecordRepository {
    rows: Arc<RwLock<Vec<(i64, StoredRecord)>>>,
}

impl MockRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add(&self, domain_id: i64, record: StoredRecord) {
        self.rows.write().await.push((domain_id, record));
    }
}

#[async_trait]
impl RecordRepository for MockRecordRepository {
    async fn list(&self, domain_id: i64, host: &str) -> Result<Vec<StoredRecord>, ResolveError> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .filter(|(id, record)| {
                *id == domain_id && (record.host == host || record.host == "*")
            })
            .map(|(_, record)| record.clone())
            .collect())
    }
}

// ── MockUpstreamResolver ───────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockUpstreamResolver {
    reply: Arc<Mutex<UpstreamReply>>,
    delay: Arc<Mutex<Option<Duration>>>,
    forwarded: Arc<Mutex<Vec<(Vec<u8>, Option<String>)>>>,
}

impl MockUpstreamResolver {
    pub fn new() -> Self {
        Self {
            reply: Arc::new(Mutex::new(UpstreamReply {
                status: 200,
                content_type: Some("application/dns-message".to_string()),
                body: vec![0xAA, 0xBB],
            })),
            delay: Arc::new(Mutex::new(None)),
            forwarded: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn set_reply(&self, reply: UpstreamReply) {
        *self.reply.lock().unwrap() = reply;
    }

    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = Some(delay);
    }

    pub fn forwarded(&self) -> Vec<(Vec<u8>, Option<String>)> {
        self.forwarded.lock().unwrap().clone()
    }
}

impl Default for MockUpstreamResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UpstreamResolver for MockUpstreamResolver {
    async fn forward(
        &self,
        raw_query: &[u8],
        provider: Option<&str>,
    ) -> Result<UpstreamReply, ResolveError> {
        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.forwarded
            .lock()
            .unwrap()
            .push((raw_query.to_vec(), provider.map(str::to_string)));
        Ok(self.reply.lock().unwrap().clone())
    }
}

// ── StubWireCodec ──────────────────────────────────────────────────────────

/// Test codec: returns a preconfigured decoded query (or a decode failure)
/// and captures every encoded answer set. Encoded bytes are a one-byte
/// answer count so callers can assert on the response without real wire
/// format.
pub struct StubWireCodec {
    decoded: Mutex<Option<DecodedQuery>>,
    encoded: Mutex<Vec<Vec<Answer>>>,
}

impl StubWireCodec {
    pub fn for_question(name: &str, record_type: RecordType) -> Self {
        Self {
            decoded: Mutex::new(Some(DecodedQuery {
                id: 0x1234,
                recursion_desired: true,
                question: Question::new(name, record_type),
            })),
            encoded: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            decoded: Mutex::new(None),
            encoded: Mutex::new(Vec::new()),
        }
    }

    pub fn encoded_answer_sets(&self) -> Vec<Vec<Answer>> {
        self.encoded.lock().unwrap().clone()
    }
}

impl WireCodec for StubWireCodec {
    fn decode(&self, _bytes: &[u8]) -> Result<DecodedQuery, ResolveError> {
        self.decoded
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| ResolveError::InvalidQuery("malformed message".to_string()))
    }

    fn encode(&self, _query: &DecodedQuery, answers: &[Answer]) -> Result<Vec<u8>, ResolveError> {
        self.encoded.lock().unwrap().push(answers.to_vec());
        Ok(vec![answers.len() as u8])
    }
}
