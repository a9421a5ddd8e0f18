mod helpers;

use helpers::mock_repositories::{
    MockDomainRepository, MockRecordRepository, MockTldRepository, MockUpstreamResolver,
    StubWireCodec,
};
use opentld_application::ports::UpstreamReply;
use opentld_application::use_cases::{Resolution, ResolveQueryUseCase, ResolverSettings};
use opentld_domain::config::RegistryConfig;
use opentld_domain::{RecordType, ResolveError, StoredRecord};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

fn settings(system_tlds: Vec<&str>) -> ResolverSettings {
    ResolverSettings {
        registry: RegistryConfig {
            system_tlds: system_tlds.into_iter().map(str::to_string).collect(),
        },
        deadline: Duration::from_secs(5),
    }
}

fn record(tag: &str, host: &str, value: &str) -> StoredRecord {
    StoredRecord {
        record_type: tag.to_string(),
        host: host.to_string(),
        value: value.to_string(),
        priority: None,
        ttl: None,
    }
}

struct Fixture {
    codec: Arc<StubWireCodec>,
    tlds: Arc<MockTldRepository>,
    domains: Arc<MockDomainRepository>,
    records: Arc<MockRecordRepository>,
    upstream: Arc<MockUpstreamResolver>,
}

impl Fixture {
    fn use_case(&self, settings: ResolverSettings) -> ResolveQueryUseCase {
        ResolveQueryUseCase::new(
            self.codec.clone(),
            self.tlds.clone(),
            self.domains.clone(),
            self.records.clone(),
            self.upstream.clone(),
            settings,
        )
    }
}

fn fixture(codec: StubWireCodec, tlds: MockTldRepository, domains: MockDomainRepository) -> Fixture {
    Fixture {
        codec: Arc::new(codec),
        tlds: Arc::new(tlds),
        domains: Arc::new(domains),
        records: Arc::new(MockRecordRepository::new()),
        upstream: Arc::new(MockUpstreamResolver::new()),
    }
}

// ── proxy path ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_unmanaged_tld_forwards_exact_bytes() {
    let fx = fixture(
        StubWireCodec::for_question("foo.bar.example", RecordType::A),
        MockTldRepository::with_tlds(vec!["shop"]),
        MockDomainRepository::new(),
    );
    let use_case = fx.use_case(settings(vec!["free"]));

    let raw = vec![0xDE, 0xAD, 0xBE, 0xEF];
    let result = use_case.execute(&raw, Some("google")).await.unwrap();

    let Resolution::Proxied(reply) = result else {
        panic!("expected proxied resolution");
    };
    assert_eq!(reply.status, 200);
    assert_eq!(reply.body, vec![0xAA, 0xBB]);

    let forwarded = fx.upstream.forwarded();
    assert_eq!(forwarded.len(), 1);
    assert_eq!(forwarded[0].0, raw);
    assert_eq!(forwarded[0].1.as_deref(), Some("google"));

    // Nothing was answered locally.
    assert!(fx.codec.encoded_answer_sets().is_empty());
}

#[tokio::test]
async fn test_upstream_error_status_is_relayed() {
    let fx = fixture(
        StubWireCodec::for_question("foo.example", RecordType::A),
        MockTldRepository::new(),
        MockDomainRepository::new(),
    );
    fx.upstream.set_reply(UpstreamReply {
        status: 502,
        content_type: Some("text/plain".to_string()),
        body: b"bad gateway".to_vec(),
    });
    let use_case = fx.use_case(settings(vec![]));

    let Resolution::Proxied(reply) = use_case.execute(&[1, 2, 3], None).await.unwrap() else {
        panic!("expected proxied resolution");
    };
    assert_eq!(reply.status, 502);
    assert_eq!(reply.body, b"bad gateway".to_vec());
}

// ── authority decision ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_system_tld_is_managed_without_store_row() {
    let fx = fixture(
        StubWireCodec::for_question("acme.free", RecordType::A),
        MockTldRepository::new(),
        MockDomainRepository::with_domain("free", "acme", 1),
    );
    let use_case = fx.use_case(settings(vec!["free"]));

    let result = use_case.execute(&[0], None).await.unwrap();
    assert!(matches!(result, Resolution::Authoritative(_)));
    assert!(fx.upstream.forwarded().is_empty());
}

#[tokio::test]
async fn test_bare_tld_query_is_not_resolvable() {
    let fx = fixture(
        StubWireCodec::for_question("shop", RecordType::A),
        MockTldRepository::with_tlds(vec!["shop"]),
        MockDomainRepository::new(),
    );
    let use_case = fx.use_case(settings(vec![]));

    let result = use_case.execute(&[0], None).await;
    assert!(matches!(result, Err(ResolveError::NameNotResolvable)));
}

#[tokio::test]
async fn test_absent_domain_answers_empty_noerror() {
    let fx = fixture(
        StubWireCodec::for_question("www.ghost.shop", RecordType::A),
        MockTldRepository::with_tlds(vec!["shop"]),
        MockDomainRepository::new(),
    );
    let use_case = fx.use_case(settings(vec![]));

    let result = use_case.execute(&[0], None).await.unwrap();
    let Resolution::Authoritative(bytes) = result else {
        panic!("expected authoritative resolution");
    };
    assert_eq!(bytes, vec![0]);

    let sets = fx.codec.encoded_answer_sets();
    assert_eq!(sets.len(), 1);
    assert!(sets[0].is_empty());
}

#[tokio::test]
async fn test_decode_failure_is_invalid_query() {
    let fx = fixture(
        StubWireCodec::failing(),
        MockTldRepository::new(),
        MockDomainRepository::new(),
    );
    let use_case = fx.use_case(settings(vec![]));

    let result = use_case.execute(&[0xFF], None).await;
    assert!(matches!(result, Err(ResolveError::InvalidQuery(_))));
}

#[tokio::test]
async fn test_zero_label_question_is_invalid_query() {
    let fx = fixture(
        StubWireCodec::for_question("", RecordType::A),
        MockTldRepository::new(),
        MockDomainRepository::new(),
    );
    let use_case = fx.use_case(settings(vec![]));

    let result = use_case.execute(&[0], None).await;
    assert!(matches!(result, Err(ResolveError::InvalidQuery(_))));
}

// ── record selection ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_exact_host_and_wildcard_both_included() {
    let fx = fixture(
        StubWireCodec::for_question("www.acme.shop", RecordType::A),
        MockTldRepository::with_tlds(vec!["shop"]),
        MockDomainRepository::with_domain("shop", "acme", 7),
    );
    fx.records.add(7, record("A", "www", "203.0.113.5")).await;
    fx.records.add(7, record("A", "*", "203.0.113.99")).await;
    let use_case = fx.use_case(settings(vec![]));

    use_case.execute(&[0], None).await.unwrap();

    let sets = fx.codec.encoded_answer_sets();
    assert_eq!(sets[0].len(), 2);
    let values: Vec<_> = sets[0].iter().map(|a| a.data.clone()).collect();
    assert!(values.contains(&json!("203.0.113.5")));
    assert!(values.contains(&json!("203.0.113.99")));
}

#[tokio::test]
async fn test_cname_included_for_any_query_type() {
    let fx = fixture(
        StubWireCodec::for_question("www.acme.shop", RecordType::TXT),
        MockTldRepository::with_tlds(vec!["shop"]),
        MockDomainRepository::with_domain("shop", "acme", 7),
    );
    fx.records.add(7, record("CNAME", "www", "cdn.acme.shop")).await;
    fx.records.add(7, record("A", "www", "203.0.113.5")).await;
    let use_case = fx.use_case(settings(vec![]));

    use_case.execute(&[0], None).await.unwrap();

    let sets = fx.codec.encoded_answer_sets();
    assert_eq!(sets[0].len(), 1);
    assert_eq!(sets[0][0].record_type, "CNAME");
}

#[tokio::test]
async fn test_any_query_returns_every_record() {
    let fx = fixture(
        StubWireCodec::for_question("acme.shop", RecordType::ANY),
        MockTldRepository::with_tlds(vec!["shop"]),
        MockDomainRepository::with_domain("shop", "acme", 7),
    );
    fx.records.add(7, record("A", "@", "203.0.113.5")).await;
    fx.records.add(7, record("TXT", "@", "hello")).await;
    fx.records.add(7, record("MX", "@", "mail.acme.shop")).await;
    let use_case = fx.use_case(settings(vec![]));

    use_case.execute(&[0], None).await.unwrap();

    assert_eq!(fx.codec.encoded_answer_sets()[0].len(), 3);
}

#[tokio::test]
async fn test_type_filter_drops_non_matching_records() {
    let fx = fixture(
        StubWireCodec::for_question("acme.shop", RecordType::A),
        MockTldRepository::with_tlds(vec!["shop"]),
        MockDomainRepository::with_domain("shop", "acme", 7),
    );
    fx.records.add(7, record("A", "@", "203.0.113.5")).await;
    fx.records.add(7, record("TXT", "@", "hello")).await;
    let use_case = fx.use_case(settings(vec![]));

    use_case.execute(&[0], None).await.unwrap();

    let sets = fx.codec.encoded_answer_sets();
    assert_eq!(sets[0].len(), 1);
    assert_eq!(sets[0][0].record_type, "A");
}

// ── answer shaping ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_mx_plain_string_synthesizes_preference_tuple() {
    let fx = fixture(
        StubWireCodec::for_question("acme.shop", RecordType::MX),
        MockTldRepository::with_tlds(vec!["shop"]),
        MockDomainRepository::with_domain("shop", "acme", 7),
    );
    let mut mx = record("MX", "@", "mail.acme.shop");
    mx.priority = Some(20);
    fx.records.add(7, mx).await;
    let use_case = fx.use_case(settings(vec![]));

    use_case.execute(&[0], None).await.unwrap();

    let sets = fx.codec.encoded_answer_sets();
    assert_eq!(
        sets[0][0].data,
        json!({"preference": 20, "exchange": "mail.acme.shop"})
    );
}

#[tokio::test]
async fn test_answer_carries_query_name_and_default_ttl() {
    let fx = fixture(
        StubWireCodec::for_question("WWW.acme.shop", RecordType::A),
        MockTldRepository::with_tlds(vec!["shop"]),
        MockDomainRepository::with_domain("shop", "acme", 7),
    );
    fx.records.add(7, record("A", "www", "203.0.113.5")).await;
    let use_case = fx.use_case(settings(vec![]));

    use_case.execute(&[0], None).await.unwrap();

    let sets = fx.codec.encoded_answer_sets();
    assert_eq!(sets[0][0].name.as_ref(), "WWW.acme.shop");
    assert_eq!(sets[0][0].ttl, 300);
}

#[tokio::test]
async fn test_stored_ttl_overrides_default() {
    let fx = fixture(
        StubWireCodec::for_question("acme.shop", RecordType::A),
        MockTldRepository::with_tlds(vec!["shop"]),
        MockDomainRepository::with_domain("shop", "acme", 7),
    );
    let mut r = record("A", "@", "203.0.113.5");
    r.ttl = Some(86400);
    fx.records.add(7, r).await;
    let use_case = fx.use_case(settings(vec![]));

    use_case.execute(&[0], None).await.unwrap();

    assert_eq!(fx.codec.encoded_answer_sets()[0][0].ttl, 86400);
}

// ── deadline ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_deadline_expiry_maps_to_internal_error() {
    let fx = fixture(
        StubWireCodec::for_question("foo.example", RecordType::A),
        MockTldRepository::new(),
        MockDomainRepository::new(),
    );
    fx.upstream.set_delay(Duration::from_millis(200));

    let mut tight = settings(vec![]);
    tight.deadline = Duration::from_millis(10);
    let use_case = fx.use_case(tight);

    let result = use_case.execute(&[0], None).await;
    assert!(matches!(result, Err(ResolveError::Internal(_))));
}
