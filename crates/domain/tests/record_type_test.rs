use opentld_domain::{RecordType, StoredRecord};
use std::str::FromStr;

fn record(tag: &str) -> StoredRecord {
    StoredRecord {
        record_type: tag.to_string(),
        host: "@".to_string(),
        value: "value".to_string(),
        priority: None,
        ttl: None,
    }
}

#[test]
fn test_wire_code_round_trip_for_known_types() {
    for code in [1u16, 2, 5, 6, 12, 15, 16, 28, 33, 43, 46, 48, 52, 64, 65, 99, 255, 256, 257] {
        let rt = RecordType::from_u16(code);
        assert!(!matches!(rt, RecordType::Unknown(_)), "code {} unmapped", code);
        assert_eq!(rt.to_u16(), code);
    }
}

#[test]
fn test_unknown_code_is_preserved() {
    let rt = RecordType::from_u16(4242);
    assert_eq!(rt, RecordType::Unknown(4242));
    assert_eq!(rt.to_u16(), 4242);
    assert_eq!(rt.to_string(), "TYPE4242");
}

#[test]
fn test_from_str_accepts_mnemonics_and_rfc3597() {
    assert_eq!(RecordType::from_str("mx").unwrap(), RecordType::MX);
    assert_eq!(RecordType::from_str("Caa").unwrap(), RecordType::CAA);
    assert_eq!(RecordType::from_str("TYPE1").unwrap(), RecordType::A);
    assert_eq!(
        RecordType::from_str("TYPE4242").unwrap(),
        RecordType::Unknown(4242)
    );
    assert!(RecordType::from_str("BOGUS").is_err());
}

#[test]
fn test_matches_tag_is_case_insensitive() {
    assert!(RecordType::MX.matches_tag("mx"));
    assert!(RecordType::MX.matches_tag("MX"));
    assert!(!RecordType::MX.matches_tag("TXT"));
}

#[test]
fn test_unknown_matches_only_rfc3597_spelling() {
    let rt = RecordType::Unknown(4242);
    assert!(rt.matches_tag("TYPE4242"));
    assert!(!rt.matches_tag("A"));
}

// ── answer-set filter ──────────────────────────────────────────────────────

#[test]
fn test_record_answers_matching_type() {
    assert!(record("A").answers_query(RecordType::A));
    assert!(!record("TXT").answers_query(RecordType::A));
}

#[test]
fn test_any_query_matches_every_record() {
    assert!(record("A").answers_query(RecordType::ANY));
    assert!(record("RRSIG").answers_query(RecordType::ANY));
    assert!(record("FUTURETYPE").answers_query(RecordType::ANY));
}

#[test]
fn test_cname_always_included() {
    assert!(record("CNAME").answers_query(RecordType::A));
    assert!(record("cname").answers_query(RecordType::TXT));
}

#[test]
fn test_ttl_defaults_to_300() {
    assert_eq!(record("A").ttl_or_default(), 300);
    let mut r = record("A");
    r.ttl = Some(60);
    assert_eq!(r.ttl_or_default(), 60);
}
