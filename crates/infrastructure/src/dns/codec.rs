//! Wire Codec — decodes inbound DoH payloads and encodes authoritative
//! responses with `hickory-proto`.
//!
//! Answer data arrives as the RR Formatter's JSON shapes. Types hickory
//! models get native `RData` constructors; the rest are assembled as
//! RFC 3597 opaque RDATA (`wire` module) and emitted through
//! `RData::Unknown`. A record whose data cannot be mapped is skipped, never
//! fatal.

use super::wire;
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::rdata::{ANAME, CNAME, MX, NS, NULL, PTR, SOA, SRV, TXT};
use hickory_proto::rr::{DNSClass, Name, RData, Record, RecordType as WireType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use opentld_application::ports::{DecodedQuery, WireCodec};
use opentld_domain::{Answer, Question, RecordType, ResolveError};
use serde_json::Value;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;
use tracing::debug;

pub struct HickoryWireCodec;

impl HickoryWireCodec {
    pub fn new() -> Self {
        Self
    }

    fn serialize(message: &Message) -> Result<Vec<u8>, ResolveError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);
        message
            .emit(&mut encoder)
            .map_err(|e| ResolveError::CodecError(format!("failed to serialize response: {}", e)))?;
        Ok(buf)
    }
}

impl Default for HickoryWireCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl WireCodec for HickoryWireCodec {
    fn decode(&self, bytes: &[u8]) -> Result<DecodedQuery, ResolveError> {
        let message = Message::from_vec(bytes)
            .map_err(|e| ResolveError::InvalidQuery(format!("failed to parse DNS message: {}", e)))?;

        let query = message
            .queries()
            .first()
            .ok_or_else(|| ResolveError::InvalidQuery("empty question section".to_string()))?;

        let name = query.name().to_utf8();
        let name = name.strip_suffix('.').unwrap_or(&name);
        let record_type = RecordType::from_u16(u16::from(query.query_type()));

        Ok(DecodedQuery {
            id: message.id(),
            recursion_desired: message.recursion_desired(),
            question: Question::new(name, record_type),
        })
    }

    fn encode(&self, query: &DecodedQuery, answers: &[Answer]) -> Result<Vec<u8>, ResolveError> {
        let mut message = Message::new(query.id, MessageType::Response, OpCode::Query);
        message.set_recursion_desired(query.recursion_desired);
        message.set_authoritative(true);

        let question_name = absolute_name(&query.question.name)?;
        let mut echoed = Query::new();
        echoed.set_name(question_name);
        echoed.set_query_type(WireType::from(query.question.record_type.to_u16()));
        echoed.set_query_class(DNSClass::IN);
        message.add_query(echoed);

        for answer in answers {
            match record_for(answer) {
                Some(record) => {
                    message.add_answer(record);
                }
                None => {
                    debug!(
                        name = %answer.name,
                        record_type = %answer.record_type,
                        "skipping answer with unmappable data"
                    );
                }
            }
        }

        Self::serialize(&message)
    }
}

fn absolute_name(name: &str) -> Result<Name, ResolveError> {
    Name::from_utf8(format!("{}.", name.trim_end_matches('.')))
        .map_err(|e| ResolveError::CodecError(format!("invalid name '{}': {}", name, e)))
}

fn record_for(answer: &Answer) -> Option<Record> {
    let record_type = RecordType::from_str(&answer.record_type).ok()?;
    let name = absolute_name(&answer.name).ok()?;
    let rdata = rdata_for(record_type, &answer.data)?;
    Some(Record::from_rdata(name, answer.ttl, rdata))
}

fn rdata_for(record_type: RecordType, data: &Value) -> Option<RData> {
    match record_type {
        RecordType::A => data
            .as_str()?
            .parse::<Ipv4Addr>()
            .ok()
            .map(|ip| RData::A(ip.into())),
        RecordType::AAAA => data
            .as_str()?
            .parse::<Ipv6Addr>()
            .ok()
            .map(|ip| RData::AAAA(ip.into())),

        RecordType::CNAME => name_of(data.as_str()?).map(|n| RData::CNAME(CNAME(n))),
        RecordType::NS => name_of(data.as_str()?).map(|n| RData::NS(NS(n))),
        RecordType::PTR => name_of(data.as_str()?).map(|n| RData::PTR(PTR(n))),
        RecordType::ANAME => name_of(data.as_str()?).map(|n| RData::ANAME(ANAME(n))),

        RecordType::TXT => {
            let parts: Option<Vec<String>> = data
                .as_array()?
                .iter()
                .map(|part| part.as_str().map(str::to_string))
                .collect();
            Some(RData::TXT(TXT::new(parts?)))
        }

        RecordType::MX => {
            let preference = wire::u16_field(data, "preference")?;
            let exchange = name_of(wire::str_field(data, "exchange")?)?;
            Some(RData::MX(MX::new(preference, exchange)))
        }

        RecordType::SRV => {
            let priority = wire::u16_field(data, "priority")?;
            let weight = wire::u16_field(data, "weight")?;
            let port = wire::u16_field(data, "port")?;
            let target = name_of(wire::str_field(data, "target")?)?;
            Some(RData::SRV(SRV::new(priority, weight, port, target)))
        }

        RecordType::SOA => {
            let mname = name_of(wire::str_field(data, "mname")?)?;
            let rname = name_of(wire::str_field(data, "rname")?)?;
            Some(RData::SOA(SOA::new(
                mname,
                rname,
                wire::u32_field(data, "serial")?,
                wire::u32_field(data, "refresh")? as i32,
                wire::u32_field(data, "retry")? as i32,
                wire::u32_field(data, "expire")? as i32,
                wire::u32_field(data, "minimum")?,
            )))
        }

        // Everything below has no rdata model in hickory-proto; the bytes
        // are assembled by the wire module and carried as RFC 3597 opaque
        // RDATA.
        RecordType::URI => opaque(record_type, wire::uri_rdata(data)),
        RecordType::KX => opaque(record_type, wire::pref_name_rdata(data, "preference", "exchanger")),
        RecordType::AFSDB => opaque(record_type, wire::pref_name_rdata(data, "subtype", "hostname")),
        RecordType::RT => opaque(record_type, wire::pref_name_rdata(data, "preference", "intermediate")),
        RecordType::DNAME => opaque(record_type, wire::dname_rdata(data.as_str()?)),
        RecordType::SPF => opaque(record_type, wire::char_strings_rdata(data.as_array()?)),
        RecordType::CAA => opaque(record_type, wire::caa_rdata(data)),
        RecordType::NAPTR => opaque(record_type, wire::naptr_rdata(data)),
        RecordType::HINFO => opaque(record_type, wire::hinfo_rdata(data)),
        RecordType::DS | RecordType::CDS => opaque(record_type, wire::ds_rdata(data)),
        RecordType::DNSKEY | RecordType::CDNSKEY => opaque(record_type, wire::dnskey_rdata(data)),
        RecordType::RRSIG => opaque(record_type, wire::rrsig_rdata(data, tag_code)),
        RecordType::NSEC => opaque(record_type, wire::nsec_rdata(data, tag_code)),
        RecordType::NSEC3 => opaque(record_type, wire::nsec3_rdata(data, tag_code)),
        RecordType::NSEC3PARAM => opaque(record_type, wire::nsec3param_rdata(data)),
        RecordType::TLSA | RecordType::SMIMEA => opaque(record_type, wire::tlsa_rdata(data)),
        RecordType::SSHFP => opaque(record_type, wire::sshfp_rdata(data)),
        RecordType::CERT => opaque(record_type, wire::cert_rdata(data)),
        RecordType::OPENPGPKEY => opaque(record_type, wire::openpgpkey_rdata(data)),
        RecordType::IPSECKEY => opaque(record_type, wire::ipseckey_rdata(data)),
        RecordType::SVCB | RecordType::HTTPS => opaque(record_type, wire::svcb_rdata(data)),
        RecordType::ZONEMD => opaque(record_type, wire::zonemd_rdata(data)),
        RecordType::CSYNC => opaque(record_type, wire::csync_rdata(data, tag_code)),
        RecordType::DHCID => opaque(record_type, wire::dhcid_rdata(data)),
        RecordType::EUI48 => opaque(record_type, wire::eui_rdata(data, 6)),
        RecordType::EUI64 => opaque(record_type, wire::eui_rdata(data, 8)),
        RecordType::NID => opaque(record_type, wire::nid_rdata(data, "nodeId")),
        RecordType::L32 => opaque(record_type, wire::l32_rdata(data)),
        RecordType::L64 => opaque(record_type, wire::nid_rdata(data, "locator")),
        RecordType::LP => opaque(record_type, wire::lp_rdata(data)),
        RecordType::GPOS => opaque(record_type, wire::gpos_rdata(data)),
        RecordType::LOC => opaque(record_type, wire::loc_rdata(data)),

        // Meta/query-only types and anything unrecognized never encode.
        RecordType::OPT
        | RecordType::ANY
        | RecordType::APL
        | RecordType::HIP
        | RecordType::TKEY
        | RecordType::TSIG
        | RecordType::Unknown(_) => None,
    }
}

fn opaque(record_type: RecordType, bytes: Option<Vec<u8>>) -> Option<RData> {
    let rdata = NULL::with(bytes?);
    Some(RData::Unknown {
        code: record_type.to_u16().into(),
        rdata,
    })
}

fn name_of(name: &str) -> Option<Name> {
    Name::from_utf8(format!("{}.", name.trim_end_matches('.'))).ok()
}

fn tag_code(tag: &str) -> Option<u16> {
    RecordType::from_str(tag).ok().map(|rt| rt.to_u16())
}
