//! Raw RDATA assembly for record types hickory-proto has no rdata model for.
//!
//! The registry stores these types as JSON objects; this module lays their
//! fields out as RFC 3597 opaque RDATA bytes. Names are emitted uncompressed
//! (compression in RDATA is forbidden for post-RFC-1035 types anyway).
//! Every builder returns `None` on a missing or malformed field so one bad
//! record degrades to a skipped answer instead of a failed response.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde_json::Value;

// ── field extraction ───────────────────────────────────────────────────────

pub fn str_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key)?.as_str()
}

pub fn u8_field(value: &Value, key: &str) -> Option<u8> {
    u16_field(value, key).and_then(|n| u8::try_from(n).ok())
}

pub fn u16_field(value: &Value, key: &str) -> Option<u16> {
    value.get(key)?.as_u64().and_then(|n| u16::try_from(n).ok())
}

pub fn u32_field(value: &Value, key: &str) -> Option<u32> {
    value.get(key)?.as_u64().and_then(|n| u32::try_from(n).ok())
}

// ── primitive encoders ─────────────────────────────────────────────────────

/// Uncompressed wire-format domain name. The root (empty or `.`) encodes as
/// a single zero octet.
pub fn emit_name(out: &mut Vec<u8>, name: &str) -> Option<()> {
    let trimmed = name.trim_end_matches('.');
    if trimmed.is_empty() {
        out.push(0);
        return Some(());
    }
    for label in trimmed.split('.') {
        let bytes = label.as_bytes();
        if bytes.is_empty() || bytes.len() > 63 {
            return None;
        }
        out.push(bytes.len() as u8);
        out.extend_from_slice(bytes);
    }
    out.push(0);
    Some(())
}

/// Length-prefixed character-string (max 255 octets).
pub fn emit_char_string(out: &mut Vec<u8>, text: &str) -> Option<()> {
    let bytes = text.as_bytes();
    if bytes.len() > 255 {
        return None;
    }
    out.push(bytes.len() as u8);
    out.extend_from_slice(bytes);
    Some(())
}

/// NSEC/NSEC3/CSYNC type bitmap windows (RFC 4034 §4.1.2).
pub fn emit_type_bitmaps(out: &mut Vec<u8>, mut codes: Vec<u16>) {
    codes.sort_unstable();
    codes.dedup();

    let mut index = 0;
    while index < codes.len() {
        let window = (codes[index] >> 8) as u8;
        let mut bitmap = [0u8; 32];
        let mut max_octet = 0usize;

        while index < codes.len() && (codes[index] >> 8) as u8 == window {
            let low = (codes[index] & 0xFF) as usize;
            bitmap[low / 8] |= 0x80 >> (low % 8);
            max_octet = low / 8;
            index += 1;
        }

        out.push(window);
        out.push((max_octet + 1) as u8);
        out.extend_from_slice(&bitmap[..=max_octet]);
    }
}

pub fn decode_hex(text: &str) -> Option<Vec<u8>> {
    let cleaned: String = text
        .chars()
        .filter(|c| !matches!(c, ':' | '-' | ' '))
        .collect();
    if cleaned.len() % 2 != 0 {
        return None;
    }
    (0..cleaned.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&cleaned[i..i + 2], 16).ok())
        .collect()
}

pub fn decode_base64(text: &str) -> Option<Vec<u8>> {
    BASE64.decode(text.trim()).ok()
}

// ── per-type RDATA builders ────────────────────────────────────────────────

/// URI (RFC 7553): priority, weight, target (unprefixed octets).
pub fn uri_rdata(value: &Value) -> Option<Vec<u8>> {
    let mut out = Vec::new();
    out.extend_from_slice(&u16_field(value, "priority")?.to_be_bytes());
    out.extend_from_slice(&u16_field(value, "weight")?.to_be_bytes());
    out.extend_from_slice(str_field(value, "target")?.as_bytes());
    Some(out)
}

/// KX, AFSDB and RT share the `u16 + name` layout; only field names differ.
pub fn pref_name_rdata(value: &Value, pref_key: &str, name_key: &str) -> Option<Vec<u8>> {
    let mut out = Vec::new();
    out.extend_from_slice(&u16_field(value, pref_key)?.to_be_bytes());
    emit_name(&mut out, str_field(value, name_key)?)?;
    Some(out)
}

/// DNAME (RFC 6672): a single uncompressed name.
pub fn dname_rdata(target: &str) -> Option<Vec<u8>> {
    let mut out = Vec::new();
    emit_name(&mut out, target)?;
    Some(out)
}

/// SPF (RFC 7208, historic type 99): TXT-style character-strings.
pub fn char_strings_rdata(parts: &[Value]) -> Option<Vec<u8>> {
    let mut out = Vec::new();
    for part in parts {
        emit_char_string(&mut out, part.as_str()?)?;
    }
    Some(out)
}

/// CAA (RFC 8659): flags, tag character-string, unprefixed value.
pub fn caa_rdata(value: &Value) -> Option<Vec<u8>> {
    let mut out = Vec::new();
    out.push(u8_field(value, "flags")?);
    emit_char_string(&mut out, str_field(value, "tag")?)?;
    out.extend_from_slice(str_field(value, "value")?.as_bytes());
    Some(out)
}

/// NAPTR (RFC 3403).
pub fn naptr_rdata(value: &Value) -> Option<Vec<u8>> {
    let mut out = Vec::new();
    out.extend_from_slice(&u16_field(value, "order")?.to_be_bytes());
    out.extend_from_slice(&u16_field(value, "preference")?.to_be_bytes());
    emit_char_string(&mut out, str_field(value, "flags")?)?;
    emit_char_string(&mut out, str_field(value, "services")?)?;
    emit_char_string(&mut out, str_field(value, "regexp")?)?;
    emit_name(&mut out, str_field(value, "replacement")?)?;
    Some(out)
}

/// HINFO (RFC 1035): two character-strings.
pub fn hinfo_rdata(value: &Value) -> Option<Vec<u8>> {
    let mut out = Vec::new();
    emit_char_string(&mut out, str_field(value, "cpu")?)?;
    emit_char_string(&mut out, str_field(value, "os")?)?;
    Some(out)
}

/// DS and CDS (RFC 4034 §5.1): keyTag, algorithm, digestType, hex digest.
pub fn ds_rdata(value: &Value) -> Option<Vec<u8>> {
    let mut out = Vec::new();
    out.extend_from_slice(&u16_field(value, "keyTag")?.to_be_bytes());
    out.push(u8_field(value, "algorithm")?);
    out.push(u8_field(value, "digestType")?);
    out.extend_from_slice(&decode_hex(str_field(value, "digest")?)?);
    Some(out)
}

/// DNSKEY and CDNSKEY (RFC 4034 §2.1): flags, protocol (3), algorithm,
/// base64 key.
pub fn dnskey_rdata(value: &Value) -> Option<Vec<u8>> {
    let mut out = Vec::new();
    out.extend_from_slice(&u16_field(value, "flags")?.to_be_bytes());
    out.push(u8_field(value, "protocol").unwrap_or(3));
    out.push(u8_field(value, "algorithm")?);
    out.extend_from_slice(&decode_base64(str_field(value, "key")?)?);
    Some(out)
}

/// RRSIG (RFC 4034 §3.1). `typeCovered` accepts a mnemonic or a numeric
/// code.
pub fn rrsig_rdata(value: &Value, type_code: impl Fn(&str) -> Option<u16>) -> Option<Vec<u8>> {
    let covered = match value.get("typeCovered")? {
        Value::String(tag) => type_code(tag)?,
        number => u16::try_from(number.as_u64()?).ok()?,
    };

    let mut out = Vec::new();
    out.extend_from_slice(&covered.to_be_bytes());
    out.push(u8_field(value, "algorithm")?);
    out.push(u8_field(value, "labels")?);
    out.extend_from_slice(&u32_field(value, "originalTTL")?.to_be_bytes());
    out.extend_from_slice(&u32_field(value, "expiration")?.to_be_bytes());
    out.extend_from_slice(&u32_field(value, "inception")?.to_be_bytes());
    out.extend_from_slice(&u16_field(value, "keyTag")?.to_be_bytes());
    emit_name(&mut out, str_field(value, "signersName")?)?;
    out.extend_from_slice(&decode_base64(str_field(value, "signature")?)?);
    Some(out)
}

/// NSEC (RFC 4034 §4.1): next domain + type bitmaps.
pub fn nsec_rdata(value: &Value, type_code: impl Fn(&str) -> Option<u16>) -> Option<Vec<u8>> {
    let mut out = Vec::new();
    emit_name(&mut out, str_field(value, "nextDomain")?)?;
    let codes = rrtype_codes(value, type_code)?;
    emit_type_bitmaps(&mut out, codes);
    Some(out)
}

/// NSEC3 (RFC 5155 §3.2). Salt and next hashed owner are stored as hex.
pub fn nsec3_rdata(value: &Value, type_code: impl Fn(&str) -> Option<u16>) -> Option<Vec<u8>> {
    let mut out = Vec::new();
    out.push(u8_field(value, "algorithm")?);
    out.push(u8_field(value, "flags")?);
    out.extend_from_slice(&u16_field(value, "iterations")?.to_be_bytes());
    emit_length_prefixed_hex(&mut out, str_field(value, "salt").unwrap_or(""))?;
    emit_length_prefixed_hex(&mut out, str_field(value, "nextDomain")?)?;
    let codes = rrtype_codes(value, type_code)?;
    emit_type_bitmaps(&mut out, codes);
    Some(out)
}

/// NSEC3PARAM (RFC 5155 §4.2).
pub fn nsec3param_rdata(value: &Value) -> Option<Vec<u8>> {
    let mut out = Vec::new();
    out.push(u8_field(value, "algorithm")?);
    out.push(u8_field(value, "flags")?);
    out.extend_from_slice(&u16_field(value, "iterations")?.to_be_bytes());
    emit_length_prefixed_hex(&mut out, str_field(value, "salt").unwrap_or(""))?;
    Some(out)
}

/// TLSA and SMIMEA (RFC 6698 / RFC 8162): same layout.
pub fn tlsa_rdata(value: &Value) -> Option<Vec<u8>> {
    let mut out = Vec::new();
    out.push(u8_field(value, "usage")?);
    out.push(u8_field(value, "selector")?);
    out.push(u8_field(value, "matchingType")?);
    out.extend_from_slice(&decode_hex(str_field(value, "certificate")?)?);
    Some(out)
}

/// SSHFP (RFC 4255).
pub fn sshfp_rdata(value: &Value) -> Option<Vec<u8>> {
    let mut out = Vec::new();
    out.push(u8_field(value, "algorithm")?);
    out.push(u8_field(value, "fingerprintType")?);
    out.extend_from_slice(&decode_hex(str_field(value, "fingerprint")?)?);
    Some(out)
}

/// CERT (RFC 4398).
pub fn cert_rdata(value: &Value) -> Option<Vec<u8>> {
    let mut out = Vec::new();
    out.extend_from_slice(&u16_field(value, "certType")?.to_be_bytes());
    out.extend_from_slice(&u16_field(value, "keyTag")?.to_be_bytes());
    out.push(u8_field(value, "algorithm")?);
    out.extend_from_slice(&decode_base64(str_field(value, "certificate")?)?);
    Some(out)
}

/// OPENPGPKEY (RFC 7929): raw base64 key material.
pub fn openpgpkey_rdata(value: &Value) -> Option<Vec<u8>> {
    decode_base64(str_field(value, "key")?)
}

/// IPSECKEY (RFC 4025). Gateway type 0 = none, 1 = IPv4, 2 = IPv6, 3 = name.
pub fn ipseckey_rdata(value: &Value) -> Option<Vec<u8>> {
    let gateway_type = u8_field(value, "gatewayType")?;
    let mut out = Vec::new();
    out.push(u8_field(value, "precedence")?);
    out.push(gateway_type);
    out.push(u8_field(value, "algorithm")?);
    match gateway_type {
        0 => {}
        1 => {
            let ip: std::net::Ipv4Addr = str_field(value, "gateway")?.parse().ok()?;
            out.extend_from_slice(&ip.octets());
        }
        2 => {
            let ip: std::net::Ipv6Addr = str_field(value, "gateway")?.parse().ok()?;
            out.extend_from_slice(&ip.octets());
        }
        3 => emit_name(&mut out, str_field(value, "gateway")?)?,
        _ => return None,
    }
    out.extend_from_slice(&decode_base64(str_field(value, "publicKey")?)?);
    Some(out)
}

/// SVCB and HTTPS (RFC 9460): priority + target. SvcParams beyond the
/// mandatory fields are not registry-representable yet.
pub fn svcb_rdata(value: &Value) -> Option<Vec<u8>> {
    let mut out = Vec::new();
    out.extend_from_slice(&u16_field(value, "priority")?.to_be_bytes());
    emit_name(&mut out, str_field(value, "target")?)?;
    Some(out)
}

/// ZONEMD (RFC 8976).
pub fn zonemd_rdata(value: &Value) -> Option<Vec<u8>> {
    let mut out = Vec::new();
    out.extend_from_slice(&u32_field(value, "serial")?.to_be_bytes());
    out.push(u8_field(value, "scheme")?);
    out.push(u8_field(value, "hashAlgo")?);
    out.extend_from_slice(&decode_hex(str_field(value, "digest")?)?);
    Some(out)
}

/// CSYNC (RFC 7477).
pub fn csync_rdata(value: &Value, type_code: impl Fn(&str) -> Option<u16>) -> Option<Vec<u8>> {
    let mut out = Vec::new();
    out.extend_from_slice(&u32_field(value, "serial")?.to_be_bytes());
    out.extend_from_slice(&u16_field(value, "flags")?.to_be_bytes());
    let codes = rrtype_codes(value, type_code)?;
    emit_type_bitmaps(&mut out, codes);
    Some(out)
}

/// DHCID (RFC 4701).
pub fn dhcid_rdata(value: &Value) -> Option<Vec<u8>> {
    let mut out = Vec::new();
    out.extend_from_slice(&u16_field(value, "identifierType")?.to_be_bytes());
    out.push(u8_field(value, "digestType")?);
    out.extend_from_slice(&decode_base64(str_field(value, "digest")?)?);
    Some(out)
}

/// EUI48/EUI64 (RFC 7043): fixed-width hex address.
pub fn eui_rdata(value: &Value, width: usize) -> Option<Vec<u8>> {
    let bytes = decode_hex(str_field(value, "address")?)?;
    if bytes.len() != width {
        return None;
    }
    Some(bytes)
}

/// NID and L64 (RFC 6742): preference + 8 hex octets.
pub fn nid_rdata(value: &Value, key: &str) -> Option<Vec<u8>> {
    let mut out = Vec::new();
    out.extend_from_slice(&u16_field(value, "preference")?.to_be_bytes());
    let bytes = decode_hex(str_field(value, key)?)?;
    if bytes.len() != 8 {
        return None;
    }
    out.extend_from_slice(&bytes);
    Some(out)
}

/// L32 (RFC 6742): preference + IPv4-shaped locator.
pub fn l32_rdata(value: &Value) -> Option<Vec<u8>> {
    let mut out = Vec::new();
    out.extend_from_slice(&u16_field(value, "preference")?.to_be_bytes());
    let ip: std::net::Ipv4Addr = str_field(value, "locator")?.parse().ok()?;
    out.extend_from_slice(&ip.octets());
    Some(out)
}

/// LP (RFC 6742): preference + name.
pub fn lp_rdata(value: &Value) -> Option<Vec<u8>> {
    pref_name_rdata(value, "preference", "fqdn")
}

/// GPOS (RFC 1712): three character-strings.
pub fn gpos_rdata(value: &Value) -> Option<Vec<u8>> {
    let mut out = Vec::new();
    emit_char_string(&mut out, str_field(value, "longitude")?)?;
    emit_char_string(&mut out, str_field(value, "latitude")?)?;
    emit_char_string(&mut out, str_field(value, "altitude")?)?;
    Some(out)
}

/// LOC (RFC 1876): fields stored in their already-encoded integer form.
pub fn loc_rdata(value: &Value) -> Option<Vec<u8>> {
    let mut out = Vec::new();
    out.push(u8_field(value, "version").unwrap_or(0));
    out.push(u8_field(value, "size")?);
    out.push(u8_field(value, "horizPrecision")?);
    out.push(u8_field(value, "vertPrecision")?);
    out.extend_from_slice(&u32_field(value, "latitude")?.to_be_bytes());
    out.extend_from_slice(&u32_field(value, "longitude")?.to_be_bytes());
    out.extend_from_slice(&u32_field(value, "altitude")?.to_be_bytes());
    Some(out)
}

fn emit_length_prefixed_hex(out: &mut Vec<u8>, hex: &str) -> Option<()> {
    let bytes = if hex.is_empty() || hex == "-" {
        Vec::new()
    } else {
        decode_hex(hex)?
    };
    if bytes.len() > 255 {
        return None;
    }
    out.push(bytes.len() as u8);
    out.extend_from_slice(&bytes);
    Some(())
}

fn rrtype_codes(value: &Value, type_code: impl Fn(&str) -> Option<u16>) -> Option<Vec<u16>> {
    value
        .get("rrtypes")?
        .as_array()?
        .iter()
        .map(|entry| match entry {
            Value::String(tag) => type_code(tag),
            number => number.as_u64().and_then(|n| u16::try_from(n).ok()),
        })
        .collect()
}
