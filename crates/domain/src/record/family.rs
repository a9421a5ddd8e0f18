/// Formatting strategy for a stored record value.
///
/// Every supported type tag maps to exactly one family; tags outside the
/// table fall back to `Opaque` so future types pass through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFamily {
    /// Raw string carried as-is (A, AAAA, CNAME, ...).
    Opaque,
    /// One or more character-strings (TXT, SPF).
    TextList,
    /// `(preference, target)`-shaped pair synthesized from the raw value
    /// and the stored priority when not already structured (MX, URI, ...).
    PriorityTuple,
    /// JSON-only payload; the stored value must already be structured
    /// (SRV, SOA, the DNSSEC family, ...).
    Structured,
}

impl RecordFamily {
    pub fn of(tag: &str) -> RecordFamily {
        match tag.to_uppercase().as_str() {
            "A" | "AAAA" | "CNAME" | "NS" | "PTR" | "DNAME" | "ANAME" => RecordFamily::Opaque,

            "TXT" | "SPF" => RecordFamily::TextList,

            "MX" | "KX" | "AFSDB" | "RT" | "URI" => RecordFamily::PriorityTuple,

            "SRV" | "SOA" | "NAPTR" | "CAA" | "HINFO" | "LOC" | "SVCB" | "HTTPS" | "DS"
            | "DNSKEY" | "CDS" | "CDNSKEY" | "RRSIG" | "NSEC" | "NSEC3" | "NSEC3PARAM"
            | "TLSA" | "SMIMEA" | "SSHFP" | "CERT" | "IPSECKEY" | "OPENPGPKEY" | "ZONEMD"
            | "CSYNC" | "DHCID" | "EUI48" | "EUI64" | "NID" | "L32" | "L64" | "LP" | "HIP"
            | "TKEY" | "TSIG" | "APL" | "GPOS" => RecordFamily::Structured,

            _ => RecordFamily::Opaque,
        }
    }
}
