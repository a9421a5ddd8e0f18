use std::fmt;
use std::str::FromStr;

/// Resource-record type tags the resolver understands on the wire.
///
/// Query types outside the table are carried as `Unknown(code)` and rendered
/// in the RFC 3597 `TYPE<code>` form so they flow through the pipeline
/// instead of failing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    AAAA,
    AFSDB,
    ANAME,
    APL,
    CAA,
    CDNSKEY,
    CDS,
    CERT,
    CNAME,
    CSYNC,
    DHCID,
    DNAME,
    DNSKEY,
    DS,
    EUI48,
    EUI64,
    GPOS,
    HINFO,
    HIP,
    HTTPS,
    IPSECKEY,
    KX,
    L32,
    L64,
    LOC,
    LP,
    MX,
    NAPTR,
    NID,
    NS,
    NSEC,
    NSEC3,
    NSEC3PARAM,
    OPENPGPKEY,
    OPT,
    PTR,
    RRSIG,
    RT,
    SMIMEA,
    SOA,
    SPF,
    SRV,
    SSHFP,
    SVCB,
    TKEY,
    TLSA,
    TSIG,
    TXT,
    URI,
    ZONEMD,

    /// Class-level wildcard query type (QTYPE 255).
    ANY,

    Unknown(u16),
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::AFSDB => "AFSDB",
            RecordType::ANAME => "ANAME",
            RecordType::APL => "APL",
            RecordType::CAA => "CAA",
            RecordType::CDNSKEY => "CDNSKEY",
            RecordType::CDS => "CDS",
            RecordType::CERT => "CERT",
            RecordType::CNAME => "CNAME",
            RecordType::CSYNC => "CSYNC",
            RecordType::DHCID => "DHCID",
            RecordType::DNAME => "DNAME",
            RecordType::DNSKEY => "DNSKEY",
            RecordType::DS => "DS",
            RecordType::EUI48 => "EUI48",
            RecordType::EUI64 => "EUI64",
            RecordType::GPOS => "GPOS",
            RecordType::HINFO => "HINFO",
            RecordType::HIP => "HIP",
            RecordType::HTTPS => "HTTPS",
            RecordType::IPSECKEY => "IPSECKEY",
            RecordType::KX => "KX",
            RecordType::L32 => "L32",
            RecordType::L64 => "L64",
            RecordType::LOC => "LOC",
            RecordType::LP => "LP",
            RecordType::MX => "MX",
            RecordType::NAPTR => "NAPTR",
            RecordType::NID => "NID",
            RecordType::NS => "NS",
            RecordType::NSEC => "NSEC",
            RecordType::NSEC3 => "NSEC3",
            RecordType::NSEC3PARAM => "NSEC3PARAM",
            RecordType::OPENPGPKEY => "OPENPGPKEY",
            RecordType::OPT => "OPT",
            RecordType::PTR => "PTR",
            RecordType::RRSIG => "RRSIG",
            RecordType::RT => "RT",
            RecordType::SMIMEA => "SMIMEA",
            RecordType::SOA => "SOA",
            RecordType::SPF => "SPF",
            RecordType::SRV => "SRV",
            RecordType::SSHFP => "SSHFP",
            RecordType::SVCB => "SVCB",
            RecordType::TKEY => "TKEY",
            RecordType::TLSA => "TLSA",
            RecordType::TSIG => "TSIG",
            RecordType::TXT => "TXT",
            RecordType::URI => "URI",
            RecordType::ZONEMD => "ZONEMD",
            RecordType::ANY => "ANY",
            RecordType::Unknown(_) => "UNKNOWN",
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::NS => 2,
            RecordType::CNAME => 5,
            RecordType::SOA => 6,
            RecordType::PTR => 12,
            RecordType::HINFO => 13,
            RecordType::MX => 15,
            RecordType::TXT => 16,
            RecordType::AFSDB => 18,
            RecordType::RT => 21,
            RecordType::GPOS => 27,
            RecordType::AAAA => 28,
            RecordType::LOC => 29,
            RecordType::SRV => 33,
            RecordType::NAPTR => 35,
            RecordType::KX => 36,
            RecordType::CERT => 37,
            RecordType::DNAME => 39,
            RecordType::OPT => 41,
            RecordType::APL => 42,
            RecordType::DS => 43,
            RecordType::SSHFP => 44,
            RecordType::IPSECKEY => 45,
            RecordType::RRSIG => 46,
            RecordType::NSEC => 47,
            RecordType::DNSKEY => 48,
            RecordType::DHCID => 49,
            RecordType::NSEC3 => 50,
            RecordType::NSEC3PARAM => 51,
            RecordType::TLSA => 52,
            RecordType::SMIMEA => 53,
            RecordType::HIP => 55,
            RecordType::CDS => 59,
            RecordType::CDNSKEY => 60,
            RecordType::OPENPGPKEY => 61,
            RecordType::CSYNC => 62,
            RecordType::ZONEMD => 63,
            RecordType::SVCB => 64,
            RecordType::HTTPS => 65,
            RecordType::SPF => 99,
            RecordType::NID => 104,
            RecordType::L32 => 105,
            RecordType::L64 => 106,
            RecordType::LP => 107,
            RecordType::EUI48 => 108,
            RecordType::EUI64 => 109,
            RecordType::TKEY => 249,
            RecordType::TSIG => 250,
            RecordType::ANY => 255,
            RecordType::URI => 256,
            RecordType::CAA => 257,
            RecordType::ANAME => 32769,
            RecordType::Unknown(code) => *code,
        }
    }

    pub fn from_u16(code: u16) -> Self {
        match code {
            1 => RecordType::A,
            2 => RecordType::NS,
            5 => RecordType::CNAME,
            6 => RecordType::SOA,
            12 => RecordType::PTR,
            13 => RecordType::HINFO,
            15 => RecordType::MX,
            16 => RecordType::TXT,
            18 => RecordType::AFSDB,
            21 => RecordType::RT,
            27 => RecordType::GPOS,
            28 => RecordType::AAAA,
            29 => RecordType::LOC,
            33 => RecordType::SRV,
            35 => RecordType::NAPTR,
            36 => RecordType::KX,
            37 => RecordType::CERT,
            39 => RecordType::DNAME,
            41 => RecordType::OPT,
            42 => RecordType::APL,
            43 => RecordType::DS,
            44 => RecordType::SSHFP,
            45 => RecordType::IPSECKEY,
            46 => RecordType::RRSIG,
            47 => RecordType::NSEC,
            48 => RecordType::DNSKEY,
            49 => RecordType::DHCID,
            50 => RecordType::NSEC3,
            51 => RecordType::NSEC3PARAM,
            52 => RecordType::TLSA,
            53 => RecordType::SMIMEA,
            55 => RecordType::HIP,
            59 => RecordType::CDS,
            60 => RecordType::CDNSKEY,
            61 => RecordType::OPENPGPKEY,
            62 => RecordType::CSYNC,
            63 => RecordType::ZONEMD,
            64 => RecordType::SVCB,
            65 => RecordType::HTTPS,
            99 => RecordType::SPF,
            104 => RecordType::NID,
            105 => RecordType::L32,
            106 => RecordType::L64,
            107 => RecordType::LP,
            108 => RecordType::EUI48,
            109 => RecordType::EUI64,
            249 => RecordType::TKEY,
            250 => RecordType::TSIG,
            255 => RecordType::ANY,
            256 => RecordType::URI,
            257 => RecordType::CAA,
            32769 => RecordType::ANAME,
            other => RecordType::Unknown(other),
        }
    }

    /// Case-insensitive match against a stored type tag. Unknown query types
    /// only match their RFC 3597 `TYPE<code>` spelling.
    pub fn matches_tag(&self, tag: &str) -> bool {
        match self {
            RecordType::Unknown(code) => tag
                .strip_prefix("TYPE")
                .or_else(|| tag.strip_prefix("type"))
                .and_then(|digits| digits.parse::<u16>().ok())
                .map(|parsed| parsed == *code)
                .unwrap_or(false),
            known => tag.eq_ignore_ascii_case(known.as_str()),
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordType::Unknown(code) => write!(f, "TYPE{}", code),
            known => write!(f, "{}", known.as_str()),
        }
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        if let Some(code) = upper
            .strip_prefix("TYPE")
            .and_then(|digits| digits.parse::<u16>().ok())
        {
            return Ok(RecordType::from_u16(code));
        }
        match upper.as_str() {
            "A" => Ok(RecordType::A),
            "AAAA" => Ok(RecordType::AAAA),
            "AFSDB" => Ok(RecordType::AFSDB),
            "ANAME" => Ok(RecordType::ANAME),
            "APL" => Ok(RecordType::APL),
            "CAA" => Ok(RecordType::CAA),
            "CDNSKEY" => Ok(RecordType::CDNSKEY),
            "CDS" => Ok(RecordType::CDS),
            "CERT" => Ok(RecordType::CERT),
            "CNAME" => Ok(RecordType::CNAME),
            "CSYNC" => Ok(RecordType::CSYNC),
            "DHCID" => Ok(RecordType::DHCID),
            "DNAME" => Ok(RecordType::DNAME),
            "DNSKEY" => Ok(RecordType::DNSKEY),
            "DS" => Ok(RecordType::DS),
            "EUI48" => Ok(RecordType::EUI48),
            "EUI64" => Ok(RecordType::EUI64),
            "GPOS" => Ok(RecordType::GPOS),
            "HINFO" => Ok(RecordType::HINFO),
            "HIP" => Ok(RecordType::HIP),
            "HTTPS" => Ok(RecordType::HTTPS),
            "IPSECKEY" => Ok(RecordType::IPSECKEY),
            "KX" => Ok(RecordType::KX),
            "L32" => Ok(RecordType::L32),
            "L64" => Ok(RecordType::L64),
            "LOC" => Ok(RecordType::LOC),
            "LP" => Ok(RecordType::LP),
            "MX" => Ok(RecordType::MX),
            "NAPTR" => Ok(RecordType::NAPTR),
            "NID" => Ok(RecordType::NID),
            "NS" => Ok(RecordType::NS),
            "NSEC" => Ok(RecordType::NSEC),
            "NSEC3" => Ok(RecordType::NSEC3),
            "NSEC3PARAM" => Ok(RecordType::NSEC3PARAM),
            "OPENPGPKEY" => Ok(RecordType::OPENPGPKEY),
            "OPT" => Ok(RecordType::OPT),
            "PTR" => Ok(RecordType::PTR),
            "RRSIG" => Ok(RecordType::RRSIG),
            "RT" => Ok(RecordType::RT),
            "SMIMEA" => Ok(RecordType::SMIMEA),
            "SOA" => Ok(RecordType::SOA),
            "SPF" => Ok(RecordType::SPF),
            "SRV" => Ok(RecordType::SRV),
            "SSHFP" => Ok(RecordType::SSHFP),
            "SVCB" => Ok(RecordType::SVCB),
            "TKEY" => Ok(RecordType::TKEY),
            "TLSA" => Ok(RecordType::TLSA),
            "TSIG" => Ok(RecordType::TSIG),
            "TXT" => Ok(RecordType::TXT),
            "URI" => Ok(RecordType::URI),
            "ZONEMD" => Ok(RecordType::ZONEMD),
            "ANY" => Ok(RecordType::ANY),
            _ => Err(format!("Unknown record type: {}", s)),
        }
    }
}
