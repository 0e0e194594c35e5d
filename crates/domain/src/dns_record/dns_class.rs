use std::fmt;
use std::str::FromStr;

/// Resource record class (RFC 1035 §3.2.4).
///
/// `HS` is the Hesiod class, the one the chain-info names are served under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DnsClass {
    IN,
    CH,
    HS,
    NONE,
    ANY,
    Unknown(u16),
}

impl DnsClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            DnsClass::IN => "IN",
            DnsClass::CH => "CH",
            DnsClass::HS => "HS",
            DnsClass::NONE => "NONE",
            DnsClass::ANY => "ANY",
            DnsClass::Unknown(_) => "UNKNOWN",
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            DnsClass::IN => 1,
            DnsClass::CH => 3,
            DnsClass::HS => 4,
            DnsClass::NONE => 254,
            DnsClass::ANY => 255,
            DnsClass::Unknown(code) => *code,
        }
    }

    pub fn from_u16(code: u16) -> Self {
        match code {
            1 => DnsClass::IN,
            3 => DnsClass::CH,
            4 => DnsClass::HS,
            254 => DnsClass::NONE,
            255 => DnsClass::ANY,
            other => DnsClass::Unknown(other),
        }
    }
}

impl fmt::Display for DnsClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DnsClass::Unknown(code) => write!(f, "CLASS{}", code),
            other => f.write_str(other.as_str()),
        }
    }
}

impl FromStr for DnsClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "IN" => Ok(DnsClass::IN),
            "CH" => Ok(DnsClass::CH),
            "HS" => Ok(DnsClass::HS),
            "NONE" => Ok(DnsClass::NONE),
            "ANY" => Ok(DnsClass::ANY),
            other => other
                .strip_prefix("CLASS")
                .and_then(|code| code.parse::<u16>().ok())
                .map(DnsClass::from_u16)
                .ok_or_else(|| format!("Unknown DNS class: {}", s)),
        }
    }
}
