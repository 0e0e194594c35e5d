use super::{HesiodQuestion, HesiodRecord};
use std::fmt;

/// Response code subset this server emits (RFC 1035 §4.1.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseStatus {
    NoError,
    FormErr,
    ServFail,
    NotImp,
    Refused,
}

impl ResponseStatus {
    pub fn to_u16(&self) -> u16 {
        match self {
            ResponseStatus::NoError => 0,
            ResponseStatus::FormErr => 1,
            ResponseStatus::ServFail => 2,
            ResponseStatus::NotImp => 4,
            ResponseStatus::Refused => 5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseStatus::NoError => "NOERROR",
            ResponseStatus::FormErr => "FORMERR",
            ResponseStatus::ServFail => "SERVFAIL",
            ResponseStatus::NotImp => "NOTIMP",
            ResponseStatus::Refused => "REFUSED",
        }
    }
}

impl fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A complete answer for the synthetic zone, ready for wire encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HesiodResponse {
    pub question: HesiodQuestion,
    pub answers: Vec<HesiodRecord>,
    pub authoritative: bool,
    pub status: ResponseStatus,
}
