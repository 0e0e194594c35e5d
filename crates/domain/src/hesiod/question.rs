use crate::dns_record::{DnsClass, RecordType};
use std::fmt;
use std::sync::Arc;

/// A DNS question as handed over by the wire layer.
///
/// `name` is the owner name text exactly as it arrived, case preserved and
/// including the trailing root dot for fully-qualified names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HesiodQuestion {
    pub name: Arc<str>,
    pub class: DnsClass,
    pub record_type: RecordType,
}

impl HesiodQuestion {
    pub fn new(name: impl Into<Arc<str>>, class: DnsClass, record_type: RecordType) -> Self {
        Self {
            name: name.into(),
            class,
            record_type,
        }
    }
}

impl fmt::Display for HesiodQuestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.name, self.class, self.record_type)
    }
}
