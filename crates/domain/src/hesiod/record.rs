use crate::dns_record::{DnsClass, RecordType};
use std::sync::Arc;

/// One synthesized answer: a single-string TXT record in class HS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HesiodRecord {
    pub name: Arc<str>,
    pub class: DnsClass,
    pub record_type: RecordType,
    pub ttl: u32,
    pub value: String,
}

impl HesiodRecord {
    pub fn txt(name: Arc<str>, ttl: u32, value: String) -> Self {
        Self {
            name,
            class: DnsClass::HS,
            record_type: RecordType::TXT,
            ttl,
            value,
        }
    }
}
