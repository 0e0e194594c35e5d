//! Mapping between hickory `Query` and the domain `HesiodQuestion`.

use hesiod_tip_domain::{DnsClass, DomainError, HesiodQuestion, RecordType};
use hickory_proto::op::Query;
use hickory_proto::rr::{DNSClass, Name, RecordType as HickoryRecordType};

pub struct QuestionMapper;

impl QuestionMapper {
    /// Owner name is taken as presented on the wire: case kept, root dot kept.
    pub fn from_query(query: &Query) -> HesiodQuestion {
        HesiodQuestion::new(
            query.name().to_ascii(),
            DnsClass::from_u16(u16::from(query.query_class())),
            RecordType::from_u16(u16::from(query.query_type())),
        )
    }

    pub fn to_query(question: &HesiodQuestion) -> Result<Query, DomainError> {
        let mut query = Query::query(
            Self::to_name(&question.name)?,
            HickoryRecordType::from(question.record_type.to_u16()),
        );
        query.set_query_class(Self::to_hickory_class(question.class)?);
        Ok(query)
    }

    pub fn to_name(name: &str) -> Result<Name, DomainError> {
        Name::from_ascii(name).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", name, e))
        })
    }

    pub fn to_hickory_class(class: DnsClass) -> Result<DNSClass, DomainError> {
        match class {
            DnsClass::IN => Ok(DNSClass::IN),
            DnsClass::CH => Ok(DNSClass::CH),
            DnsClass::HS => Ok(DNSClass::HS),
            DnsClass::NONE => Ok(DNSClass::NONE),
            DnsClass::ANY => Ok(DNSClass::ANY),
            DnsClass::Unknown(code) => Err(DomainError::InvalidDnsMessage(format!(
                "Unsupported class {}",
                code
            ))),
        }
    }
}
