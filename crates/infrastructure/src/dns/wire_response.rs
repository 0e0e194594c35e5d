//! Encodes responses into DNS wire format using `hickory-proto`.

use super::question::QuestionMapper;
use hesiod_tip_domain::{DomainError, HesiodRecord, HesiodResponse, ResponseStatus};
use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::rdata::TXT;
use hickory_proto::rr::{DNSClass, RData, Record};

pub struct ResponseEncoder;

impl ResponseEncoder {
    /// Builds the answer message for a synthesized Hesiod response.
    ///
    /// Header id and RD come from the request; AA and the rcode come from
    /// the response; the question is the one the assembler echoed.
    pub fn to_message(request: &Message, response: &HesiodResponse) -> Result<Message, DomainError> {
        let mut message = Self::response_header(request, response.status);
        message.set_authoritative(response.authoritative);
        message.add_query(QuestionMapper::to_query(&response.question)?);

        for record in &response.answers {
            message.add_answer(Self::to_record(record)?);
        }

        Ok(message)
    }

    pub fn encode(request: &Message, response: &HesiodResponse) -> Result<Vec<u8>, DomainError> {
        Self::serialize(&Self::to_message(request, response)?)
    }

    /// Error response echoing the request's questions as received.
    pub fn error_message(request: &Message, status: ResponseStatus) -> Message {
        let mut message = Self::response_header(request, status);
        message.add_queries(request.queries().iter().cloned());
        message
    }

    pub fn encode_error(request: &Message, status: ResponseStatus) -> Result<Vec<u8>, DomainError> {
        Self::serialize(&Self::error_message(request, status))
    }

    /// FORMERR for a datagram that did not parse; only the id is reused.
    pub fn encode_header_only(id: u16, status: ResponseStatus) -> Result<Vec<u8>, DomainError> {
        let mut message = Message::new();
        message
            .set_id(id)
            .set_message_type(MessageType::Response)
            .set_op_code(OpCode::Query)
            .set_response_code(Self::to_response_code(status));
        Self::serialize(&message)
    }

    pub fn to_record(record: &HesiodRecord) -> Result<Record, DomainError> {
        let name = QuestionMapper::to_name(&record.name)?;
        let mut wire = Record::from_rdata(
            name,
            record.ttl,
            RData::TXT(TXT::new(vec![record.value.clone()])),
        );
        wire.set_dns_class(DNSClass::HS);
        Ok(wire)
    }

    pub fn to_response_code(status: ResponseStatus) -> ResponseCode {
        match status {
            ResponseStatus::NoError => ResponseCode::NoError,
            ResponseStatus::FormErr => ResponseCode::FormErr,
            ResponseStatus::ServFail => ResponseCode::ServFail,
            ResponseStatus::NotImp => ResponseCode::NotImp,
            ResponseStatus::Refused => ResponseCode::Refused,
        }
    }

    fn response_header(request: &Message, status: ResponseStatus) -> Message {
        let mut message = Message::new();
        message
            .set_id(request.id())
            .set_message_type(MessageType::Response)
            .set_op_code(request.op_code())
            .set_recursion_desired(request.recursion_desired())
            .set_recursion_available(false)
            .set_response_code(Self::to_response_code(status));
        message
    }

    fn serialize(message: &Message) -> Result<Vec<u8>, DomainError> {
        message.to_vec().map_err(|e| {
            DomainError::InvalidDnsMessage(format!("Failed to serialize DNS message: {}", e))
        })
    }
}
