use super::fallback::FallbackResolver;
use super::question::QuestionMapper;
use super::wire_response::ResponseEncoder;
use hesiod_tip_application::use_cases::HandleHesiodQueryUseCase;
use hesiod_tip_domain::ResponseStatus;
use hickory_proto::op::{Message, MessageType, OpCode};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// DNS header length (RFC 1035 §4.1.1).
const DNS_HEADER_LEN: usize = 12;

/// QR bit in the third header byte.
const QR_FLAG: u8 = 0x80;

/// Transport-independent request handler.
///
/// Takes one raw DNS message and returns the raw reply, or `None` when the
/// datagram must be dropped without an answer.
pub struct DnsServerHandler {
    use_case: Arc<HandleHesiodQueryUseCase>,
    fallback: Option<Arc<dyn FallbackResolver>>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleHesiodQueryUseCase>) -> Self {
        Self {
            use_case,
            fallback: None,
        }
    }

    pub fn with_fallback(mut self, fallback: Arc<dyn FallbackResolver>) -> Self {
        self.fallback = Some(fallback);
        self
    }

    pub async fn handle_raw(&self, bytes: &[u8], client: SocketAddr) -> Option<Vec<u8>> {
        let request = match Message::from_vec(bytes) {
            Ok(message) => message,
            Err(e) => {
                if bytes.len() < DNS_HEADER_LEN {
                    debug!(client = %client, len = bytes.len(), "Dropping runt datagram");
                    return None;
                }
                if bytes[2] & QR_FLAG != 0 {
                    debug!(client = %client, "Dropping malformed response packet");
                    return None;
                }
                warn!(client = %client, error = %e, "Malformed DNS message");
                let id = u16::from_be_bytes([bytes[0], bytes[1]]);
                return ResponseEncoder::encode_header_only(id, ResponseStatus::FormErr)
                    .inspect_err(|e| error!(error = %e, "Failed to encode FORMERR"))
                    .ok();
            }
        };

        if request.message_type() == MessageType::Response {
            debug!(client = %client, id = request.id(), "Ignoring DNS response packet");
            return None;
        }

        if request.op_code() != OpCode::Query {
            debug!(client = %client, op_code = ?request.op_code(), "Unsupported opcode");
            return Self::error_reply(&request, ResponseStatus::NotImp);
        }

        if request.queries().len() != 1 {
            debug!(
                client = %client,
                questions = request.queries().len(),
                "Expected exactly one question"
            );
            return Self::error_reply(&request, ResponseStatus::FormErr);
        }

        let question = QuestionMapper::from_query(&request.queries()[0]);
        debug!(client = %client, question = %question, "DNS query received");

        match self.use_case.execute(&question) {
            Ok(Some(response)) => match ResponseEncoder::encode(&request, &response) {
                Ok(reply) => Some(reply),
                Err(e) => {
                    error!(error = %e, question = %question, "Failed to encode answer");
                    Self::error_reply(&request, ResponseStatus::ServFail)
                }
            },
            Ok(None) => self.fall_back(&request, bytes).await,
            Err(e) => {
                warn!(error = %e, question = %question, "Answering SERVFAIL");
                Self::error_reply(&request, ResponseStatus::ServFail)
            }
        }
    }

    async fn fall_back(&self, request: &Message, bytes: &[u8]) -> Option<Vec<u8>> {
        let Some(fallback) = &self.fallback else {
            debug!(id = request.id(), "No upstream configured, refusing");
            return Self::error_reply(request, ResponseStatus::Refused);
        };

        match fallback.forward(bytes).await {
            Ok(reply) => Some(reply),
            Err(e) => {
                warn!(upstream = %fallback.name(), error = %e, "Upstream query failed");
                Self::error_reply(request, ResponseStatus::ServFail)
            }
        }
    }

    fn error_reply(request: &Message, status: ResponseStatus) -> Option<Vec<u8>> {
        ResponseEncoder::encode_error(request, status)
            .inspect_err(|e| error!(error = %e, status = %status, "Failed to encode error response"))
            .ok()
    }
}
