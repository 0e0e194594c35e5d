use hesiod_tip_domain::{HesiodQuestion, HesiodRecord, HesiodResponse, ResponseStatus};

/// Wraps synthesized records into an authoritative NOERROR response.
pub struct ResponseAssembler;

impl ResponseAssembler {
    pub fn build(question: &HesiodQuestion, records: Vec<HesiodRecord>) -> HesiodResponse {
        HesiodResponse {
            question: question.clone(),
            answers: records,
            authoritative: true,
            status: ResponseStatus::NoError,
        }
    }
}
