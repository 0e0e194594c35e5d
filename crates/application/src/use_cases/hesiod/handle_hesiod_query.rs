use super::{AnswerSynthesizer, HesiodMatcher, ResponseAssembler};
use crate::ports::ChainTipProvider;
use hesiod_tip_domain::{DomainError, HesiodQuestion, HesiodResponse, MatchResult};
use std::sync::Arc;
use tracing::{debug, warn};

/// Answers chain-info questions under `hnsd.`.
///
/// `Ok(None)` means the question is outside the reserved names and belongs to
/// the general resolver.
pub struct HandleHesiodQueryUseCase {
    provider: Arc<dyn ChainTipProvider>,
    synthesizer: AnswerSynthesizer,
}

impl HandleHesiodQueryUseCase {
    pub fn new(provider: Arc<dyn ChainTipProvider>, synthesizer: AnswerSynthesizer) -> Self {
        Self {
            provider,
            synthesizer,
        }
    }

    pub fn execute(&self, question: &HesiodQuestion) -> Result<Option<HesiodResponse>, DomainError> {
        let requested = match HesiodMatcher::match_question(question) {
            MatchResult::NoMatch => {
                debug!(question = %question, "Not a chain-info question");
                return Ok(None);
            }
            MatchResult::Match(fields) => fields,
        };

        // A single snapshot backs every record of this response.
        let snapshot = self.provider.snapshot().inspect_err(|e| {
            warn!(error = %e, question = %question, "Cannot answer chain-info question");
        })?;

        let records = self.synthesizer.synthesize(question, requested, &snapshot);

        debug!(
            question = %question,
            height = snapshot.height,
            answers = records.len(),
            "Chain-info answer synthesized"
        );

        Ok(Some(ResponseAssembler::build(question, records)))
    }
}
