use hesiod_tip_domain::{ChainTipSnapshot, HesiodField, HesiodQuestion, HesiodRecord};
use std::sync::Arc;

/// Turns requested fields into TXT records over one snapshot.
#[derive(Debug, Clone, Copy)]
pub struct AnswerSynthesizer {
    ttl: u32,
}

impl AnswerSynthesizer {
    pub fn new(ttl: u32) -> Self {
        Self { ttl }
    }

    /// One record per field, in the order given, all owned by the queried name.
    pub fn synthesize(
        &self,
        question: &HesiodQuestion,
        requested: &[HesiodField],
        snapshot: &ChainTipSnapshot,
    ) -> Vec<HesiodRecord> {
        requested
            .iter()
            .map(|field| {
                HesiodRecord::txt(
                    Arc::clone(&question.name),
                    self.ttl,
                    Self::render(*field, snapshot),
                )
            })
            .collect()
    }

    pub fn render(field: HesiodField, snapshot: &ChainTipSnapshot) -> String {
        match field {
            HesiodField::Hash => snapshot.hash.to_hex(),
            HesiodField::Height => snapshot.height.to_string(),
            HesiodField::Time => snapshot.time.to_string(),
        }
    }
}

impl Default for AnswerSynthesizer {
    fn default() -> Self {
        Self::new(0)
    }
}
