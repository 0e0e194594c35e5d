use hesiod_tip_domain::{DnsClass, HesiodField, HesiodQuestion, MatchResult, RecordType};

pub const HASH_NAME: &str = "hash.tip.chain.hnsd.";
pub const HEIGHT_NAME: &str = "height.tip.chain.hnsd.";
pub const TIME_NAME: &str = "time.tip.chain.hnsd.";
pub const CHAIN_NAME: &str = "chain.hnsd.";

const HASH_ONLY: &[HesiodField] = &[HesiodField::Hash];
const HEIGHT_ONLY: &[HesiodField] = &[HesiodField::Height];
const TIME_ONLY: &[HesiodField] = &[HesiodField::Time];

/// Recognizes the four reserved chain-info names.
///
/// Names are compared after ASCII lowercasing and otherwise exactly; the root
/// dot is part of the name, so `chain.hnsd` does not match.
pub struct HesiodMatcher;

impl HesiodMatcher {
    pub fn match_question(question: &HesiodQuestion) -> MatchResult {
        if question.class != DnsClass::HS || question.record_type != RecordType::TXT {
            return MatchResult::NoMatch;
        }

        Self::match_name(&question.name)
    }

    pub fn match_name(name: &str) -> MatchResult {
        match name.to_ascii_lowercase().as_str() {
            HASH_NAME => MatchResult::Match(HASH_ONLY),
            HEIGHT_NAME => MatchResult::Match(HEIGHT_ONLY),
            TIME_NAME => MatchResult::Match(TIME_ONLY),
            CHAIN_NAME => MatchResult::Match(&HesiodField::ALL),
            _ => MatchResult::NoMatch,
        }
    }
}
