pub mod hesiod;

pub use hesiod::{AnswerSynthesizer, HandleHesiodQueryUseCase, HesiodMatcher, ResponseAssembler};
