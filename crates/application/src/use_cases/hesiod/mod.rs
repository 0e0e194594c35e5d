mod assembler;
mod handle_hesiod_query;
mod matcher;
mod synthesizer;

pub use assembler::ResponseAssembler;
pub use handle_hesiod_query::HandleHesiodQueryUseCase;
pub use matcher::{HesiodMatcher, CHAIN_NAME, HASH_NAME, HEIGHT_NAME, TIME_NAME};
pub use synthesizer::AnswerSynthesizer;
