pub mod header_chain;
pub mod import;
pub mod tip_store;

pub use header_chain::{AddOutcome, HeaderChain};
pub use import::{import_headers, load_headers, ImportStats};
pub use tip_store::ChainTipStore;
