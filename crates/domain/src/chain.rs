mod block_hash;
mod header;
mod snapshot;

pub use block_hash::BlockHash;
pub use header::BlockHeader;
pub use snapshot::ChainTipSnapshot;
