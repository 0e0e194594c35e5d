use super::BlockHash;
use serde::{Deserialize, Serialize};

/// The slice of a block header the chain index needs.
///
/// Headers arrive with their hash already computed; nothing here re-derives
/// or checks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct BlockHeader {
    pub hash: BlockHash,
    pub prev_block: BlockHash,
    pub time: u64,
}

impl BlockHeader {
    pub fn new(hash: BlockHash, prev_block: BlockHash, time: u64) -> Self {
        Self {
            hash,
            prev_block,
            time,
        }
    }
}
