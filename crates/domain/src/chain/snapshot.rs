use super::BlockHash;

/// One observation of the chain tip.
///
/// All three fields always describe the same block: a snapshot is built once
/// when the tip moves and is only ever shared behind an `Arc`, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainTipSnapshot {
    pub hash: BlockHash,
    pub height: u32,
    pub time: u64,
}

impl ChainTipSnapshot {
    pub fn new(hash: BlockHash, height: u32, time: u64) -> Self {
        Self { hash, height, time }
    }
}
