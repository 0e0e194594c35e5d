use hesiod_tip_domain::{BlockHash, BlockHeader};
use hesiod_tip_infrastructure::chain::{ChainTipStore, HeaderChain};
use std::sync::Arc;

pub const GENESIS_TIME: u64 = 1_580_745_078;
pub const BLOCK_INTERVAL: u64 = 600;
pub const MAX_TIP_AGE: u64 = 24 * 60 * 60;

/// Distinct, readable hashes: branch tag in the first byte, height at the end.
pub fn block_hash(branch: u8, height: u32) -> BlockHash {
    let mut bytes = [0u8; 32];
    bytes[0] = branch;
    bytes[28..].copy_from_slice(&height.to_be_bytes());
    BlockHash::new(bytes)
}

pub fn genesis() -> BlockHeader {
    BlockHeader::new(block_hash(0, 0), BlockHash::zero(), GENESIS_TIME)
}

pub fn time_at(height: u32) -> u64 {
    GENESIS_TIME + height as u64 * BLOCK_INTERVAL
}

/// Header at `height` on `branch`, built on `prev`.
pub fn header_on(branch: u8, height: u32, prev: BlockHash) -> BlockHeader {
    BlockHeader::new(block_hash(branch, height), prev, time_at(height))
}

/// Main-branch headers 1..=count on top of `genesis()`.
pub fn linear_headers(count: u32) -> Vec<BlockHeader> {
    let mut prev = genesis().hash;
    (1..=count)
        .map(|height| {
            let header = header_on(0, height, prev);
            prev = header.hash;
            header
        })
        .collect()
}

/// A clock comfortably past every generated header.
pub fn now_after(height: u32) -> u64 {
    time_at(height) + 60
}

pub fn new_chain() -> (HeaderChain, Arc<ChainTipStore>) {
    let store = Arc::new(ChainTipStore::new());
    let chain = HeaderChain::new(genesis(), store.clone(), MAX_TIP_AGE);
    (chain, store)
}

pub fn chain_with(count: u32) -> (HeaderChain, Arc<ChainTipStore>) {
    let (mut chain, store) = new_chain();
    let now = now_after(count);
    for header in linear_headers(count) {
        chain.add(header, now).unwrap();
    }
    (chain, store)
}
