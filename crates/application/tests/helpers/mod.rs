#![allow(dead_code)]

mod mock_chain;

pub use mock_chain::{snapshot_at, AdvancingChainTipProvider, MockChainTipProvider};
