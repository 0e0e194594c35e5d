#![allow(dead_code)]

use hesiod_tip_application::ports::ChainTipProvider;
use hesiod_tip_domain::{BlockHash, ChainTipSnapshot, DomainError};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::RwLock;

/// Snapshot whose three fields are all derived from `height`, so a torn
/// read would show up as mismatching values.
pub fn snapshot_at(height: u32) -> ChainTipSnapshot {
    let mut bytes = [0u8; 32];
    bytes[..4].copy_from_slice(&height.to_be_bytes());
    bytes[31] = 0xA5;
    ChainTipSnapshot::new(BlockHash::new(bytes), height, 1_600_000_000 + height as u64)
}

pub struct MockChainTipProvider {
    tip: RwLock<Option<ChainTipSnapshot>>,
}

impl MockChainTipProvider {
    pub fn new(tip: ChainTipSnapshot) -> Self {
        Self {
            tip: RwLock::new(Some(tip)),
        }
    }

    pub fn empty() -> Self {
        Self {
            tip: RwLock::new(None),
        }
    }

    pub fn set_tip(&self, tip: ChainTipSnapshot) {
        *self.tip.write().unwrap() = Some(tip);
    }
}

impl ChainTipProvider for MockChainTipProvider {
    fn snapshot(&self) -> Result<ChainTipSnapshot, DomainError> {
        self.tip.read().unwrap().ok_or(DomainError::ChainNotReady)
    }
}

/// Moves the tip forward by one block on every read.
pub struct AdvancingChainTipProvider {
    next_height: AtomicU32,
    reads: AtomicU32,
}

impl AdvancingChainTipProvider {
    pub fn starting_at(height: u32) -> Self {
        Self {
            next_height: AtomicU32::new(height),
            reads: AtomicU32::new(0),
        }
    }

    pub fn reads(&self) -> u32 {
        self.reads.load(Ordering::SeqCst)
    }
}

impl ChainTipProvider for AdvancingChainTipProvider {
    fn snapshot(&self) -> Result<ChainTipSnapshot, DomainError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        let height = self.next_height.fetch_add(1, Ordering::SeqCst);
        Ok(snapshot_at(height))
    }
}
