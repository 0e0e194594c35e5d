use arc_swap::ArcSwapOption;
use hesiod_tip_application::ports::ChainTipProvider;
use hesiod_tip_domain::{ChainTipSnapshot, DomainError};
use std::sync::Arc;

/// Lock-free publication point for the chain tip.
///
/// The header chain stores a whole new snapshot on every tip change; readers
/// load the pointer once and copy the three fields out of that one value.
pub struct ChainTipStore {
    tip: ArcSwapOption<ChainTipSnapshot>,
}

impl ChainTipStore {
    pub fn new() -> Self {
        Self {
            tip: ArcSwapOption::empty(),
        }
    }

    pub fn publish(&self, snapshot: ChainTipSnapshot) {
        self.tip.store(Some(Arc::new(snapshot)));
    }

    pub fn current(&self) -> Option<Arc<ChainTipSnapshot>> {
        self.tip.load_full()
    }
}

impl Default for ChainTipStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ChainTipProvider for ChainTipStore {
    fn snapshot(&self) -> Result<ChainTipSnapshot, DomainError> {
        let guard = self.tip.load();
        match &*guard {
            Some(tip) => Ok(**tip),
            None => Err(DomainError::ChainNotReady),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hesiod_tip_domain::BlockHash;

    #[test]
    fn test_empty_store_is_not_ready() {
        let store = ChainTipStore::new();
        assert_eq!(store.snapshot(), Err(DomainError::ChainNotReady));
        assert!(store.current().is_none());
    }

    #[test]
    fn test_publish_replaces_whole_snapshot() {
        let store = ChainTipStore::new();
        store.publish(ChainTipSnapshot::new(BlockHash::new([1; 32]), 1, 100));
        store.publish(ChainTipSnapshot::new(BlockHash::new([2; 32]), 2, 200));

        let tip = store.snapshot().unwrap();
        assert_eq!(tip.hash, BlockHash::new([2; 32]));
        assert_eq!(tip.height, 2);
        assert_eq!(tip.time, 200);
    }
}
