use super::ChainTipStore;
use hesiod_tip_domain::{BlockHash, BlockHeader, ChainError, ChainTipSnapshot};
use rustc_hash::FxHashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Headers may not be stamped further ahead of local time than this.
const MAX_FUTURE_DRIFT_SECS: u64 = 2 * 60 * 60;

const MAX_ORPHANS: usize = 10_000;

#[derive(Debug, Clone, Copy)]
struct ChainEntry {
    header: BlockHeader,
    height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddOutcome {
    /// Height the header was connected at.
    pub height: u32,
    /// Whether the header became the tip (possibly after a reorganization).
    pub main_chain: bool,
    /// Orphans connected behind it in the same call.
    pub resolved_orphans: usize,
}

/// In-memory header index feeding the published chain tip.
///
/// Only structure is tracked: parent links, heights, orphans. The longest
/// branch wins and the first-seen header wins ties. No proof-of-work or
/// other consensus checks are made.
pub struct HeaderChain {
    entries: FxHashMap<BlockHash, ChainEntry>,
    /// Main-chain hashes indexed by height; never empty.
    main: Vec<BlockHash>,
    orphans: FxHashMap<BlockHash, BlockHeader>,
    /// prev_block -> waiting orphan
    prevs: FxHashMap<BlockHash, BlockHash>,
    tip_store: Arc<ChainTipStore>,
    max_tip_age: u64,
    synced: bool,
}

impl HeaderChain {
    pub fn new(genesis: BlockHeader, tip_store: Arc<ChainTipStore>, max_tip_age: u64) -> Self {
        let mut entries = FxHashMap::default();
        entries.insert(
            genesis.hash,
            ChainEntry {
                header: genesis,
                height: 0,
            },
        );

        let chain = Self {
            entries,
            main: vec![genesis.hash],
            orphans: FxHashMap::default(),
            prevs: FxHashMap::default(),
            tip_store,
            max_tip_age,
            synced: false,
        };

        chain.publish_tip();
        info!(hash = %genesis.hash, time = genesis.time, "Header chain initialized at genesis");
        chain
    }

    pub fn height(&self) -> u32 {
        (self.main.len() - 1) as u32
    }

    pub fn tip(&self) -> ChainTipSnapshot {
        let entry = &self.entries[&self.main[self.main.len() - 1]];
        ChainTipSnapshot::new(entry.header.hash, entry.height, entry.header.time)
    }

    pub fn contains(&self, hash: &BlockHash) -> bool {
        self.entries.contains_key(hash)
    }

    pub fn get(&self, hash: &BlockHash) -> Option<&BlockHeader> {
        self.entries.get(hash).map(|entry| &entry.header)
    }

    pub fn height_of(&self, hash: &BlockHash) -> Option<u32> {
        self.entries.get(hash).map(|entry| entry.height)
    }

    pub fn get_by_height(&self, height: u32) -> Option<&BlockHeader> {
        self.main
            .get(height as usize)
            .and_then(|hash| self.get(hash))
    }

    pub fn has_orphan(&self, hash: &BlockHash) -> bool {
        self.orphans.contains_key(hash)
    }

    pub fn orphan_count(&self) -> usize {
        self.orphans.len()
    }

    /// Connects `header`, then any orphans that were waiting on it.
    ///
    /// A header with an unknown parent is kept as an orphan and reported as
    /// `ChainError::Orphan`.
    pub fn add(&mut self, header: BlockHeader, now: u64) -> Result<AddOutcome, ChainError> {
        debug!(hash = %header.hash, chain_height = self.height(), "Adding header");

        if header.time > now.saturating_add(MAX_FUTURE_DRIFT_SECS) {
            warn!(hash = %header.hash, time = header.time, "Header rejected: time-too-new");
            return Err(ChainError::TimeTooNew);
        }

        if self.entries.contains_key(&header.hash) {
            debug!(hash = %header.hash, "Header rejected: duplicate");
            return Err(ChainError::Duplicate);
        }

        if self.orphans.contains_key(&header.hash) {
            debug!(hash = %header.hash, "Header rejected: duplicate-orphan");
            return Err(ChainError::DuplicateOrphan);
        }

        if !self.entries.contains_key(&header.prev_block) {
            self.store_orphan(header);
            return Err(ChainError::Orphan);
        }

        let (height, main_chain) = self.insert(header);

        let mut resolved_orphans = 0;
        let mut parent = header.hash;
        while let Some(orphan) = self.resolve_orphan(&parent) {
            self.insert(orphan);
            debug!(hash = %orphan.hash, "Resolved orphan");
            resolved_orphans += 1;
            parent = orphan.hash;
        }

        Ok(AddOutcome {
            height,
            main_chain,
            resolved_orphans,
        })
    }

    /// Latches to `true` the first time the tip is younger than `max_tip_age`.
    pub fn is_synced(&mut self, now: u64) -> bool {
        if self.synced {
            return true;
        }

        let tip = self.tip();
        if tip.time.saturating_add(self.max_tip_age) < now {
            return false;
        }

        info!(height = tip.height, "Chain is fully synced");
        self.synced = true;
        true
    }

    fn insert(&mut self, header: BlockHeader) -> (u32, bool) {
        let height = self.entries[&header.prev_block].height + 1;
        self.entries.insert(header.hash, ChainEntry { header, height });

        if height <= self.height() {
            debug!(hash = %header.hash, height, "Stored on alternate branch");
            return (height, false);
        }

        if header.prev_block != self.main[self.main.len() - 1] {
            self.reorganize(&header);
        }

        self.main.push(header.hash);
        self.publish_tip();
        info!(height, hash = %header.hash, "Chain tip advanced");
        (height, true)
    }

    /// Rewrites the height index so that it ends at `competitor`'s parent.
    fn reorganize(&mut self, competitor: &BlockHeader) {
        let mut connect = Vec::new();
        let mut cursor = competitor.prev_block;

        loop {
            let entry = &self.entries[&cursor];
            if self.main.get(entry.height as usize) == Some(&cursor) {
                break;
            }
            connect.push(cursor);
            cursor = entry.header.prev_block;
        }

        let fork_height = self.entries[&cursor].height;
        let disconnected = self.main.len() - 1 - fork_height as usize;

        self.main.truncate(fork_height as usize + 1);
        self.main.extend(connect.into_iter().rev());

        warn!(
            fork_height,
            disconnected,
            competitor = %competitor.hash,
            "Chain reorganized"
        );
    }

    fn store_orphan(&mut self, header: BlockHeader) {
        if self.orphans.len() >= MAX_ORPHANS {
            warn!(count = self.orphans.len(), "Clearing orphans");
            self.orphans.clear();
            self.prevs.clear();
        }

        if let Some(replaced) = self.prevs.insert(header.prev_block, header.hash) {
            self.orphans.remove(&replaced);
        }
        self.orphans.insert(header.hash, header);
        debug!(hash = %header.hash, prev = %header.prev_block, "Stored as orphan");
    }

    fn resolve_orphan(&mut self, parent: &BlockHash) -> Option<BlockHeader> {
        let orphan_hash = self.prevs.remove(parent)?;
        self.orphans.remove(&orphan_hash)
    }

    fn publish_tip(&self) {
        self.tip_store.publish(self.tip());
    }
}
