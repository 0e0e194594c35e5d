use super::HeaderChain;
use hesiod_tip_domain::{BlockHeader, ChainError, DomainError};
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportStats {
    pub connected: usize,
    pub rejected: usize,
    /// Orphans still waiting for a parent after the import.
    pub pending_orphans: usize,
}

/// Reads a JSON array of `{hash, prev_block, time}` objects.
pub fn load_headers(path: &Path) -> Result<Vec<BlockHeader>, DomainError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| DomainError::IoError(format!("{}: {}", path.display(), e)))?;

    serde_json::from_str(&contents).map_err(|e| {
        DomainError::ConfigError(format!("Invalid headers file {}: {}", path.display(), e))
    })
}

pub fn import_headers(chain: &mut HeaderChain, headers: &[BlockHeader], now: u64) -> ImportStats {
    let mut stats = ImportStats::default();

    for header in headers {
        match chain.add(*header, now) {
            Ok(outcome) => stats.connected += 1 + outcome.resolved_orphans,
            Err(ChainError::Orphan) => {}
            Err(e) => {
                debug!(hash = %header.hash, reason = %e, "Header not imported");
                stats.rejected += 1;
            }
        }
    }

    stats.pending_orphans = chain.orphan_count();

    info!(
        connected = stats.connected,
        rejected = stats.rejected,
        pending_orphans = stats.pending_orphans,
        height = chain.height(),
        "Header import finished"
    );

    stats
}
