use hesiod_tip_domain::{ChainTipSnapshot, DomainError};

/// Read side of the header chain.
///
/// Implementations must hand out the hash, height and time of one block from a
/// single read; callers take exactly one snapshot per query. Returns
/// `DomainError::ChainNotReady` until a tip exists.
pub trait ChainTipProvider: Send + Sync {
    fn snapshot(&self) -> Result<ChainTipSnapshot, DomainError>;
}
