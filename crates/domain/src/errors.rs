use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Chain has no tip yet")]
    ChainNotReady,

    #[error("Invalid block hash: {0}")]
    InvalidBlockHash(String),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid DNS message: {0}")]
    InvalidDnsMessage(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Transport timeout waiting for {server}")]
    TransportTimeout { server: String },

    #[error("Upstream error from {server}: {reason}")]
    UpstreamError { server: String, reason: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Reasons a header is not connected to the main chain.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainError {
    #[error("time-too-new")]
    TimeTooNew,

    #[error("duplicate")]
    Duplicate,

    #[error("duplicate-orphan")]
    DuplicateOrphan,

    #[error("stored as orphan")]
    Orphan,
}
