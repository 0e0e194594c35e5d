//! hesiod-tip domain layer
pub mod chain;
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod hesiod;

pub use chain::{BlockHash, BlockHeader, ChainTipSnapshot};
pub use config::{CliOverrides, Config, ConfigError};
pub use dns_record::{DnsClass, RecordType};
pub use errors::{ChainError, DomainError};
pub use hesiod::{
    HesiodField, HesiodQuestion, HesiodRecord, HesiodResponse, MatchResult, ResponseStatus,
};
