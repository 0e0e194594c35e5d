pub mod chain;
pub mod errors;
pub mod fallback;
pub mod hesiod;
pub mod logging;
pub mod root;
pub mod server;

pub use chain::ChainConfig;
pub use errors::ConfigError;
pub use fallback::FallbackConfig;
pub use hesiod::{HesiodConfig, MAX_HESIOD_TTL};
pub use logging::{LogFormat, LoggingConfig};
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
