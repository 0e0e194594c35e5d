//! hesiod-tip infrastructure layer
pub mod chain;
pub mod dns;
