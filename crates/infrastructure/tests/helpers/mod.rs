#![allow(dead_code)]

pub mod chain_builders;
pub mod dns_messages;
pub mod mock_upstream;

pub use chain_builders::*;
pub use dns_messages::*;
pub use mock_upstream::*;
