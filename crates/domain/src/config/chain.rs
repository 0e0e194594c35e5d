use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChainConfig {
    #[serde(default = "default_genesis_hash")]
    pub genesis_hash: String,

    #[serde(default = "default_genesis_time")]
    pub genesis_time: u64,

    /// JSON array of headers imported on start-up.
    #[serde(default)]
    pub headers_file: Option<String>,

    /// A tip older than this (seconds) means the chain is still catching up.
    #[serde(default = "default_max_tip_age")]
    pub max_tip_age: u64,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            genesis_hash: default_genesis_hash(),
            genesis_time: default_genesis_time(),
            headers_file: None,
            max_tip_age: default_max_tip_age(),
        }
    }
}

fn default_genesis_hash() -> String {
    "0".repeat(64)
}

fn default_genesis_time() -> u64 {
    1_580_745_078
}

fn default_max_tip_age() -> u64 {
    24 * 60 * 60
}
