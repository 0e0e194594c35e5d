use serde::{Deserialize, Serialize};

/// Where questions outside the `hnsd.` zone are sent.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FallbackConfig {
    /// `ip:port` of the general resolver. Unset means such questions are refused.
    #[serde(default)]
    pub upstream: Option<String>,

    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            upstream: None,
            query_timeout: default_query_timeout(),
        }
    }
}

fn default_query_timeout() -> u64 {
    3
}
