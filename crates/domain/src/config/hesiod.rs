use serde::{Deserialize, Serialize};

/// Upper bound on the answer TTL; the tip moves every few minutes.
pub const MAX_HESIOD_TTL: u32 = 300;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HesiodConfig {
    /// TTL stamped on every synthesized TXT record.
    #[serde(default)]
    pub ttl: u32,
}

impl Default for HesiodConfig {
    fn default() -> Self {
        Self { ttl: 0 }
    }
}
