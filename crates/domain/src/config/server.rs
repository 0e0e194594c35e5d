use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_dns_port")]
    pub dns_port: u16,

    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    #[serde(default = "default_true")]
    pub tcp_enabled: bool,

    /// Idle timeout for a TCP connection, in seconds.
    #[serde(default = "default_tcp_timeout")]
    pub tcp_timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            dns_port: default_dns_port(),
            bind_address: default_bind_address(),
            tcp_enabled: true,
            tcp_timeout: default_tcp_timeout(),
        }
    }
}

fn default_dns_port() -> u16 {
    5369
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_tcp_timeout() -> u64 {
    10
}

fn default_true() -> bool {
    true
}
