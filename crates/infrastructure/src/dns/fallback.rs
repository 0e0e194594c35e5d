//! Fallback path for questions outside the chain-info names.
//!
//! Requests are relayed byte-for-byte over UDP (RFC 1035 §4.2.1); the reply is
//! accepted only if it comes from the configured server and carries the
//! request's id.

use async_trait::async_trait;
use hesiod_tip_domain::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// Maximum UDP DNS response size with EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

#[async_trait]
pub trait FallbackResolver: Send + Sync {
    async fn forward(&self, request: &[u8]) -> Result<Vec<u8>, DomainError>;

    fn name(&self) -> String;
}

pub struct UpstreamForwarder {
    server_addr: SocketAddr,
    timeout: Duration,
}

impl UpstreamForwarder {
    pub fn new(server_addr: SocketAddr, timeout: Duration) -> Self {
        Self {
            server_addr,
            timeout,
        }
    }

    pub fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }

    fn upstream_error(&self, reason: impl Into<String>) -> DomainError {
        DomainError::UpstreamError {
            server: self.server_addr.to_string(),
            reason: reason.into(),
        }
    }

    fn timeout_error(&self) -> DomainError {
        DomainError::TransportTimeout {
            server: self.server_addr.to_string(),
        }
    }

    async fn exchange(&self, socket: &UdpSocket, request: &[u8]) -> Result<Vec<u8>, DomainError> {
        let bytes_sent = socket
            .send_to(request, self.server_addr)
            .await
            .map_err(|e| self.upstream_error(format!("send failed: {}", e)))?;

        debug!(
            server = %self.server_addr,
            bytes_sent = bytes_sent,
            "UDP query forwarded"
        );

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];
        loop {
            let (bytes_received, from_addr) = socket
                .recv_from(&mut recv_buf)
                .await
                .map_err(|e| self.upstream_error(format!("receive failed: {}", e)))?;

            if from_addr != self.server_addr {
                warn!(
                    expected = %self.server_addr,
                    received_from = %from_addr,
                    "UDP response from unexpected source"
                );
                continue;
            }

            if bytes_received < 2 || recv_buf[..2] != request[..2] {
                warn!(server = %self.server_addr, "UDP response with mismatched id");
                continue;
            }

            recv_buf.truncate(bytes_received);
            debug!(
                server = %self.server_addr,
                bytes_received = bytes_received,
                "UDP response received"
            );
            return Ok(recv_buf);
        }
    }
}

#[async_trait]
impl FallbackResolver for UpstreamForwarder {
    async fn forward(&self, request: &[u8]) -> Result<Vec<u8>, DomainError> {
        if request.len() < 2 {
            return Err(DomainError::InvalidDnsMessage(
                "Request shorter than a message id".to_string(),
            ));
        }

        let bind_addr = if self.server_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| DomainError::IoError(format!("Failed to bind UDP socket: {}", e)))?;

        tokio::time::timeout(self.timeout, self.exchange(&socket, request))
            .await
            .map_err(|_| self.timeout_error())?
    }

    fn name(&self) -> String {
        format!("udp://{}", self.server_addr)
    }
}
