use hesiod_tip_domain::config::ServerConfig;
use hesiod_tip_infrastructure::dns::DnsServerHandler;
use socket2::{Domain, Protocol, Socket, Type};
use std::io;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream, UdpSocket};
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

/// Largest datagram accepted (EDNS(0) sized).
const MAX_UDP_MESSAGE_SIZE: usize = 4096;

pub async fn start_dns_server(config: &ServerConfig, handler: DnsServerHandler) -> anyhow::Result<()> {
    let socket_addr = listen_addr(config)?;
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let handler = Arc::new(handler);
    let mut join_set: JoinSet<()> = JoinSet::new();

    let udp_socket = Arc::new(create_udp_socket(domain, socket_addr)?);
    let handler_udp = handler.clone();
    join_set.spawn(async move {
        run_udp_listener(udp_socket, handler_udp).await;
    });

    if config.tcp_enabled {
        let tcp_listener = create_tcp_listener(domain, socket_addr)?;
        let handler_tcp = handler.clone();
        let idle_timeout = Duration::from_secs(config.tcp_timeout);
        join_set.spawn(async move {
            run_tcp_listener(tcp_listener, handler_tcp, idle_timeout).await;
        });
    }

    info!(
        bind_address = %socket_addr,
        tcp = config.tcp_enabled,
        "DNS server ready"
    );

    while join_set.join_next().await.is_some() {}
    Ok(())
}

/// `bind_address` is a bare IP, so IPv6 literals need no brackets.
fn listen_addr(config: &ServerConfig) -> anyhow::Result<SocketAddr> {
    let ip: IpAddr = config.bind_address.parse().map_err(|e| {
        anyhow::anyhow!("Invalid bind address '{}': {}", config.bind_address, e)
    })?;
    Ok(SocketAddr::new(ip, config.dns_port))
}

async fn run_udp_listener(socket: Arc<UdpSocket>, handler: Arc<DnsServerHandler>) {
    let mut recv_buf = [0u8; MAX_UDP_MESSAGE_SIZE];

    loop {
        let (n, from) = match socket.recv_from(&mut recv_buf).await {
            Ok(received) => received,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                // ICMP errors from earlier sends surface here on some platforms.
                warn!(error = %e, "UDP recv error");
                continue;
            }
        };

        let handler = handler.clone();
        let socket = socket.clone();
        let query: Arc<[u8]> = Arc::from(&recv_buf[..n]);
        tokio::spawn(async move {
            if let Some(response) = handler.handle_raw(&query, from).await {
                if let Err(e) = socket.send_to(&response, from).await {
                    debug!(client = %from, error = %e, "UDP send failed");
                }
            }
        });
    }
}

async fn run_tcp_listener(listener: TcpListener, handler: Arc<DnsServerHandler>, idle_timeout: Duration) {
    loop {
        let (stream, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                error!(error = %e, "TCP accept error");
                continue;
            }
        };

        let handler = handler.clone();
        tokio::spawn(async move {
            if let Err(e) = serve_tcp_connection(stream, peer, handler, idle_timeout).await {
                debug!(client = %peer, error = %e, "TCP connection closed");
            }
        });
    }
}

/// RFC 1035 §4.2.2: every message is prefixed with its length as a u16.
async fn serve_tcp_connection(
    mut stream: TcpStream,
    peer: SocketAddr,
    handler: Arc<DnsServerHandler>,
    idle_timeout: Duration,
) -> io::Result<()> {
    loop {
        let len = match tokio::time::timeout(idle_timeout, stream.read_u16()).await {
            Ok(Ok(len)) => len as usize,
            Ok(Err(e)) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(()),
            Ok(Err(e)) => return Err(e),
            Err(_) => return Ok(()),
        };

        let mut query = vec![0u8; len];
        tokio::time::timeout(idle_timeout, stream.read_exact(&mut query))
            .await
            .map_err(|_| io::Error::new(io::ErrorKind::TimedOut, "TCP read timed out"))??;

        let Some(response) = handler.handle_raw(&query, peer).await else {
            continue;
        };

        let response_len = u16::try_from(response.len())
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidData, "response too large"))?;
        let mut framed = Vec::with_capacity(response.len() + 2);
        framed.extend_from_slice(&response_len.to_be_bytes());
        framed.extend_from_slice(&response);
        stream.write_all(&framed).await?;
    }
}

fn create_udp_socket(domain: Domain, socket_addr: SocketAddr) -> anyhow::Result<UdpSocket> {
    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.set_recv_buffer_size(512 * 1024)?;
    socket.set_send_buffer_size(512 * 1024)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;
    let std_socket: std::net::UdpSocket = socket.into();
    Ok(UdpSocket::from_std(std_socket)?)
}

fn create_tcp_listener(domain: Domain, socket_addr: SocketAddr) -> anyhow::Result<TcpListener> {
    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;
    socket.set_nonblocking(true)?;
    let std_listener: std::net::TcpListener = socket.into();
    Ok(TcpListener::from_std(std_listener)?)
}
