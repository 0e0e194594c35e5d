use clap::Parser;
use hesiod_tip_application::use_cases::{AnswerSynthesizer, HandleHesiodQueryUseCase};
use hesiod_tip_domain::CliOverrides;
use hesiod_tip_infrastructure::dns::{DnsServerHandler, UpstreamForwarder};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

mod bootstrap;
mod server;

#[derive(Parser)]
#[command(name = "hesiod-tip")]
#[command(version)]
#[command(about = "Serves the header-chain tip as Hesiod TXT records under hnsd.")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Resolver for names outside hnsd. (ip:port)
    #[arg(short = 'u', long)]
    upstream: Option<String>,

    /// JSON headers file imported at start-up
    #[arg(long, value_name = "FILE")]
    headers: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind,
        upstream: cli.upstream,
        headers_file: cli.headers,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    info!("Starting hesiod-tip v{}", env!("CARGO_PKG_VERSION"));
    bootstrap::log_config(&config, cli.config.as_deref());

    let (_chain, tip_store) = bootstrap::build_chain(&config)?;

    let use_case = Arc::new(HandleHesiodQueryUseCase::new(
        tip_store,
        AnswerSynthesizer::new(config.hesiod.ttl),
    ));

    let mut handler = DnsServerHandler::new(use_case);
    if let Some(upstream) = &config.fallback.upstream {
        let upstream: SocketAddr = upstream.parse()?;
        info!(upstream = %upstream, "Forwarding other names upstream");
        handler = handler.with_fallback(Arc::new(UpstreamForwarder::new(
            upstream,
            Duration::from_secs(config.fallback.query_timeout),
        )));
    }

    tokio::select! {
        result = server::start_dns_server(&config.server, handler) => {
            if let Err(e) = &result {
                error!(error = %e, "DNS server error");
            }
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
