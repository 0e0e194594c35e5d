mod chain;
mod logging;

pub use chain::build_chain;
pub use logging::init_logging;

use hesiod_tip_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}

pub fn log_config(config: &Config, path: Option<&str>) {
    let config_file = path.map(str::to_string).or_else(Config::get_config_path);
    info!(
        config_file = config_file.as_deref().unwrap_or("<defaults>"),
        bind_address = %config.server.bind_address,
        dns_port = config.server.dns_port,
        tcp_enabled = config.server.tcp_enabled,
        ttl = config.hesiod.ttl,
        upstream = config.fallback.upstream.as_deref().unwrap_or("<none>"),
        "Configuration loaded"
    );
}
