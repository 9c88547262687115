//! Config Writer - Entry Point
//!
//! Accepts batches of config files over HTTP from allowlisted networks and
//! writes them beneath a fixed output root.

use anyhow::Context;
use log::info;

use config_writer::config::ServerConfig;
use config_writer::firewall::AddressAllowlist;
use config_writer::server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // env_logger picks up RUST_LOG; default to info
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting server...");

    let config = ServerConfig::load().context("loading configuration")?;
    let allowlist =
        AddressAllowlist::new(&config.allowed_cidrs).context("building address allowlist")?;

    let server = Server::new(&config, allowlist)
        .await
        .with_context(|| format!("binding {}", config.listen_socket()))?;
    server.start().await.context("serving requests")?;

    Ok(())
}
