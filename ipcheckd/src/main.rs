//! IPChecker service daemon

use clap::Parser;
use ipcheck_core::prelude::*;
use ipcheck_http::HttpServer;
use std::process;
use std::sync::Arc;
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

mod cli;
mod config;

use cli::Cli;
use config::IpcheckdConfig;

#[tokio::main]
async fn main() {
    let args = Cli::parse();

    // Initialize logging; RUST_LOG takes precedence over -v
    let log_level = match args.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if let Err(e) = run(&args).await {
        error!("ipcheckd failed: {}", e);
        process::exit(1);
    }
}

async fn run(args: &Cli) -> CoreResult<()> {
    // Load configuration, then let CLI flags win
    let config = IpcheckdConfig::load(&args.config)?.with_overrides(args);

    let deny_list = config.deny_list()?;
    info!(
        "Loaded deny-list with {} IPv4 and {} IPv6 entries",
        deny_list.ipv4_len(),
        deny_list.ipv6_len()
    );

    let service = Arc::new(IpCheckService::new(config.service_name.clone(), deny_list));
    let server = Arc::new(HttpServer::new(config.http_config()?));

    let shutdown = {
        let server = server.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Received Ctrl-C, shutting down");
                if let Err(e) = server.stop().await {
                    error!("Shutdown failed: {}", e);
                }
            }
        })
    };

    let result = server.start(service).await;
    shutdown.abort();
    result?;

    info!("ipcheckd stopped");
    Ok(())
}
