//! aries-jstor - Aries lookup service for JSTOR Forum.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use aries_gateway::cli::Cli;
use aries_gateway::{AppState, VERSION, server};
use aries_upstream::Resolver;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.json_logs);
    info!(version = VERSION, "Starting Aries JSTOR");

    let config = cli.upstream_config()?;
    let resolver = Resolver::from_config(&config).context("Failed to build upstream client")?;

    info!(url = %config.catalog_url, project = %config.project, "Logging in to JSTOR Forum");
    resolver
        .login_all()
        .await
        .context("Unable to establish upstream sessions")?;

    server::serve(AppState::new(resolver), cli.port).await
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false))
            .init();
    }
}
