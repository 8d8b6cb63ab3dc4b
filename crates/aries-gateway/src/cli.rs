//! Command-line and environment configuration.

use anyhow::{Context, Result};
use clap::Parser;

use aries_core::{BaseUrl, Credentials};
use aries_upstream::UpstreamConfig;

/// Aries lookup service for JSTOR Forum assets.
#[derive(Parser, Debug)]
#[command(name = "aries-jstor")]
#[command(author, version = crate::VERSION, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long)]
    pub json_logs: bool,

    /// Port to listen on
    #[arg(long, env = "ARIES_JSTOR_PORT", default_value_t = 8080)]
    pub port: u16,

    /// JSTOR Forum base URL
    #[arg(long = "url", env = "ARIES_JSTOR_URL", default_value = "https://forum.jstor.org")]
    pub catalog_url: String,

    /// Artstor public base URL
    #[arg(
        long = "publicurl",
        env = "ARIES_JSTOR_PUBLIC_URL",
        default_value = "https://library.artstor.org"
    )]
    pub public_url: String,

    /// Target JSTOR Forum project
    #[arg(long, env = "ARIES_JSTOR_PROJECT")]
    pub project: String,

    /// JSTOR Forum account email
    #[arg(long, env = "ARIES_JSTOR_EMAIL")]
    pub email: String,

    /// JSTOR Forum account password
    #[arg(long = "pass", env = "ARIES_JSTOR_PASS", hide_env_values = true)]
    pub password: String,
}

impl Cli {
    /// Validate the upstream settings.
    pub fn upstream_config(&self) -> Result<UpstreamConfig> {
        let catalog = BaseUrl::new(&self.catalog_url).context("Invalid JSTOR Forum URL")?;
        let public = BaseUrl::new(&self.public_url).context("Invalid Artstor public URL")?;
        anyhow::ensure!(!self.project.trim().is_empty(), "Project must not be empty");

        Ok(UpstreamConfig::new(
            catalog,
            public,
            self.project.trim(),
            Credentials::new(&self.email, &self.password),
        ))
    }
}
