//! CLI argument definitions.

use anyhow::{Context, Result};
use clap::{Args, Parser};
use tracing::debug;

use fire_business::types::DEFAULT_BASE_URL;
use fire_business::{ApiUrl, Credentials, FireClient};

use crate::commands::Commands;

/// Fire Business API CLI tool.
#[derive(Parser, Debug)]
#[command(name = "fire")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// API application credentials and endpoint.
#[derive(Args, Debug)]
pub struct ConnectionArgs {
    /// API application client ID
    #[arg(long, env = "FIRE_CLIENT_ID", global = true)]
    pub client_id: Option<String>,

    /// API application refresh token
    #[arg(long, env = "FIRE_REFRESH_TOKEN", hide_env_values = true, global = true)]
    pub refresh_token: Option<String>,

    /// API application client key
    #[arg(long, env = "FIRE_CLIENT_KEY", hide_env_values = true, global = true)]
    pub client_key: Option<String>,

    /// API base URL
    #[arg(long, env = "FIRE_API_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub base_url: String,
}

impl ConnectionArgs {
    /// Build an API client from the configured credentials.
    pub fn connect(&self) -> Result<FireClient> {
        let client_id = self
            .client_id
            .as_deref()
            .context("Missing client ID. Pass --client-id or set FIRE_CLIENT_ID.")?;
        let refresh_token = self
            .refresh_token
            .as_deref()
            .context("Missing refresh token. Pass --refresh-token or set FIRE_REFRESH_TOKEN.")?;
        let client_key = self
            .client_key
            .as_deref()
            .context("Missing client key. Pass --client-key or set FIRE_CLIENT_KEY.")?;

        let base_url = ApiUrl::new(&self.base_url).context("Invalid API base URL")?;
        debug!(%base_url, client_id, "Creating API client");

        FireClient::builder(Credentials::new(client_id, refresh_token, client_key))
            .base_url(base_url)
            .build()
            .context("Failed to create API client")
    }
}
