//! Auth command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use crate::cli::ConnectionArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct AuthArgs {}

pub async fn run(_args: AuthArgs, connection: &ConnectionArgs) -> Result<()> {
    let client = connection.connect()?;

    eprintln!("{}", "Authenticating...".dimmed());

    let session = client
        .authenticate()
        .await
        .context("Failed to authenticate")?;

    output::success("Authenticated successfully");
    println!();
    output::field("Business ID", &session.business_id().to_string());
    output::field(
        "Application ID",
        &session
            .application_id()
            .map_or_else(|| "-".to_string(), |id| id.to_string()),
    );
    output::field(
        "Expires",
        &session
            .expires_at()
            .map_or_else(|| session.expires_at_ms().to_string(), |at| at.to_rfc3339()),
    );
    output::field("Permissions", &session.permissions().join(", "));

    Ok(())
}
