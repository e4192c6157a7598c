//! Accounts command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::cli::ConnectionArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct AccountsArgs {
    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: AccountsArgs, connection: &ConnectionArgs) -> Result<()> {
    let client = connection.connect()?;

    let response = client
        .get_accounts()
        .await
        .context("Failed to list accounts")?;

    output::response(&response, args.pretty, "No accounts returned")
}
