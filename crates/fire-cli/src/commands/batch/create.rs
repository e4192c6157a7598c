//! Create batch command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::cli::ConnectionArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Name of the batch
    #[arg(long)]
    pub name: String,
}

pub async fn run(args: CreateArgs, connection: &ConnectionArgs) -> Result<()> {
    let client = connection.connect()?;

    let response = client
        .make_batch(&args.name)
        .await
        .context("Failed to create batch")?;

    output::response(&response, false, "Batch created")
}
