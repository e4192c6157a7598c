//! Submit batch command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use crate::cli::ConnectionArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct SubmitArgs {
    /// Batch UUID
    #[arg(long)]
    pub batch: String,
}

pub async fn run(args: SubmitArgs, connection: &ConnectionArgs) -> Result<()> {
    let client = connection.connect()?;

    eprintln!("{}", "Submitting batch...".dimmed());

    let response = client
        .submit_batch(&args.batch)
        .await
        .context("Failed to submit batch")?;

    output::response(&response, false, "Batch submitted for approval")
}
