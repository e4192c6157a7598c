//! Filtered transactions command implementation.

use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Args;

use fire_business::TransactionWindow;

use crate::cli::ConnectionArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct TransactionsArgs {
    /// ICAN of the account to search
    #[arg(long)]
    pub ican: u64,

    /// Reference to search for
    #[arg(long)]
    pub reference: String,

    /// Start of the range (RFC 3339); defaults to the window before --to
    #[arg(long)]
    pub from: Option<DateTime<Utc>>,

    /// End of the range (RFC 3339); defaults to now
    #[arg(long)]
    pub to: Option<DateTime<Utc>>,

    /// Length of the range when --from is omitted
    #[arg(long, default_value_t = 15)]
    pub window_minutes: u64,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl TransactionsArgs {
    fn window(&self) -> TransactionWindow {
        TransactionWindow {
            from: self.from,
            to: self.to,
            span: Duration::from_secs(self.window_minutes.saturating_mul(60)),
        }
    }
}

pub async fn run(args: TransactionsArgs, connection: &ConnectionArgs) -> Result<()> {
    let client = connection.connect()?;

    let response = client
        .get_filtered_transactions(&args.reference, args.ican, &args.window())
        .await
        .context("Failed to search transactions")?;

    output::response(&response, args.pretty, "No transactions returned")
}
