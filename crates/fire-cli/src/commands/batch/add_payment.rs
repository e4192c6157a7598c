//! Add batch payment command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::cli::ConnectionArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct AddPaymentArgs {
    /// Batch UUID
    #[arg(long)]
    pub batch: String,

    /// ICAN of the account to pay from
    #[arg(long)]
    pub from: u64,

    /// Payee ID
    #[arg(long)]
    pub payee: u64,

    /// Amount in cents
    #[arg(long)]
    pub amount: u64,

    /// Reference on your statement
    #[arg(long)]
    pub my_ref: String,

    /// Reference on the payee's statement
    #[arg(long)]
    pub your_ref: String,
}

pub async fn run(args: AddPaymentArgs, connection: &ConnectionArgs) -> Result<()> {
    let client = connection.connect()?;

    let response = client
        .add_batch_payment(
            &args.batch,
            args.from,
            args.payee,
            args.amount,
            &args.my_ref,
            &args.your_ref,
        )
        .await
        .context("Failed to add payment to batch")?;

    output::response(&response, false, "Payment added")
}
