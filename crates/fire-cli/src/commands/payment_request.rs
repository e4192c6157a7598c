//! Payment request command implementation.

use anyhow::{Context, Result};
use clap::Args;

use fire_business::PaymentRequestOptions;

use crate::cli::ConnectionArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct PaymentRequestArgs {
    /// ICAN of the account to be paid into
    #[arg(long)]
    pub ican: u64,

    /// Reference shown on your statement
    #[arg(long)]
    pub reference: String,

    /// Description shown to the payer
    #[arg(long)]
    pub description: String,

    /// Currency code
    #[arg(long, default_value = "EUR")]
    pub currency: String,

    /// How many times a single customer may pay
    #[arg(long, default_value_t = 1)]
    pub max_customer_payments: u32,

    /// How many payments are accepted overall (unlimited if omitted)
    #[arg(long)]
    pub max_payments: Option<u32>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: PaymentRequestArgs, connection: &ConnectionArgs) -> Result<()> {
    let client = connection.connect()?;

    let options = PaymentRequestOptions {
        currency: args.currency,
        max_customer_payments: args.max_customer_payments,
        max_payments: args.max_payments,
    };

    let response = client
        .make_payment_request(args.ican, &args.reference, &args.description, &options)
        .await
        .context("Failed to create payment request")?;

    output::response(&response, args.pretty, "Payment request created")
}
