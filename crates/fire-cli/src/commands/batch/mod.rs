//! Batch subcommand implementations.

mod add_payment;
mod create;
mod submit;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::cli::ConnectionArgs;

#[derive(Args, Debug)]
pub struct BatchCommand {
    #[command(subcommand)]
    pub command: BatchSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum BatchSubcommand {
    /// Create a new EUR bank transfer batch
    Create(create::CreateArgs),

    /// Add a bank transfer to a batch
    AddPayment(add_payment::AddPaymentArgs),

    /// Submit a batch for approval
    Submit(submit::SubmitArgs),
}

pub async fn handle(cmd: BatchCommand, connection: &ConnectionArgs) -> Result<()> {
    match cmd.command {
        BatchSubcommand::Create(args) => create::run(args, connection).await,
        BatchSubcommand::AddPayment(args) => add_payment::run(args, connection).await,
        BatchSubcommand::Submit(args) => submit::run(args, connection).await,
    }
}
