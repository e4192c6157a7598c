//! Subcommand implementations.

mod accounts;
mod auth;
mod batch;
mod payment_request;
mod transactions;

use anyhow::Result;
use clap::Subcommand;

use crate::cli::ConnectionArgs;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Exchange the refresh token for an access token and show the session
    Auth(auth::AuthArgs),

    /// List the business's accounts
    Accounts(accounts::AccountsArgs),

    /// Search an account's transactions by reference
    Transactions(transactions::TransactionsArgs),

    /// Bank transfer batch operations
    Batch(batch::BatchCommand),

    /// Create a payment request
    PaymentRequest(payment_request::PaymentRequestArgs),
}

pub async fn handle(command: Commands, connection: &ConnectionArgs) -> Result<()> {
    match command {
        Commands::Auth(args) => auth::run(args, connection).await,
        Commands::Accounts(args) => accounts::run(args, connection).await,
        Commands::Transactions(args) => transactions::run(args, connection).await,
        Commands::Batch(cmd) => batch::handle(cmd, connection).await,
        Commands::PaymentRequest(args) => payment_request::run(args, connection).await,
    }
}
