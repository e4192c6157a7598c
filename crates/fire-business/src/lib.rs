//! fire-business - Fire Business API client
//!
//! This library provides a client for the Fire Business banking API with a
//! self-refreshing session. All operations flow through a [`FireClient`],
//! which authenticates lazily on first use and renews its access token
//! whenever it is about to expire.
//!
//! # Example
//!
//! ```no_run
//! use fire_business::{Credentials, FireClient, TransactionWindow};
//!
//! # async fn example() -> Result<(), fire_business::Error> {
//! let credentials = Credentials::new("client-id", "refresh-token", "client-key");
//! let client = FireClient::new(credentials)?;
//!
//! let accounts = client.get_accounts().await?;
//! println!("{:?}", accounts.json());
//!
//! let transactions = client
//!     .get_filtered_transactions("INV-1001", 42, &TransactionWindow::default())
//!     .await?;
//! println!("{:?}", transactions.json());
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod clock;
pub mod error;
pub mod http;
pub mod payments;
pub mod transactions;
pub mod types;

// Re-export primary types at crate root for convenience
pub use auth::{Credentials, Session};
pub use client::{ClientBuilder, ClientState, FireClient};
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::Error;
pub use http::ApiResponse;
pub use payments::PaymentRequestOptions;
pub use transactions::TransactionWindow;
pub use types::{ApiUrl, RequestMethod};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
