//! Authentication types and session management.
//!
//! This module provides the credentials the client is constructed with and
//! the [`Session`] derived from them by the access token exchange.

mod credentials;
mod proof;
mod session;
mod tokens;

pub use credentials::Credentials;
pub use proof::client_secret_proof;
pub use session::{Session, parse_expiry};
pub use tokens::{AccessToken, RefreshToken};

pub(crate) use session::AccessTokenResponse;
