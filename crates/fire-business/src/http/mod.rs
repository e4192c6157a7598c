//! HTTP client implementation.
//!
//! This module provides the transport used by [`FireClient`](crate::FireClient)
//! together with the endpoint paths and wire types of the API.

mod client;
mod endpoints;
mod response;

pub(crate) use client::HttpClient;
pub(crate) use endpoints::*;
pub use response::ApiResponse;
