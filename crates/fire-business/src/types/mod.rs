//! Core types for the Fire Business API.
//!
//! This module provides the validated base URL and the request method enum
//! that describe where and how a request is sent.

mod api_url;
mod method;

pub use api_url::{ApiUrl, DEFAULT_BASE_URL};
pub use method::RequestMethod;
