//! API base URL type.

use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// The production Fire Business API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.fire.com/business/v1";

/// A validated API base URL.
///
/// This type ensures the URL is absolute, uses HTTPS (or HTTP for loopback
/// hosts) and is normalized for endpoint construction.
///
/// # Example
///
/// ```
/// use fire_business::ApiUrl;
///
/// let api = ApiUrl::default();
/// assert_eq!(api.endpoint("accounts"), "https://api.fire.com/business/v1/accounts");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApiUrl(Url);

impl ApiUrl {
    /// Create a new API URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not valid or doesn't meet requirements.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::ApiUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        Ok(Self(url))
    }

    /// Returns the full URL of an endpoint below the base.
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.0.as_str().trim_end_matches('/');
        format!("{}/{}", base, path.trim_start_matches('/'))
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        if url.cannot_be_a_base() {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        // HTTPS everywhere except loopback test servers
        let scheme = url.scheme();
        let is_localhost = url
            .host_str()
            .is_some_and(|h| h == "localhost" || h == "127.0.0.1" || h == "[::1]");

        if scheme != "https" && !(scheme == "http" && is_localhost) {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must use HTTPS (HTTP allowed only for localhost)".to_string(),
            }
            .into());
        }

        if url.host_str().is_none() {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            }
            .into());
        }

        if url.query().is_some() || url.fragment().is_some() {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must not carry a query or fragment".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl Default for ApiUrl {
    fn default() -> Self {
        Self(Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"))
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ApiUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_production_api() {
        let api = ApiUrl::default();
        assert_eq!(api.host(), Some("api.fire.com"));
        assert_eq!(api.as_str(), DEFAULT_BASE_URL);
    }

    #[test]
    fn valid_localhost_http() {
        let api = ApiUrl::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(api.host(), Some("127.0.0.1"));
    }

    #[test]
    fn endpoint_construction() {
        let api = ApiUrl::new("https://api.fire.com/business/v1").unwrap();
        assert_eq!(
            api.endpoint("batches/abc/banktransfers"),
            "https://api.fire.com/business/v1/batches/abc/banktransfers"
        );
    }

    #[test]
    fn normalizes_slashes_in_endpoint() {
        let api = ApiUrl::new("https://api.fire.com/business/v1/").unwrap();
        assert_eq!(
            api.endpoint("/accounts"),
            "https://api.fire.com/business/v1/accounts"
        );
    }

    #[test]
    fn root_base_url() {
        let api = ApiUrl::new("http://localhost:4000").unwrap();
        assert_eq!(api.endpoint("accounts"), "http://localhost:4000/accounts");
    }

    #[test]
    fn invalid_http_non_localhost() {
        assert!(ApiUrl::new("http://api.fire.com/business/v1").is_err());
    }

    #[test]
    fn invalid_relative_url() {
        assert!(ApiUrl::new("/business/v1").is_err());
    }

    #[test]
    fn invalid_with_query() {
        assert!(ApiUrl::new("https://api.fire.com/business/v1?x=1").is_err());
    }
}
