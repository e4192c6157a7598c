//! Session state derived from an access token exchange.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;

use crate::error::AuthError;

use super::tokens::AccessToken;

/// Layout of the `expiry` field returned by the token endpoint.
const EXPIRY_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";

/// An authenticated session with the Fire Business API.
///
/// A session is produced in one piece by a successful access token exchange
/// and replaced in one piece by the next one; it is never partially updated.
///
/// # Security
///
/// The bearer token is not exposed through the public API and is hidden in
/// Debug output.
#[derive(Clone)]
pub struct Session {
    access_token: AccessToken,
    expires_at_ms: i64,
    business_id: i64,
    permissions: Vec<String>,
    application_id: Option<i64>,
}

impl Session {
    /// Returns the expiry as milliseconds since the Unix epoch.
    pub fn expires_at_ms(&self) -> i64 {
        self.expires_at_ms
    }

    /// Returns the expiry as a UTC timestamp.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.expires_at_ms)
    }

    /// Returns the business this session acts for.
    pub fn business_id(&self) -> i64 {
        self.business_id
    }

    /// Returns the permissions granted to the access token.
    pub fn permissions(&self) -> &[String] {
        &self.permissions
    }

    /// Returns the API application identifier, if the server reported one.
    pub fn application_id(&self) -> Option<i64> {
        self.application_id
    }

    /// Check if the token has reached the renewal threshold.
    ///
    /// The threshold is the expiry minus `guard`; a token is due for renewal
    /// once `now_ms` reaches or passes it.
    pub fn needs_renewal(&self, now_ms: i64, guard: Duration) -> bool {
        let guard_ms = i64::try_from(guard.as_millis()).unwrap_or(i64::MAX);
        now_ms >= self.expires_at_ms.saturating_sub(guard_ms)
    }

    pub(crate) fn access_token(&self) -> &AccessToken {
        &self.access_token
    }
}

// Custom Debug impl that hides the bearer token
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("business_id", &self.business_id)
            .field("application_id", &self.application_id)
            .field("permissions", &self.permissions)
            .field("expires_at_ms", &self.expires_at_ms)
            .field("access_token", &self.access_token)
            .finish()
    }
}

/// Response from the access token endpoint.
///
/// Every field is optional at the serde level so that a missing field is
/// reported by name instead of as a generic decode failure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AccessTokenResponse {
    #[serde(default)]
    pub expiry: Option<String>,
    #[serde(default)]
    pub business_id: Option<i64>,
    #[serde(default)]
    pub permissions: Option<Vec<String>>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub application_id: Option<i64>,
}

impl AccessTokenResponse {
    /// Build a session, rejecting responses that lack a required field.
    pub(crate) fn into_session(self) -> Result<Session, AuthError> {
        let expiry = self
            .expiry
            .ok_or(AuthError::MissingField { field: "expiry" })?;
        let business_id = self
            .business_id
            .ok_or(AuthError::MissingField { field: "businessId" })?;
        let permissions = self
            .permissions
            .ok_or(AuthError::MissingField { field: "permissions" })?;
        let access_token = self
            .access_token
            .ok_or(AuthError::MissingField { field: "accessToken" })?;

        Ok(Session {
            access_token: AccessToken::new(access_token),
            expires_at_ms: parse_expiry(&expiry)?,
            business_id,
            permissions,
            application_id: self.application_id,
        })
    }
}

/// Parse a token expiry into milliseconds since the Unix epoch.
///
/// The token endpoint is documented as returning a Unix timestamp but in
/// practice sends a UTC date-time such as `2024-01-01T00:00:00.000000Z`.
/// Microseconds are rounded to the nearest millisecond.
///
/// # Example
///
/// ```
/// use fire_business::auth::parse_expiry;
///
/// assert_eq!(parse_expiry("2024-01-01T00:00:00.000000Z").unwrap(), 1704067200000);
/// ```
pub fn parse_expiry(value: &str) -> Result<i64, AuthError> {
    let parsed = NaiveDateTime::parse_from_str(value, EXPIRY_FORMAT).map_err(|e| {
        AuthError::InvalidExpiry {
            value: value.to_string(),
            reason: e.to_string(),
        }
    })?;

    let micros = parsed.and_utc().timestamp_micros();
    Ok((micros + 500).div_euclid(1000))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_response() -> AccessTokenResponse {
        AccessTokenResponse {
            expiry: Some("2024-01-01T00:00:00.000000Z".to_string()),
            business_id: Some(1234),
            permissions: Some(vec!["PERM_BUSINESS_GET_ACCOUNTS".to_string()]),
            access_token: Some("access".to_string()),
            application_id: Some(99),
        }
    }

    #[test]
    fn parses_iso_expiry() {
        assert_eq!(
            parse_expiry("2024-01-01T00:00:00.000000Z").unwrap(),
            1704067200000
        );
    }

    #[test]
    fn rounds_microseconds_to_millis() {
        assert_eq!(
            parse_expiry("2024-01-01T00:00:00.123456Z").unwrap(),
            1704067200123
        );
        assert_eq!(
            parse_expiry("2024-01-01T00:00:00.123500Z").unwrap(),
            1704067200124
        );
    }

    #[test]
    fn rejects_numeric_expiry() {
        let err = parse_expiry("1704067200").unwrap_err();
        assert!(matches!(err, AuthError::InvalidExpiry { .. }));
    }

    #[test]
    fn rejects_expiry_without_zulu_suffix() {
        assert!(parse_expiry("2024-01-01T00:00:00.000000").is_err());
    }

    #[test]
    fn builds_session_from_full_response() {
        let session = full_response().into_session().unwrap();
        assert_eq!(session.expires_at_ms(), 1704067200000);
        assert_eq!(session.business_id(), 1234);
        assert_eq!(session.application_id(), Some(99));
        assert_eq!(session.permissions(), ["PERM_BUSINESS_GET_ACCOUNTS"]);
        assert_eq!(session.access_token().as_str(), "access");
    }

    #[test]
    fn missing_access_token_is_fatal() {
        let mut response = full_response();
        response.access_token = None;
        let err = response.into_session().unwrap_err();
        assert!(matches!(err, AuthError::MissingField { field: "accessToken" }));
    }

    #[test]
    fn missing_application_id_is_tolerated() {
        let mut response = full_response();
        response.application_id = None;
        let session = response.into_session().unwrap();
        assert_eq!(session.application_id(), None);
    }

    #[test]
    fn renewal_threshold_honours_guard() {
        let session = full_response().into_session().unwrap();
        let expiry = session.expires_at_ms();
        let guard = Duration::from_secs(1);

        assert!(!session.needs_renewal(expiry - 1001, guard));
        assert!(session.needs_renewal(expiry - 1000, guard));
        assert!(session.needs_renewal(expiry - 999, guard));
        assert!(session.needs_renewal(expiry - 500, guard));
        assert!(session.needs_renewal(expiry + 1, guard));
    }

    #[test]
    fn debug_hides_access_token() {
        let session = full_response().into_session().unwrap();
        let debug = format!("{:?}", session);
        assert!(debug.contains("1234"));
        assert!(!debug.contains("\"access\""));
        assert!(debug.contains("[REDACTED]"));
    }
}
