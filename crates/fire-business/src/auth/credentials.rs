//! API application credentials.

use std::fmt;

use super::tokens::RefreshToken;

/// Credentials of a Fire Business API application.
///
/// This type holds the client identifier, refresh token and client key
/// issued when the application was created. They are fixed for the lifetime
/// of a client.
///
/// # Security
///
/// The refresh token and client key are never exposed in Debug output.
///
/// # Example
///
/// ```
/// use fire_business::Credentials;
///
/// let creds = Credentials::new("client-id", "refresh-token", "client-key");
/// assert_eq!(creds.client_id(), "client-id");
/// ```
#[derive(Clone)]
pub struct Credentials {
    client_id: String,
    refresh_token: RefreshToken,
    client_key: String,
}

impl Credentials {
    /// Create new credentials.
    ///
    /// # Arguments
    ///
    /// * `client_id` - The application's client identifier
    /// * `refresh_token` - The application's refresh token
    /// * `client_key` - The application's client secret key, used to sign nonces
    pub fn new(
        client_id: impl Into<String>,
        refresh_token: impl Into<String>,
        client_key: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            refresh_token: RefreshToken::new(refresh_token),
            client_key: client_key.into(),
        }
    }

    /// Returns the client identifier.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub(crate) fn refresh_token(&self) -> &RefreshToken {
        &self.refresh_token
    }

    /// Returns the client secret key.
    ///
    /// Only ever hashed together with a nonce; never sent on the wire.
    pub(crate) fn client_key(&self) -> &str {
        &self.client_key
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("refresh_token", &self.refresh_token)
            .field("client_key", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_hide_secrets_in_debug() {
        let creds = Credentials::new("client-123", "refresh-abc", "key-xyz");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("client-123"));
        assert!(!debug.contains("refresh-abc"));
        assert!(!debug.contains("key-xyz"));
        assert!(debug.contains("[REDACTED]"));
    }
}
