//! Client secret proof for the access token exchange.

use sha2::{Digest, Sha256};

/// Compute the `clientSecret` value sent with an access token request.
///
/// The proof is the lowercase hex SHA-256 digest of the decimal nonce
/// followed by the client key. The key itself never leaves the process.
///
/// # Example
///
/// ```
/// use fire_business::auth::client_secret_proof;
///
/// let proof = client_secret_proof(1704067200000, "secret-key");
/// assert_eq!(proof.len(), 64);
/// ```
pub fn client_secret_proof(nonce: i64, client_key: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(nonce.to_string().as_bytes());
    hasher.update(client_key.as_bytes());
    hex::encode(hasher.finalize())
}
