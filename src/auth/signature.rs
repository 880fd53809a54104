//! HMAC-SHA256 signature generation for Ariomex API authentication.
//!
//! Private endpoints require a signature computed as:
//! ```text
//! hex(HMAC-SHA256(api_secret, canonical_query_string))
//! ```
//!
//! The canonical query string always includes the injected `timestamp`
//! parameter, whatever the HTTP method. The signature is sent in the
//! `X-ARX-SIGNATURE` header.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::auth::Credentials;

type HmacSha256 = Hmac<Sha256>;

/// Sign a payload for Ariomex's private API.
///
/// The secret is used as raw UTF-8 bytes. The result is lowercase hex.
///
/// # Example
///
/// ```rust
/// use ariomex_api_client::auth::{Credentials, sign_payload};
///
/// let credentials = Credentials::new("api_key", "api_secret");
/// let signature = sign_payload(&credentials, "symbol=BTCUSDT&timestamp=1700000000000");
/// assert_eq!(signature.len(), 64);
/// ```
pub fn sign_payload(credentials: &Credentials, payload: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(credentials.expose_secret().as_bytes())
        .expect("HMAC can take key of any size");
    mac.update(payload.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_known_vector() {
        // RFC 4231, test case 2.
        let credentials = Credentials::new("key", "Jefe");
        let signature = sign_payload(&credentials, "what do ya want for nothing?");
        assert_eq!(
            signature,
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn test_signature_consistency() {
        let credentials = Credentials::new("key", "my_secret");
        let payload = "symbol=BTCUSDT&timestamp=1700000000000";
        assert_eq!(
            sign_payload(&credentials, payload),
            sign_payload(&credentials, payload)
        );
    }

    #[test]
    fn test_signature_is_lowercase_hex() {
        let credentials = Credentials::new("key", "my_secret");
        let signature = sign_payload(&credentials, "timestamp=1");
        assert_eq!(signature.len(), 64);
        assert!(signature.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
    }

    #[test]
    fn test_signature_changes_with_timestamp() {
        let credentials = Credentials::new("key", "my_secret");
        let sig1 = sign_payload(&credentials, "timestamp=12345");
        let sig2 = sign_payload(&credentials, "timestamp=12346");
        assert_ne!(sig1, sig2);
    }

    #[test]
    fn test_signature_changes_with_secret() {
        let payload = "timestamp=12345";
        let sig1 = sign_payload(&Credentials::new("key", "secret_a"), payload);
        let sig2 = sign_payload(&Credentials::new("key", "secret_b"), payload);
        assert_ne!(sig1, sig2);
    }

    #[test]
    fn test_empty_secret_still_signs() {
        let signature = sign_payload(&Credentials::default(), "timestamp=12345");
        assert_eq!(signature.len(), 64);
    }
}
