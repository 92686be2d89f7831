//! Mock session token codec.
//!
//! Tokens are a base64-encoded JSON payload wrapped in a fixed
//! `header.<payload>.signature` frame. There is no signature and no
//! cryptography: the frame only makes the stored artifact look like a
//! bearer token while staying trivially decodable. This is a demo stand-in
//! and must never be treated as a security boundary.

use crate::error::{GamerMindError, Result};
use crate::user::User;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Default token lifetime in hours.
pub const DEFAULT_TTL_HOURS: i64 = 24;

/// The claims embedded in a token payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Identifier of the authenticated user
    #[serde(rename = "userId")]
    pub user_id: String,
    /// Email of the authenticated user
    pub email: String,
    /// Expiry as unix seconds
    pub exp: i64,
}

impl TokenClaims {
    /// The expiry instant, if representable.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    /// Whether the claims are expired at the given instant.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.exp <= now.timestamp()
    }
}

/// Encodes a token for the given user.
///
/// # Arguments
///
/// * `user` - The user the token authenticates
/// * `issued_at` - Issuance instant; the expiry is `issued_at + ttl`
/// * `ttl` - Token lifetime
///
/// # Returns
///
/// The framed token string `header.<payload>.signature`.
pub fn encode_token(user: &User, issued_at: DateTime<Utc>, ttl: Duration) -> Result<String> {
    let claims = TokenClaims {
        user_id: user.id.clone(),
        email: user.email.clone(),
        exp: (issued_at + ttl).timestamp(),
    };
    let payload = serde_json::to_vec(&claims)?;
    Ok(format!("header.{}.signature", BASE64_STANDARD.encode(payload)))
}

/// Decodes the claims out of a framed token string.
///
/// Splits on `.`, takes the middle segment, base64-decodes it and parses
/// the JSON claims. Any failure in that chain is reported as
/// `MalformedSession`; expiry is NOT checked here, callers decide what an
/// expired token means.
pub fn decode_token(token: &str) -> Result<TokenClaims> {
    let parts: Vec<&str> = token.split('.').collect();
    let payload = parts
        .get(1)
        .ok_or_else(|| GamerMindError::malformed_session("token missing payload segment"))?;
    let bytes = BASE64_STANDARD.decode(payload).map_err(|e| {
        GamerMindError::malformed_session(format!("invalid base64 payload: {}", e))
    })?;
    let claims: TokenClaims = serde_json::from_slice(&bytes).map_err(|e| {
        GamerMindError::malformed_session(format!("invalid token payload: {}", e))
    })?;
    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_user() -> User {
        User::new(
            "1",
            "DemoUser",
            "demo@gamermind.com",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let issued = Utc::now();
        let token = encode_token(&sample_user(), issued, Duration::hours(24)).unwrap();

        assert!(token.starts_with("header."));
        assert!(token.ends_with(".signature"));

        let claims = decode_token(&token).unwrap();
        assert_eq!(claims.user_id, "1");
        assert_eq!(claims.email, "demo@gamermind.com");
        assert_eq!(claims.exp, (issued + Duration::hours(24)).timestamp());
    }

    #[test]
    fn test_expired_claims_are_detected() {
        let issued = Utc::now() - Duration::hours(48);
        let token = encode_token(&sample_user(), issued, Duration::hours(24)).unwrap();

        let claims = decode_token(&token).unwrap();
        assert!(claims.is_expired_at(Utc::now()));
    }

    #[test]
    fn test_fresh_claims_are_not_expired() {
        let token = encode_token(&sample_user(), Utc::now(), Duration::hours(24)).unwrap();

        let claims = decode_token(&token).unwrap();
        assert!(!claims.is_expired_at(Utc::now()));
    }

    #[test]
    fn test_decode_rejects_missing_payload_segment() {
        let err = decode_token("no-dots-here").unwrap_err();
        assert!(err.is_malformed_session());
    }

    #[test]
    fn test_decode_rejects_invalid_base64() {
        let err = decode_token("header.!!!not-base64!!!.signature").unwrap_err();
        assert!(err.is_malformed_session());
    }

    #[test]
    fn test_decode_rejects_non_json_payload() {
        let payload = BASE64_STANDARD.encode(b"plain text, not json");
        let err = decode_token(&format!("header.{}.signature", payload)).unwrap_err();
        assert!(err.is_malformed_session());
    }
}
