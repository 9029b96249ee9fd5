//! Bearer token decoding.
//!
//! Authentication arrives in a later phase; the scaffold only verifies
//! tokens so that credential failures already classify correctly
//! (malformed vs expired).

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

use shopsearch_core::error::AppError;

/// Minimal claims carried by a ShopSearch bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user identifier).
    pub sub: String,
    /// Expiration as a Unix timestamp.
    pub exp: usize,
}

/// Decode and verify an HS256 bearer token.
pub fn decode_token(token: &str, secret: &str) -> Result<Claims, AppError> {
    let validation = Validation::new(Algorithm::HS256);
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
            AppError::token_expired(e.to_string())
        }
        _ => AppError::invalid_token(e.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use shopsearch_core::ErrorKind;

    const SECRET: &str = "test-secret";

    fn issue(exp_offset_seconds: i64, secret: &str) -> String {
        let exp = (chrono::Utc::now().timestamp() + exp_offset_seconds) as usize;
        let claims = Claims {
            sub: "user-1".to_string(),
            exp,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn valid_token_decodes() {
        let token = issue(3600, SECRET);
        let claims = decode_token(&token, SECRET).unwrap();
        assert_eq!(claims.sub, "user-1");
    }

    #[test]
    fn expired_token_classifies_as_token_expired() {
        let token = issue(-3600, SECRET);
        let err = decode_token(&token, SECRET).unwrap_err();
        assert_eq!(err.kind, ErrorKind::TokenExpired);
        assert_eq!(err.status_code(), 401);
        assert_eq!(err.public_message(), "Token expired");
    }

    #[test]
    fn garbage_classifies_as_invalid_token() {
        let err = decode_token("not-a-token", SECRET).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidToken);
        assert_eq!(err.public_message(), "Invalid token");
    }

    #[test]
    fn wrong_signature_classifies_as_invalid_token() {
        let token = issue(3600, "other-secret");
        let err = decode_token(&token, SECRET).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidToken);
    }
}
