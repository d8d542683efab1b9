//! JWT token issuance and verification
//!
//! Tokens are HS256-signed with a single process-wide secret and carry a
//! self-contained claim set. Encoding/decoding keys are pre-computed once
//! at startup.

use crate::auth::AuthError;
use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Issuer claim stamped into every token
pub const ISSUER: &str = "live-chat";

/// Fixed validity window, in hours
pub const TOKEN_VALIDITY_HOURS: i64 = 24;

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Account email at issuance time
    pub email: String,
    /// Optional role
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issuer
    pub iss: String,
}

/// Pre-computed JWT keys for efficient token operations
#[derive(Clone)]
struct JwtKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl JwtKeys {
    fn new(secret: &str) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
        }
    }
}

/// JWT service for token operations
///
/// Construct once at startup and store in AppState; cloning is cheap
/// because the keys are wrapped in Arc. The secret itself is not retained
/// after key derivation.
#[derive(Clone)]
pub struct JwtService {
    keys: JwtKeys,
    validation: Validation,
}

impl JwtService {
    /// Create a new JWT service with pre-computed keys
    pub fn new(secret: &str) -> Self {
        // Pinning the algorithm set is the defense against tokens that
        // assert a different or weaker signing scheme
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[ISSUER]);

        Self {
            keys: JwtKeys::new(secret),
            validation,
        }
    }

    /// Issue a signed token for a user
    ///
    /// Claims are built fresh: `iat = now`, `exp = now + 24h`, issuer fixed.
    pub fn issue(
        &self,
        user_id: Uuid,
        email: &str,
        role: Option<String>,
    ) -> Result<String, AuthError> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(TOKEN_VALIDITY_HOURS);

        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            role,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            iss: ISSUER.to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.keys.encoding)
            .map_err(|e| AuthError::Internal(anyhow::anyhow!("failed to sign token: {}", e)))
    }

    /// Parse and verify a token, returning the embedded claims unchanged
    ///
    /// Signature, algorithm, structure, and issuer failures are all
    /// `InvalidToken`; only an elapsed validity window is reported
    /// distinctly as `TokenExpired`.
    pub fn parse_and_verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.keys.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|err| match err.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            })
    }
}
