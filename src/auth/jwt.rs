//! JWT session tokens.
//!
//! Tokens are HS256-signed JSON Web Tokens carrying the username of the
//! authenticated user. They are self-contained: nothing is stored server side,
//! and a token stops being accepted once its `exp` claim is reached or the
//! signing secret changes.
//!
//! # Examples
//!
//! ```rust
//! use todo_api::auth::jwt::TokenKeys;
//!
//! let keys = TokenKeys::from_secret("MySuperSecret").unwrap();
//! let token = keys.issue("alice").unwrap();
//!
//! let claims = keys.verify(&token).unwrap();
//! assert_eq!(claims.username, "alice");
//! ```

use chrono::{DateTime, TimeDelta, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};
use uuid::Uuid;

use super::error::AuthError;

/// How long an issued token stays valid.
pub const TOKEN_TTL: TimeDelta = TimeDelta::hours(24);

/// JWT signing algorithm.
const ALGORITHM: Algorithm = Algorithm::HS256;

/// Claims carried by a session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Username the token asserts.
    pub username: String,
    /// Issued at (Unix seconds).
    pub iat: i64,
    /// Expiration (Unix seconds).
    pub exp: i64,
    /// Token ID.
    pub jti: Uuid,
}

impl SessionClaims {
    /// Builds the claim set for a token issued at `issued_at`.
    pub fn new(username: &str, issued_at: DateTime<Utc>) -> Result<Self, AuthError> {
        let expiration = issued_at
            .checked_add_signed(TOKEN_TTL)
            .ok_or(AuthError::InvalidToken)?;

        Ok(Self {
            username: String::from(username),
            iat: issued_at.timestamp(),
            exp: expiration.timestamp(),
            jti: Uuid::new_v4(),
        })
    }
}

/// Signing and verification keys derived from the shared secret.
///
/// Built once at startup and shared read-only between requests.
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenKeys {
    /// Creates the key pair. An empty secret is rejected.
    pub fn from_secret(secret: &str) -> Result<Self, AuthError> {
        if secret.is_empty() {
            return Err(AuthError::SecretMissing);
        }

        // Expiry is checked against an explicit clock in `verify_at`.
        let mut validation = Validation::new(ALGORITHM);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Ok(Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        })
    }

    /// Issues a token for `username`, valid for [`TOKEN_TTL`] from now.
    pub fn issue(&self, username: &str) -> Result<String, AuthError> {
        self.issue_at(username, Utc::now())
    }

    /// Issues a token as if it had been created at `issued_at`.
    pub fn issue_at(&self, username: &str, issued_at: DateTime<Utc>) -> Result<String, AuthError> {
        let claims = SessionClaims::new(username, issued_at)?;
        self.sign(&claims)
    }

    /// Signs an arbitrary claim set.
    pub fn sign(&self, claims: &SessionClaims) -> Result<String, AuthError> {
        encode(&Header::new(ALGORITHM), claims, &self.encoding).map_err(|err| {
            error!("Failed to encode JWT {err}");
            AuthError::TokenCreation(err)
        })
    }

    /// Verifies signature and expiry against the current time.
    pub fn verify(&self, token: &str) -> Result<SessionClaims, AuthError> {
        self.verify_at(token, Utc::now())
    }

    /// Verifies signature and expiry against `now`.
    ///
    /// A token is accepted only while `now < exp`.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<SessionClaims, AuthError> {
        let claims = decode::<SessionClaims>(token, &self.decoding, &self.validation)
            .map_err(|err| {
                debug!("Failed to decode jwt token {err}");
                AuthError::InvalidToken
            })?
            .claims;

        if claims.exp <= now.timestamp() {
            return Err(AuthError::TokenExpired);
        }
        Ok(claims)
    }
}
