//! Password hashing and verification using Argon2.
//!
//! Hashes are stored as PHC strings (`$argon2id$v=19$m=...,t=...,p=...$salt$digest`),
//! so the salt and the cost parameters travel with the digest and verification
//! never needs the configuration that produced a hash.
//!
//! # Examples
//!
//! ```rust
//! use todo_api::auth::secret_hash::{HashParams, SecretHasher};
//!
//! let hasher = SecretHasher::new(&HashParams::default()).unwrap();
//! let hash = hasher.hash("user_password_123").unwrap();
//!
//! assert!(hasher.verify("user_password_123", &hash).unwrap());
//! assert!(!hasher.verify("wrong_password", &hash).unwrap());
//! ```

use argon2::{
    Algorithm, Argon2, Params, PasswordHasher, PasswordVerifier, Version,
    password_hash::{self, PasswordHashString, SaltString},
};
use rand::rngs::OsRng;

use super::error::AuthError;

/// Argon2 work factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashParams {
    /// Memory size in KiB.
    pub m_cost: u32,
    /// Number of iterations.
    pub t_cost: u32,
    /// Degree of parallelism.
    pub p_cost: u32,
}

impl Default for HashParams {
    fn default() -> Self {
        Self {
            m_cost: Params::DEFAULT_M_COST,
            t_cost: Params::DEFAULT_T_COST,
            p_cost: Params::DEFAULT_P_COST,
        }
    }
}

/// Argon2id hasher configured with a fixed work factor.
#[derive(Clone)]
pub struct SecretHasher {
    argon2: Argon2<'static>,
}

impl SecretHasher {
    /// Creates a hasher, failing if the parameters are out of Argon2's range.
    pub fn new(params: &HashParams) -> Result<Self, argon2::Error> {
        let params = Params::new(params.m_cost, params.t_cost, params.p_cost, None)?;
        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Hashes `pw` with a fresh random salt.
    pub fn hash(&self, pw: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        Ok(self.argon2.hash_password(pw.as_bytes(), &salt)?.to_string())
    }

    /// Checks `pw` against a stored hash.
    ///
    /// Returns `Ok(false)` on mismatch. An error is returned when `hash` is
    /// not a usable Argon2 PHC string: unparsable, another algorithm,
    /// out-of-range parameters, or missing salt or digest.
    pub fn verify(&self, pw: &str, hash: &str) -> Result<bool, AuthError> {
        let hash = PasswordHashString::new(hash)?;
        let hash = hash.password_hash();
        // A PHC string without salt or digest would otherwise read as a mismatch.
        if hash.salt.is_none() || hash.hash.is_none() {
            return Err(AuthError::PasswordHash(password_hash::Error::PhcStringField));
        }

        match self.argon2.verify_password(pw.as_bytes(), &hash) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(err) => Err(AuthError::PasswordHash(err)),
        }
    }
}

impl std::fmt::Debug for SecretHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretHasher").finish_non_exhaustive()
    }
}
