//! Password hashing collaborator.
//!
//! # Responsibility
//! - Turn plaintext secrets into salted digests before persistence.
//!
//! # Invariants
//! - A digest never equals or contains the plaintext secret.
//! - Two digests of the same secret differ (fresh salt per call).

use argon2::password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString};
use argon2::Argon2;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Digest could not be produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordHashError(String);

impl Display for PasswordHashError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "password hashing failed: {}", self.0)
    }
}

impl Error for PasswordHashError {}

/// Hashing seam injected into bootstrap; callers never inspect the format.
pub trait PasswordHasher {
    fn hash(&self, secret: &str) -> Result<String, PasswordHashError>;
    fn verify(&self, secret: &str, digest: &str) -> bool;
}

/// Default hasher producing Argon2id PHC strings (`$argon2id$v=19$…`).
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Hasher;

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, secret: &str) -> Result<String, PasswordHashError> {
        let salt = SaltString::encode_b64(Uuid::new_v4().as_bytes())
            .map_err(|err| PasswordHashError(err.to_string()))?;
        let digest = Argon2::default()
            .hash_password(secret.as_bytes(), &salt)
            .map_err(|err| PasswordHashError(err.to_string()))?;
        Ok(digest.to_string())
    }

    fn verify(&self, secret: &str, digest: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(digest) else {
            return false;
        };
        Argon2::default()
            .verify_password(secret.as_bytes(), &parsed)
            .is_ok()
    }
}
