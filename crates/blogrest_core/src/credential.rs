//! One-way credential hashing.
//!
//! # Responsibility
//! - Turn plaintext passwords into salted Argon2id PHC strings.
//! - Verify plaintext candidates against stored digests.
//!
//! # Invariants
//! - Plaintext never leaves this module except as the caller's own input.
//! - Error values never embed the plaintext.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failure inside the hashing primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashError {
    /// The primitive could not produce a digest.
    HashingFailed(String),
    /// The stored digest is not a parseable PHC string.
    MalformedDigest(String),
}

impl Display for HashError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HashingFailed(reason) => write!(f, "password hashing failed: {reason}"),
            Self::MalformedDigest(reason) => write!(f, "malformed password digest: {reason}"),
        }
    }
}

impl Error for HashError {}

/// Hashing contract consumed by the user service.
pub trait CredentialHasher: Send + Sync {
    /// Returns an opaque, salted digest for `plaintext`.
    fn hash(&self, plaintext: &str) -> Result<String, HashError>;

    /// Returns whether `plaintext` matches `digest`.
    ///
    /// A mismatch is `Ok(false)`; only an unreadable digest is an error.
    fn verify(&self, plaintext: &str, digest: &str) -> Result<bool, HashError>;
}

/// Argon2id hasher with the crate's default cost parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    pub fn new() -> Self {
        Self
    }
}

impl CredentialHasher for Argon2Hasher {
    fn hash(&self, plaintext: &str) -> Result<String, HashError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(plaintext.as_bytes(), &salt)
            .map(|digest| digest.to_string())
            .map_err(|err| HashError::HashingFailed(err.to_string()))
    }

    fn verify(&self, plaintext: &str, digest: &str) -> Result<bool, HashError> {
        let parsed =
            PasswordHash::new(digest).map_err(|err| HashError::MalformedDigest(err.to_string()))?;
        Ok(Argon2::default()
            .verify_password(plaintext.as_bytes(), &parsed)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::{Argon2Hasher, CredentialHasher, HashError};

    #[test]
    fn digest_verifies_only_the_original_plaintext() {
        let hasher = Argon2Hasher::new();
        let digest = hasher.hash("pw").unwrap();

        assert_ne!(digest, "pw");
        assert!(digest.starts_with("$argon2id$"));
        assert!(hasher.verify("pw", &digest).unwrap());
        assert!(!hasher.verify("pw2", &digest).unwrap());
        assert!(!hasher.verify("", &digest).unwrap());
    }

    #[test]
    fn hashing_is_salted() {
        let hasher = Argon2Hasher::new();
        let first = hasher.hash("same").unwrap();
        let second = hasher.hash("same").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn malformed_digest_is_an_error() {
        let err = Argon2Hasher::new().verify("pw", "not-a-phc-string").unwrap_err();
        assert!(matches!(err, HashError::MalformedDigest(_)));
    }
}
