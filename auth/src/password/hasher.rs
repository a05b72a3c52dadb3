use argon2::password_hash;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as _;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// One-way salted password hashing.
///
/// Digests are Argon2id PHC strings, so the salt and cost parameters travel
/// with the digest and `verify` needs nothing but the stored string.
#[derive(Clone, Default)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hash a plaintext password with a fresh random salt.
    ///
    /// Hashing the same plaintext twice yields two different digests.
    ///
    /// # Errors
    /// * `HashingFailed` - Argon2 rejected the input or parameters
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|digest| digest.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Check a plaintext password against a stored digest.
    ///
    /// The comparison is constant time. A mismatch is `Ok(false)`; only a
    /// digest that cannot be parsed or evaluated is an error.
    ///
    /// # Errors
    /// * `MalformedDigest` - `digest` is not a PHC string
    /// * `VerificationFailed` - Digest parsed but could not be evaluated
    pub fn verify(&self, password: &str, digest: &str) -> Result<bool, PasswordError> {
        let parsed =
            PasswordHash::new(digest).map_err(|e| PasswordError::MalformedDigest(e.to_string()))?;

        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(e) => Err(PasswordError::VerificationFailed(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new();
        let digest = hasher.hash("secret1").expect("Failed to hash password");

        assert!(digest.starts_with("$argon2id$"));
        assert!(hasher.verify("secret1", &digest).expect("Failed to verify"));
        assert!(!hasher.verify("secret2", &digest).expect("Failed to verify"));
        assert!(!hasher.verify("", &digest).expect("Failed to verify"));
    }

    #[test]
    fn test_same_password_yields_different_digests() {
        let hasher = PasswordHasher::new();
        let first = hasher.hash("secret1").unwrap();
        let second = hasher.hash("secret1").unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify("secret1", &first).unwrap());
        assert!(hasher.verify("secret1", &second).unwrap());
    }

    #[test]
    fn test_digest_never_contains_plaintext() {
        let hasher = PasswordHasher::new();
        let digest = hasher.hash("plain-text-password").unwrap();
        assert!(!digest.contains("plain-text-password"));
    }

    #[test]
    fn test_verify_malformed_digest() {
        let hasher = PasswordHasher::new();
        let result = hasher.verify("password", "not-a-phc-string");
        assert!(matches!(result, Err(PasswordError::MalformedDigest(_))));
    }
}
