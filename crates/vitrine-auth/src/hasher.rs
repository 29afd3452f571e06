//! Password hashing
//!
//! Argon2id with a random per-password salt. Verification goes through the
//! algorithm's own comparator, so timing does not leak how close a guess
//! was.

use vitrine_core::{Error, Result};

/// Password hasher trait
///
/// # Examples
///
/// ```
/// use vitrine_auth::{Argon2Hasher, PasswordHasher};
///
/// let hasher = Argon2Hasher::new();
/// let hash = hasher.hash("my_secure_password").unwrap();
///
/// assert!(hasher.verify("my_secure_password", &hash).unwrap());
/// assert!(!hasher.verify("wrong_password", &hash).unwrap());
/// ```
pub trait PasswordHasher: Send + Sync {
	/// Hash a plaintext password.
	fn hash(&self, password: &str) -> Result<String>;

	/// Verify a plaintext password against a stored hash.
	///
	/// `Ok(false)` means the password does not match; `Err` means the hash
	/// itself is malformed.
	fn verify(&self, password: &str, hash: &str) -> Result<bool>;
}

/// Argon2id password hasher
///
/// The parameters are the crate defaults, which follow current OWASP
/// guidance for interactive logins.
#[derive(Debug, Default, Clone, Copy)]
pub struct Argon2Hasher;

impl Argon2Hasher {
	/// Create a new hasher.
	pub fn new() -> Self {
		Self
	}
}

impl PasswordHasher for Argon2Hasher {
	fn hash(&self, password: &str) -> Result<String> {
		use argon2::Argon2;
		use argon2::password_hash::{PasswordHasher as _, SaltString};
		use rand::RngCore;

		let mut salt_bytes = [0u8; 16];
		rand::rngs::OsRng.fill_bytes(&mut salt_bytes);

		let salt = SaltString::encode_b64(&salt_bytes)
			.map_err(|e| Error::Authentication(e.to_string()))?;

		Argon2::default()
			.hash_password(password.as_bytes(), &salt)
			.map(|hash| hash.to_string())
			.map_err(|e| Error::Authentication(e.to_string()))
	}

	fn verify(&self, password: &str, hash: &str) -> Result<bool> {
		use argon2::Argon2;
		use argon2::password_hash::{PasswordHash, PasswordVerifier};

		let parsed_hash =
			PasswordHash::new(hash).map_err(|e| Error::Authentication(e.to_string()))?;

		Ok(Argon2::default()
			.verify_password(password.as_bytes(), &parsed_hash)
			.is_ok())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_hash_and_verify() {
		let hasher = Argon2Hasher::new();
		let hash = hasher.hash("correct horse battery staple").unwrap();

		assert!(hasher.verify("correct horse battery staple", &hash).unwrap());
		assert!(!hasher.verify("Tr0ub4dor&3", &hash).unwrap());
	}

	#[test]
	fn test_hashes_are_salted() {
		let hasher = Argon2Hasher::new();
		let first = hasher.hash("same password").unwrap();
		let second = hasher.hash("same password").unwrap();
		assert_ne!(first, second);
	}

	#[test]
	fn test_malformed_hash_is_an_error() {
		let hasher = Argon2Hasher::new();
		assert!(hasher.verify("anything", "plaintext-not-a-hash").is_err());
	}
}
