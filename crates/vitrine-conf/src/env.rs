//! Environment variable handling
//!
//! A small prefix-aware reader with typed accessors. Parse failures carry
//! the variable name, never the value.

use std::env;
use thiserror::Error;

/// Errors from environment lookups
#[derive(Error, Debug)]
pub enum EnvError {
	/// Variable not set and no default supplied
	#[error("Missing environment variable: {0}")]
	MissingVariable(String),

	/// Variable set but not parseable as the requested type
	#[error("Failed to parse environment variable {key}: {reason}")]
	ParseError { key: String, reason: String },
}

/// Environment variable reader with prefix support
#[derive(Debug, Clone, Default)]
pub struct Env {
	/// Optional prefix for environment variables (e.g., "VITRINE_")
	pub prefix: Option<String>,
}

impl Env {
	/// Create a reader with no prefix.
	pub fn new() -> Self {
		Self { prefix: None }
	}

	/// Set a prefix for all lookups.
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = Some(prefix.into());
		self
	}

	fn full_key(&self, key: &str) -> String {
		match &self.prefix {
			Some(prefix) => format!("{}{}", prefix, key),
			None => key.to_string(),
		}
	}

	/// Read a string value.
	pub fn str(&self, key: &str) -> Result<String, EnvError> {
		let full_key = self.full_key(key);
		env::var(&full_key).map_err(|_| EnvError::MissingVariable(full_key))
	}

	/// Read a string value, falling back to a default when unset.
	pub fn str_with_default(&self, key: &str, default: &str) -> String {
		env::var(self.full_key(key)).unwrap_or_else(|_| default.to_string())
	}

	/// Read an integer value, falling back to a default when unset.
	pub fn u64_with_default(&self, key: &str, default: u64) -> Result<u64, EnvError> {
		let full_key = self.full_key(key);
		match env::var(&full_key) {
			Ok(val) => val.parse::<u64>().map_err(|e| EnvError::ParseError {
				key: full_key,
				reason: e.to_string(),
			}),
			Err(_) => Ok(default),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serial_test::serial;

	#[test]
	#[serial]
	fn test_prefixed_lookup() {
		unsafe { env::set_var("VITRINE_TEST_KEY", "hello") };
		let reader = Env::new().with_prefix("VITRINE_");
		assert_eq!(reader.str("TEST_KEY").unwrap(), "hello");
		unsafe { env::remove_var("VITRINE_TEST_KEY") };
	}

	#[test]
	#[serial]
	fn test_missing_variable() {
		let reader = Env::new().with_prefix("VITRINE_");
		let err = reader.str("DEFINITELY_UNSET").unwrap_err();
		assert!(matches!(err, EnvError::MissingVariable(key) if key == "VITRINE_DEFINITELY_UNSET"));
	}

	#[test]
	#[serial]
	fn test_u64_default_and_parse_error() {
		let reader = Env::new().with_prefix("VITRINE_");
		assert_eq!(reader.u64_with_default("UNSET_TTL", 3600).unwrap(), 3600);

		unsafe { env::set_var("VITRINE_BAD_TTL", "soon") };
		let err = reader.u64_with_default("BAD_TTL", 3600).unwrap_err();
		assert!(matches!(err, EnvError::ParseError { .. }));
		unsafe { env::remove_var("VITRINE_BAD_TTL") };
	}
}
