//! Unified error type for content operations
//!
//! Every service in the workspace reports failures through this taxonomy.
//! Handlers fold these into the action envelope; nothing propagates to the
//! HTTP layer as a panic.

use thiserror::Error;

/// Result type for content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for content operations
#[derive(Error, Debug)]
pub enum Error {
	/// Referenced entity, sub-item, or slug does not exist
	#[error("{0} not found")]
	NotFound(String),

	/// Caller-supplied data failed validation (bad index, bad slug, malformed body)
	#[error("Validation error: {0}")]
	Validation(String),

	/// Uniqueness violation (duplicate email, duplicate slug)
	#[error("Duplicate: {0}")]
	Duplicate(String),

	/// Serialization/deserialization failure
	#[error("Serialization error: {0}")]
	Serialization(String),

	/// Store connectivity failure
	#[error("Connection error: {0}")]
	Connection(String),

	/// Store-side failure (write rejected, query failed)
	#[error("Database error: {0}")]
	Database(String),

	/// Credential or session failure
	#[error("Authentication error: {0}")]
	Authentication(String),

	/// Missing or invalid configuration
	#[error("Configuration error: {0}")]
	Configuration(String),
}

impl Error {
	/// Shorthand for a not-found error naming the missing entity.
	pub fn not_found(what: impl Into<String>) -> Self {
		Error::NotFound(what.into())
	}
}

impl From<serde_json::Error> for Error {
	fn from(err: serde_json::Error) -> Self {
		Error::Serialization(err.to_string())
	}
}
