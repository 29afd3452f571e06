//! Store error types
//!
//! A unified error type for document-store operations, with conversions
//! from the driver's errors so backend code can use `?` throughout.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Unified error type for store operations
#[derive(Error, Debug)]
pub enum StoreError {
	/// Connection establishment or transport failure
	#[error("Connection error: {0}")]
	Connection(String),

	/// Query/operation execution failure
	#[error("Execution error: {0}")]
	Execution(String),

	/// Document not found
	#[error("Not found: {0}")]
	NotFound(String),

	/// BSON serialization/deserialization failure
	#[error("Serialization error: {0}")]
	Serialization(String),

	/// Operation not valid for the backend or arguments
	#[error("Invalid operation: {0}")]
	InvalidOperation(String),
}

impl From<mongodb::error::Error> for StoreError {
	fn from(err: mongodb::error::Error) -> Self {
		use mongodb::error::ErrorKind;

		match *err.kind {
			ErrorKind::InvalidArgument { .. } => StoreError::InvalidOperation(err.to_string()),
			ErrorKind::Io(_) => StoreError::Connection(err.to_string()),
			_ => StoreError::Execution(err.to_string()),
		}
	}
}

// In bson v3, ser::Error and de::Error are aliases of bson::error::Error.
impl From<bson::error::Error> for StoreError {
	fn from(err: bson::error::Error) -> Self {
		StoreError::Serialization(err.to_string())
	}
}

impl From<StoreError> for vitrine_core::Error {
	fn from(err: StoreError) -> Self {
		match err {
			StoreError::NotFound(msg) => vitrine_core::Error::NotFound(msg),
			StoreError::Serialization(msg) => vitrine_core::Error::Serialization(msg),
			StoreError::Connection(msg) => vitrine_core::Error::Connection(msg),
			StoreError::Execution(msg) | StoreError::InvalidOperation(msg) => {
				vitrine_core::Error::Database(msg)
			}
		}
	}
}
