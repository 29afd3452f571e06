//! Discriminated action-result envelope
//!
//! Admin operations answer with `{"success": true, "data": ...}` or
//! `{"success": false, "error": "..."}`. The envelope is built from a
//! `Result` so no code path can produce a success body carrying an error
//! message or vice versa.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::error::Error;

/// Result envelope for admin actions
///
/// # Examples
///
/// ```
/// use vitrine_core::ActionOutcome;
///
/// let ok = ActionOutcome::ok(vec![1, 2, 3]);
/// let json = serde_json::to_value(&ok).unwrap();
/// assert_eq!(json["success"], true);
/// assert_eq!(json["data"][0], 1);
///
/// let err = ActionOutcome::<()>::err("Product not found");
/// let json = serde_json::to_value(&err).unwrap();
/// assert_eq!(json["success"], false);
/// assert_eq!(json["error"], "Product not found");
/// ```
#[derive(Debug, Clone)]
pub enum ActionOutcome<T> {
	/// Operation succeeded with a payload
	Success { data: T },
	/// Operation failed with a user-facing message
	Failure { error: String },
}

impl<T> ActionOutcome<T> {
	/// Wrap a success payload.
	pub fn ok(data: T) -> Self {
		ActionOutcome::Success { data }
	}

	/// Wrap a failure message.
	pub fn err(error: impl Into<String>) -> Self {
		ActionOutcome::Failure {
			error: error.into(),
		}
	}

	/// Whether this is the success arm.
	pub fn is_success(&self) -> bool {
		matches!(self, ActionOutcome::Success { .. })
	}
}

impl<T> From<Result<T, Error>> for ActionOutcome<T> {
	fn from(result: Result<T, Error>) -> Self {
		match result {
			Ok(data) => ActionOutcome::Success { data },
			Err(err) => ActionOutcome::Failure {
				error: err.to_string(),
			},
		}
	}
}

impl<T: Serialize> Serialize for ActionOutcome<T> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			ActionOutcome::Success { data } => {
				let mut s = serializer.serialize_struct("ActionOutcome", 2)?;
				s.serialize_field("success", &true)?;
				s.serialize_field("data", data)?;
				s.end()
			}
			ActionOutcome::Failure { error } => {
				let mut s = serializer.serialize_struct("ActionOutcome", 2)?;
				s.serialize_field("success", &false)?;
				s.serialize_field("error", error)?;
				s.end()
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_success_shape() {
		let outcome = ActionOutcome::ok(serde_json::json!({"name": "Widget"}));
		let value = serde_json::to_value(&outcome).unwrap();

		assert_eq!(value["success"], true);
		assert_eq!(value["data"]["name"], "Widget");
		assert!(value.get("error").is_none());
	}

	#[test]
	fn test_failure_shape() {
		let outcome: ActionOutcome<()> = Err(Error::not_found("Banner")).into();
		let value = serde_json::to_value(&outcome).unwrap();

		assert_eq!(value["success"], false);
		assert_eq!(value["error"], "Banner not found");
		assert!(value.get("data").is_none());
	}

	#[test]
	fn test_from_ok_result() {
		let outcome: ActionOutcome<u32> = Ok::<_, Error>(7).into();
		assert!(outcome.is_success());
	}
}
