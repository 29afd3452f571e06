//! HTTP response representation

use bytes::Bytes;
use http::{HeaderMap, StatusCode, header};
use serde::Serialize;

use vitrine_core::{ActionOutcome, Result};

/// Owned response produced by handlers
#[derive(Debug)]
pub struct Response {
	pub status: StatusCode,
	pub headers: HeaderMap,
	pub body: Bytes,
}

impl Response {
	/// Create a response with the given status and an empty body.
	pub fn new(status: StatusCode) -> Self {
		Self {
			status,
			headers: HeaderMap::new(),
			body: Bytes::new(),
		}
	}

	/// 200 OK.
	pub fn ok() -> Self {
		Self::new(StatusCode::OK)
	}

	/// Set a header, ignoring values that are not legal header text.
	pub fn with_header(mut self, name: header::HeaderName, value: &str) -> Self {
		if let Ok(value) = value.parse() {
			self.headers.insert(name, value);
		}
		self
	}

	/// Set the body.
	pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}

	/// JSON response with the given status.
	pub fn json(status: StatusCode, value: &impl Serialize) -> Result<Self> {
		let body = serde_json::to_vec(value)?;
		Ok(Self::new(status)
			.with_header(header::CONTENT_TYPE, "application/json")
			.with_body(body))
	}

	/// 200 response carrying an action envelope built from `result`.
	///
	/// The admin RPC contract reports failure in-band: the status stays
	/// 200 and the envelope's `success` flag carries the verdict.
	pub fn envelope<T: Serialize>(result: Result<T>) -> Result<Self> {
		Self::json(StatusCode::OK, &ActionOutcome::from(result))
	}

	/// Failure envelope with an explicit status, for the public GET routes.
	pub fn failure(status: StatusCode, message: &str) -> Result<Self> {
		Self::json(status, &ActionOutcome::<()>::err(message))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_envelope_success() {
		let response = Response::envelope(Ok(serde_json::json!({"x": 1}))).unwrap();
		assert_eq!(response.status, StatusCode::OK);

		let value: serde_json::Value = serde_json::from_slice(&response.body).unwrap();
		assert_eq!(value["success"], true);
		assert_eq!(value["data"]["x"], 1);
	}

	#[test]
	fn test_envelope_failure_is_still_200() {
		let result: Result<()> = Err(vitrine_core::Error::not_found("Page"));
		let response = Response::envelope(result).unwrap();
		assert_eq!(response.status, StatusCode::OK);

		let value: serde_json::Value = serde_json::from_slice(&response.body).unwrap();
		assert_eq!(value["success"], false);
		assert_eq!(value["error"], "Page not found");
	}

	#[test]
	fn test_failure_with_status() {
		let response = Response::failure(StatusCode::INTERNAL_SERVER_ERROR, "store down").unwrap();
		assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
	}
}
