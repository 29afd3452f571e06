//! HTTP request representation

use bytes::Bytes;
use http::{HeaderMap, Method};
use serde::de::DeserializeOwned;
use std::collections::HashMap;

use vitrine_auth::SessionUser;
use vitrine_core::{Error, Result};

/// Owned request passed through middleware and handlers
#[derive(Debug, Clone)]
pub struct Request {
	pub method: Method,
	/// Path component only; the query string is not used by this API
	pub path: String,
	pub headers: HeaderMap,
	/// Parameters extracted from the matched route template
	pub path_params: HashMap<String, String>,
	pub body: Bytes,
	/// Verified session identity, populated by the session middleware
	pub user: Option<SessionUser>,
}

impl Request {
	/// Create a request with no route params and no identity.
	pub fn new(method: Method, path: impl Into<String>, headers: HeaderMap, body: Bytes) -> Self {
		Self {
			method,
			path: path.into(),
			headers,
			path_params: HashMap::new(),
			body,
			user: None,
		}
	}

	/// Shorthand used by tests and internal callers.
	pub fn get(path: impl Into<String>) -> Self {
		Self::new(Method::GET, path, HeaderMap::new(), Bytes::new())
	}

	/// Shorthand for a JSON POST.
	pub fn post_json(path: impl Into<String>, body: &impl serde::Serialize) -> Self {
		let bytes = serde_json::to_vec(body).unwrap_or_default();
		Self::new(Method::POST, path, HeaderMap::new(), Bytes::from(bytes))
	}

	/// A path parameter extracted by the router.
	pub fn param(&self, name: &str) -> Result<&str> {
		self.path_params
			.get(name)
			.map(String::as_str)
			.ok_or_else(|| Error::Validation(format!("missing path parameter: {}", name)))
	}

	/// Parse the body as JSON. Malformed bodies are validation errors, not
	/// server failures.
	pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
		serde_json::from_slice(&self.body)
			.map_err(|e| Error::Validation(format!("invalid request body: {}", e)))
	}

	/// Read one cookie from the `Cookie` header.
	pub fn cookie(&self, name: &str) -> Option<String> {
		let header = self.headers.get(http::header::COOKIE)?.to_str().ok()?;

		header.split(';').find_map(|pair| {
			let (key, value) = pair.trim().split_once('=')?;
			(key == name).then(|| value.to_string())
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use http::header::COOKIE;

	#[test]
	fn test_json_body() {
		#[derive(serde::Deserialize)]
		struct Body {
			name: String,
		}

		let req = Request::post_json("/x", &serde_json::json!({"name": "a"}));
		let body: Body = req.json().unwrap();
		assert_eq!(body.name, "a");

		let bad = Request::new(Method::POST, "/x", HeaderMap::new(), Bytes::from("{"));
		assert!(matches!(bad.json::<Body>(), Err(Error::Validation(_))));
	}

	#[test]
	fn test_cookie_parsing() {
		let mut headers = HeaderMap::new();
		headers.insert(COOKIE, "a=1; vitrine_session=tok.sig; b=2".parse().unwrap());
		let req = Request::new(Method::GET, "/", headers, Bytes::new());

		assert_eq!(req.cookie("vitrine_session").unwrap(), "tok.sig");
		assert_eq!(req.cookie("a").unwrap(), "1");
		assert!(req.cookie("missing").is_none());
	}
}
