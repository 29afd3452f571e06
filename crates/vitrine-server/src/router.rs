//! Method + path-template router
//!
//! Templates are literal segments with `{param}` placeholders
//! (`/api/pages/{slug}`). Routes are tried in registration order, so
//! literal routes that would otherwise be shadowed by a placeholder must be
//! registered first. Unknown paths answer 404, known paths with the wrong
//! method 405, both as failure envelopes.

use async_trait::async_trait;
use http::{Method, StatusCode};
use std::collections::HashMap;
use std::sync::Arc;

use vitrine_core::Result;

use crate::handler::Handler;
use crate::request::Request;
use crate::response::Response;

enum Segment {
	Literal(String),
	Param(String),
}

struct Route {
	method: Method,
	segments: Vec<Segment>,
	handler: Arc<dyn Handler>,
}

fn parse_template(template: &str) -> Vec<Segment> {
	template
		.trim_matches('/')
		.split('/')
		.filter(|segment| !segment.is_empty())
		.map(|segment| {
			if let Some(name) = segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
				Segment::Param(name.to_string())
			} else {
				Segment::Literal(segment.to_string())
			}
		})
		.collect()
}

fn match_segments(segments: &[Segment], path: &str) -> Option<HashMap<String, String>> {
	let parts: Vec<&str> = path
		.trim_matches('/')
		.split('/')
		.filter(|part| !part.is_empty())
		.collect();

	if parts.len() != segments.len() {
		return None;
	}

	let mut params = HashMap::new();
	for (segment, part) in segments.iter().zip(parts) {
		match segment {
			Segment::Literal(literal) => {
				if literal != part {
					return None;
				}
			}
			Segment::Param(name) => {
				params.insert(name.clone(), part.to_string());
			}
		}
	}
	Some(params)
}

/// Route table
#[derive(Default)]
pub struct Router {
	routes: Vec<Route>,
}

impl Router {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register a handler for `method` + `template`.
	pub fn add(&mut self, method: Method, template: &str, handler: Arc<dyn Handler>) {
		self.routes.push(Route {
			method,
			segments: parse_template(template),
			handler,
		});
	}

	fn resolve(&self, method: &Method, path: &str) -> Resolution {
		let mut path_matched = false;

		for route in &self.routes {
			if let Some(params) = match_segments(&route.segments, path) {
				if &route.method == method {
					return Resolution::Found(route.handler.clone(), params);
				}
				path_matched = true;
			}
		}

		if path_matched {
			Resolution::MethodNotAllowed
		} else {
			Resolution::NotFound
		}
	}
}

enum Resolution {
	Found(Arc<dyn Handler>, HashMap<String, String>),
	MethodNotAllowed,
	NotFound,
}

#[async_trait]
impl Handler for Router {
	async fn handle(&self, mut request: Request) -> Result<Response> {
		match self.resolve(&request.method, &request.path) {
			Resolution::Found(handler, params) => {
				request.path_params = params;
				handler.handle(request).await
			}
			Resolution::MethodNotAllowed => {
				Response::failure(StatusCode::METHOD_NOT_ALLOWED, "method not allowed")
			}
			Resolution::NotFound => Response::failure(StatusCode::NOT_FOUND, "not found"),
		}
	}
}
