//! Request logging

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Instant;

use vitrine_core::Result;

use crate::handler::{Handler, Middleware};
use crate::request::Request;
use crate::response::Response;

/// Logs method, path, status, and duration for every request
#[derive(Default)]
pub struct LoggingMiddleware;

impl LoggingMiddleware {
	pub fn new() -> Self {
		Self
	}
}

#[async_trait]
impl Middleware for LoggingMiddleware {
	async fn process(&self, request: Request, next: Arc<dyn Handler>) -> Result<Response> {
		let start = Instant::now();
		let method = request.method.clone();
		let path = request.path.clone();

		let result = next.handle(request).await;
		let elapsed_ms = start.elapsed().as_millis() as u64;

		match &result {
			Ok(response) => {
				tracing::info!(
					%method,
					%path,
					status = response.status.as_u16(),
					elapsed_ms,
					"request"
				);
			}
			Err(err) => {
				tracing::error!(%method, %path, error = %err, elapsed_ms, "request failed");
			}
		}

		result
	}
}
