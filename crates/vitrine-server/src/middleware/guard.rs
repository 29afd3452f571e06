//! Admin route guard

use async_trait::async_trait;
use http::StatusCode;
use std::sync::Arc;

use vitrine_core::Result;

use crate::handler::{Handler, Middleware};
use crate::request::Request;
use crate::response::Response;

/// Short-circuits unauthenticated requests to the admin API with a 401
/// failure envelope.
#[derive(Default)]
pub struct AdminGuard;

impl AdminGuard {
	pub fn new() -> Self {
		Self
	}
}

#[async_trait]
impl Middleware for AdminGuard {
	async fn process(&self, request: Request, next: Arc<dyn Handler>) -> Result<Response> {
		if request.path.starts_with("/api/admin") && request.user.is_none() {
			return Response::failure(StatusCode::UNAUTHORIZED, "authentication required");
		}

		next.handle(request).await
	}
}
