//! Session extraction
//!
//! Reads the session cookie, verifies the signature, and attaches the
//! identity to the request. Never rejects on its own: routes that require
//! authentication are enforced by [`crate::middleware::AdminGuard`].

use async_trait::async_trait;
use std::sync::Arc;

use vitrine_auth::session::SESSION_COOKIE;
use vitrine_core::Result;

use crate::handler::{Handler, Middleware};
use crate::request::Request;
use crate::response::Response;
use crate::state::AppState;

/// Populates `request.user` from the signed session cookie
pub struct SessionMiddleware {
	state: Arc<AppState>,
}

impl SessionMiddleware {
	pub fn new(state: Arc<AppState>) -> Self {
		Self { state }
	}
}

#[async_trait]
impl Middleware for SessionMiddleware {
	async fn process(&self, mut request: Request, next: Arc<dyn Handler>) -> Result<Response> {
		if let Some(token) = request.cookie(SESSION_COOKIE) {
			match self.state.signer.verify(&token) {
				Ok(claims) => request.user = Some(claims.user),
				Err(err) => {
					// Invalid cookies degrade to anonymous
					tracing::debug!(error = %err, "rejected session cookie");
				}
			}
		}

		next.handle(request).await
	}
}
