//! Login and logout

use http::{StatusCode, header};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use vitrine_auth::SessionCookie;
use vitrine_core::{ActionOutcome, Result};

use crate::request::Request;
use crate::response::Response;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
struct LoginRequest {
	email: String,
	password: String,
}

/// POST /api/auth/login
///
/// On success the response installs the signed session cookie. Bad
/// credentials answer 401 without revealing whether the email exists.
pub async fn login(state: Arc<AppState>, req: Request) -> Result<Response> {
	let body: LoginRequest = match req.json() {
		Ok(body) => body,
		Err(err) => return Response::envelope::<()>(Err(err)),
	};

	match state.users.authenticate(&body.email, &body.password).await {
		Ok(Some(user)) => {
			let token = state.signer.issue(user.clone())?;
			let cookie = SessionCookie::set(&token, state.session_ttl_secs);

			Ok(Response::json(
				StatusCode::OK,
				&ActionOutcome::ok(json!({ "user": user })),
			)?
			.with_header(header::SET_COOKIE, &cookie))
		}
		Ok(None) => Response::failure(StatusCode::UNAUTHORIZED, "invalid email or password"),
		Err(err) => Response::envelope::<()>(Err(err)),
	}
}

/// POST /api/auth/logout
pub async fn logout(_state: Arc<AppState>, _req: Request) -> Result<Response> {
	Ok(Response::envelope(Ok(json!({ "loggedOut": true })))?
		.with_header(header::SET_COOKIE, &SessionCookie::clear()))
}
