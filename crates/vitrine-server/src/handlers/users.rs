//! Admin handlers for account management

use serde::Deserialize;
use std::sync::Arc;

use vitrine_core::Result;

use crate::request::Request;
use crate::response::Response;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
struct CreateUserRequest {
	email: String,
	password: String,
}

/// POST /api/admin/users
pub async fn create(state: Arc<AppState>, req: Request) -> Result<Response> {
	let result = match req.json::<CreateUserRequest>() {
		Ok(body) => state.users.create(&body.email, &body.password).await,
		Err(err) => Err(err),
	};
	Response::envelope(result)
}

/// GET /api/admin/users
pub async fn list(state: Arc<AppState>, _req: Request) -> Result<Response> {
	Response::envelope(state.users.list().await)
}

#[derive(Debug, Deserialize)]
struct ChangePasswordRequest {
	password: String,
}

/// POST /api/admin/users/{id}/password
pub async fn change_password(state: Arc<AppState>, req: Request) -> Result<Response> {
	let result = match (req.param("id"), req.json::<ChangePasswordRequest>()) {
		(Ok(id), Ok(body)) => state.users.change_password(id, &body.password).await,
		(Err(err), _) | (_, Err(err)) => Err(err),
	};
	Response::envelope(result)
}

/// DELETE /api/admin/users/{id}
pub async fn delete(state: Arc<AppState>, req: Request) -> Result<Response> {
	let result = match req.param("id") {
		Ok(id) => state.users.delete(id).await,
		Err(err) => Err(err),
	};
	Response::envelope(result)
}
