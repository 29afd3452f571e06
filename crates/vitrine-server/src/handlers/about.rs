//! Admin handlers for the about-us singleton

use std::sync::Arc;

use vitrine_cms::about::{AboutSectionInput, AboutUsPatch, LeaderInput};
use vitrine_core::Result;

use crate::cache::CONTENT_VIEW;
use crate::handlers::{ReorderRequest, respond_invalidating};
use crate::request::Request;
use crate::response::Response;
use crate::state::AppState;

/// GET /api/admin/about
pub async fn get(state: Arc<AppState>, _req: Request) -> Result<Response> {
	Response::envelope(state.about.get().await)
}

/// POST /api/admin/about
pub async fn update(state: Arc<AppState>, req: Request) -> Result<Response> {
	let result = match req.json::<AboutUsPatch>() {
		Ok(patch) => state.about.update(patch).await,
		Err(err) => Err(err),
	};
	respond_invalidating(&state, &[CONTENT_VIEW], result)
}

/// POST /api/admin/about/sections
pub async fn add_section(state: Arc<AppState>, req: Request) -> Result<Response> {
	let result = match req.json::<AboutSectionInput>() {
		Ok(input) => state.about.add_section(input).await,
		Err(err) => Err(err),
	};
	respond_invalidating(&state, &[CONTENT_VIEW], result)
}

/// POST /api/admin/about/sections/reorder
pub async fn reorder_sections(state: Arc<AppState>, req: Request) -> Result<Response> {
	let result = match req.json::<ReorderRequest>() {
		Ok(body) => state.about.reorder_sections(body.from, body.to).await,
		Err(err) => Err(err),
	};
	respond_invalidating(&state, &[CONTENT_VIEW], result)
}

/// POST /api/admin/about/sections/{id}
pub async fn update_section(state: Arc<AppState>, req: Request) -> Result<Response> {
	let result = match (req.param("id"), req.json::<AboutSectionInput>()) {
		(Ok(id), Ok(input)) => state.about.update_section(id, input).await,
		(Err(err), _) | (_, Err(err)) => Err(err),
	};
	respond_invalidating(&state, &[CONTENT_VIEW], result)
}

/// DELETE /api/admin/about/sections/{id}
pub async fn delete_section(state: Arc<AppState>, req: Request) -> Result<Response> {
	let result = match req.param("id") {
		Ok(id) => state.about.delete_section(id).await,
		Err(err) => Err(err),
	};
	respond_invalidating(&state, &[CONTENT_VIEW], result)
}

/// POST /api/admin/about/leaders
pub async fn add_leader(state: Arc<AppState>, req: Request) -> Result<Response> {
	let result = match req.json::<LeaderInput>() {
		Ok(input) => state.about.add_leader(input).await,
		Err(err) => Err(err),
	};
	respond_invalidating(&state, &[CONTENT_VIEW], result)
}

/// POST /api/admin/about/leaders/reorder
pub async fn reorder_leaders(state: Arc<AppState>, req: Request) -> Result<Response> {
	let result = match req.json::<ReorderRequest>() {
		Ok(body) => state.about.reorder_leaders(body.from, body.to).await,
		Err(err) => Err(err),
	};
	respond_invalidating(&state, &[CONTENT_VIEW], result)
}

/// POST /api/admin/about/leaders/{id}
pub async fn update_leader(state: Arc<AppState>, req: Request) -> Result<Response> {
	let result = match (req.param("id"), req.json::<LeaderInput>()) {
		(Ok(id), Ok(input)) => state.about.update_leader(id, input).await,
		(Err(err), _) | (_, Err(err)) => Err(err),
	};
	respond_invalidating(&state, &[CONTENT_VIEW], result)
}

/// DELETE /api/admin/about/leaders/{id}
pub async fn delete_leader(state: Arc<AppState>, req: Request) -> Result<Response> {
	let result = match req.param("id") {
		Ok(id) => state.about.delete_leader(id).await,
		Err(err) => Err(err),
	};
	respond_invalidating(&state, &[CONTENT_VIEW], result)
}
