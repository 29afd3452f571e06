//! Admin handlers for the site-content singleton

use std::sync::Arc;

use vitrine_cms::site::{BannerInput, ClientLogoInput, SiteContentPatch};
use vitrine_core::Result;

use crate::cache::CONTENT_VIEW;
use crate::handlers::{ReorderRequest, respond_invalidating};
use crate::request::Request;
use crate::response::Response;
use crate::state::AppState;

/// GET /api/admin/site
pub async fn get(state: Arc<AppState>, _req: Request) -> Result<Response> {
	Response::envelope(state.site.get().await)
}

/// POST /api/admin/site
pub async fn update(state: Arc<AppState>, req: Request) -> Result<Response> {
	let result = match req.json::<SiteContentPatch>() {
		Ok(patch) => state.site.update(patch).await,
		Err(err) => Err(err),
	};
	respond_invalidating(&state, &[CONTENT_VIEW], result)
}

/// POST /api/admin/site/banners
pub async fn add_banner(state: Arc<AppState>, req: Request) -> Result<Response> {
	let result = match req.json::<BannerInput>() {
		Ok(input) => state.site.add_banner(input).await,
		Err(err) => Err(err),
	};
	respond_invalidating(&state, &[CONTENT_VIEW], result)
}

/// POST /api/admin/site/banners/reorder
pub async fn reorder_banners(state: Arc<AppState>, req: Request) -> Result<Response> {
	let result = match req.json::<ReorderRequest>() {
		Ok(body) => state.site.reorder_banners(body.from, body.to).await,
		Err(err) => Err(err),
	};
	respond_invalidating(&state, &[CONTENT_VIEW], result)
}

/// POST /api/admin/site/banners/{id}
pub async fn update_banner(state: Arc<AppState>, req: Request) -> Result<Response> {
	let result = match (req.param("id"), req.json::<BannerInput>()) {
		(Ok(id), Ok(input)) => state.site.update_banner(id, input).await,
		(Err(err), _) | (_, Err(err)) => Err(err),
	};
	respond_invalidating(&state, &[CONTENT_VIEW], result)
}

/// DELETE /api/admin/site/banners/{id}
pub async fn delete_banner(state: Arc<AppState>, req: Request) -> Result<Response> {
	let result = match req.param("id") {
		Ok(id) => state.site.delete_banner(id).await,
		Err(err) => Err(err),
	};
	respond_invalidating(&state, &[CONTENT_VIEW], result)
}

/// POST /api/admin/site/logos
pub async fn add_client_logo(state: Arc<AppState>, req: Request) -> Result<Response> {
	let result = match req.json::<ClientLogoInput>() {
		Ok(input) => state.site.add_client_logo(input).await,
		Err(err) => Err(err),
	};
	respond_invalidating(&state, &[CONTENT_VIEW], result)
}

/// POST /api/admin/site/logos/reorder
pub async fn reorder_client_logos(state: Arc<AppState>, req: Request) -> Result<Response> {
	let result = match req.json::<ReorderRequest>() {
		Ok(body) => state.site.reorder_client_logos(body.from, body.to).await,
		Err(err) => Err(err),
	};
	respond_invalidating(&state, &[CONTENT_VIEW], result)
}

/// POST /api/admin/site/logos/{id}
pub async fn update_client_logo(state: Arc<AppState>, req: Request) -> Result<Response> {
	let result = match (req.param("id"), req.json::<ClientLogoInput>()) {
		(Ok(id), Ok(input)) => state.site.update_client_logo(id, input).await,
		(Err(err), _) | (_, Err(err)) => Err(err),
	};
	respond_invalidating(&state, &[CONTENT_VIEW], result)
}

/// DELETE /api/admin/site/logos/{id}
pub async fn delete_client_logo(state: Arc<AppState>, req: Request) -> Result<Response> {
	let result = match req.param("id") {
		Ok(id) => state.site.delete_client_logo(id).await,
		Err(err) => Err(err),
	};
	respond_invalidating(&state, &[CONTENT_VIEW], result)
}
