//! Admin handlers for the product catalogue

use std::sync::Arc;

use vitrine_cms::products::{ProductInput, ProductPatch};
use vitrine_core::Result;

use crate::cache::CONTENT_VIEW;
use crate::handlers::respond_invalidating;
use crate::request::Request;
use crate::response::Response;
use crate::state::AppState;

/// GET /api/admin/products
pub async fn list(state: Arc<AppState>, _req: Request) -> Result<Response> {
	Response::envelope(state.products.list().await)
}

/// GET /api/admin/products/{id}
pub async fn get(state: Arc<AppState>, req: Request) -> Result<Response> {
	let result = match req.param("id") {
		Ok(id) => state.products.get(id).await,
		Err(err) => Err(err),
	};
	Response::envelope(result)
}

/// POST /api/admin/products
pub async fn create(state: Arc<AppState>, req: Request) -> Result<Response> {
	let result = match req.json::<ProductInput>() {
		Ok(input) => state.products.create(input).await,
		Err(err) => Err(err),
	};
	respond_invalidating(&state, &[CONTENT_VIEW], result)
}

/// POST /api/admin/products/{id}
pub async fn update(state: Arc<AppState>, req: Request) -> Result<Response> {
	let result = match (req.param("id"), req.json::<ProductPatch>()) {
		(Ok(id), Ok(patch)) => state.products.update(id, patch).await,
		(Err(err), _) | (_, Err(err)) => Err(err),
	};
	respond_invalidating(&state, &[CONTENT_VIEW], result)
}

/// DELETE /api/admin/products/{id}
pub async fn delete(state: Arc<AppState>, req: Request) -> Result<Response> {
	let result = match req.param("id") {
		Ok(id) => state.products.delete(id).await,
		Err(err) => Err(err),
	};
	respond_invalidating(&state, &[CONTENT_VIEW], result)
}
