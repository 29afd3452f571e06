//! Public homepage content endpoint

use http::StatusCode;
use serde_json::json;
use std::sync::Arc;

use vitrine_cms::showcase::{
	ProjectsSection, ServicesSection, StatsSection, TestimonialsSection,
};
use vitrine_core::{ActionOutcome, Result};

use crate::cache::CONTENT_VIEW;
use crate::request::Request;
use crate::response::Response;
use crate::state::AppState;

/// GET /api/content
///
/// Everything the public homepage needs in one payload. Cached until an
/// admin mutation invalidates it; store failures surface as a plain 500
/// with a failure envelope.
pub async fn get_content(state: Arc<AppState>, _req: Request) -> Result<Response> {
	if let Some(cached) = state.cache.get(CONTENT_VIEW) {
		return Response::json(StatusCode::OK, &ActionOutcome::ok(cached));
	}

	match assemble(&state).await {
		Ok(data) => {
			state.cache.put(CONTENT_VIEW, data.clone());
			Response::json(StatusCode::OK, &ActionOutcome::ok(data))
		}
		Err(err) => {
			tracing::error!(error = %err, "failed to assemble homepage content");
			Response::failure(StatusCode::INTERNAL_SERVER_ERROR, "failed to load site content")
		}
	}
}

async fn assemble(state: &AppState) -> Result<serde_json::Value> {
	let site = state.site.get().await?;
	let projects: ProjectsSection = state.sections.get().await?;
	let services: ServicesSection = state.sections.get().await?;
	let testimonials: TestimonialsSection = state.sections.get().await?;
	let stats: StatsSection = state.sections.get().await?;
	let products = state.products.list().await?;

	Ok(json!({
		"site": site,
		"projects": projects,
		"services": services,
		"testimonials": testimonials,
		"stats": stats,
		"products": products,
	}))
}
