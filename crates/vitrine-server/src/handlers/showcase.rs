//! Admin handlers for the showcase sections
//!
//! The `{section}` path parameter names the section (`projects`,
//! `services`, `testimonials`, `stats`); each arm dispatches to the typed
//! generic service.

use std::sync::Arc;

use vitrine_cms::showcase::{
	HeadingPatch, ProjectsSection, ServicesSection, StatsSection, TestimonialsSection,
};
use vitrine_core::{Error, Result};

use crate::cache::CONTENT_VIEW;
use crate::handlers::{ReorderRequest, respond_invalidating};
use crate::request::Request;
use crate::response::Response;
use crate::state::AppState;

fn unknown_section(name: &str) -> Result<Response> {
	Response::envelope::<()>(Err(Error::Validation(format!(
		"unknown showcase section: {}",
		name
	))))
}

/// GET /api/admin/showcase/{section}
pub async fn get(state: Arc<AppState>, req: Request) -> Result<Response> {
	match req.param("section")? {
		"projects" => Response::envelope(state.sections.get::<ProjectsSection>().await),
		"services" => Response::envelope(state.sections.get::<ServicesSection>().await),
		"testimonials" => Response::envelope(state.sections.get::<TestimonialsSection>().await),
		"stats" => Response::envelope(state.sections.get::<StatsSection>().await),
		other => unknown_section(other),
	}
}

/// POST /api/admin/showcase/{section}
pub async fn update_heading(state: Arc<AppState>, req: Request) -> Result<Response> {
	let patch: HeadingPatch = match req.json() {
		Ok(patch) => patch,
		Err(err) => return Response::envelope::<()>(Err(err)),
	};

	match req.param("section")? {
		"projects" => {
			let result = state.sections.update_heading::<ProjectsSection>(patch).await;
			respond_invalidating(&state, &[CONTENT_VIEW], result)
		}
		"services" => {
			let result = state.sections.update_heading::<ServicesSection>(patch).await;
			respond_invalidating(&state, &[CONTENT_VIEW], result)
		}
		"testimonials" => {
			let result = state
				.sections
				.update_heading::<TestimonialsSection>(patch)
				.await;
			respond_invalidating(&state, &[CONTENT_VIEW], result)
		}
		"stats" => {
			let result = state.sections.update_heading::<StatsSection>(patch).await;
			respond_invalidating(&state, &[CONTENT_VIEW], result)
		}
		other => unknown_section(other),
	}
}

/// POST /api/admin/showcase/{section}/items
pub async fn add_item(state: Arc<AppState>, req: Request) -> Result<Response> {
	match req.param("section")? {
		"projects" => {
			let result = match req.json() {
				Ok(input) => state.sections.add_item::<ProjectsSection>(input).await,
				Err(err) => Err(err),
			};
			respond_invalidating(&state, &[CONTENT_VIEW], result)
		}
		"services" => {
			let result = match req.json() {
				Ok(input) => state.sections.add_item::<ServicesSection>(input).await,
				Err(err) => Err(err),
			};
			respond_invalidating(&state, &[CONTENT_VIEW], result)
		}
		"testimonials" => {
			let result = match req.json() {
				Ok(input) => state.sections.add_item::<TestimonialsSection>(input).await,
				Err(err) => Err(err),
			};
			respond_invalidating(&state, &[CONTENT_VIEW], result)
		}
		"stats" => {
			let result = match req.json() {
				Ok(input) => state.sections.add_item::<StatsSection>(input).await,
				Err(err) => Err(err),
			};
			respond_invalidating(&state, &[CONTENT_VIEW], result)
		}
		other => unknown_section(other),
	}
}

/// POST /api/admin/showcase/{section}/items/reorder
pub async fn reorder_items(state: Arc<AppState>, req: Request) -> Result<Response> {
	let body: ReorderRequest = match req.json() {
		Ok(body) => body,
		Err(err) => return Response::envelope::<()>(Err(err)),
	};

	match req.param("section")? {
		"projects" => {
			let result = state
				.sections
				.reorder_items::<ProjectsSection>(body.from, body.to)
				.await;
			respond_invalidating(&state, &[CONTENT_VIEW], result)
		}
		"services" => {
			let result = state
				.sections
				.reorder_items::<ServicesSection>(body.from, body.to)
				.await;
			respond_invalidating(&state, &[CONTENT_VIEW], result)
		}
		"testimonials" => {
			let result = state
				.sections
				.reorder_items::<TestimonialsSection>(body.from, body.to)
				.await;
			respond_invalidating(&state, &[CONTENT_VIEW], result)
		}
		"stats" => {
			let result = state
				.sections
				.reorder_items::<StatsSection>(body.from, body.to)
				.await;
			respond_invalidating(&state, &[CONTENT_VIEW], result)
		}
		other => unknown_section(other),
	}
}

/// POST /api/admin/showcase/{section}/items/{id}
pub async fn update_item(state: Arc<AppState>, req: Request) -> Result<Response> {
	let id = req.param("id")?.to_string();

	match req.param("section")? {
		"projects" => {
			let result = match req.json() {
				Ok(input) => state.sections.update_item::<ProjectsSection>(&id, input).await,
				Err(err) => Err(err),
			};
			respond_invalidating(&state, &[CONTENT_VIEW], result)
		}
		"services" => {
			let result = match req.json() {
				Ok(input) => state.sections.update_item::<ServicesSection>(&id, input).await,
				Err(err) => Err(err),
			};
			respond_invalidating(&state, &[CONTENT_VIEW], result)
		}
		"testimonials" => {
			let result = match req.json() {
				Ok(input) => {
					state
						.sections
						.update_item::<TestimonialsSection>(&id, input)
						.await
				}
				Err(err) => Err(err),
			};
			respond_invalidating(&state, &[CONTENT_VIEW], result)
		}
		"stats" => {
			let result = match req.json() {
				Ok(input) => state.sections.update_item::<StatsSection>(&id, input).await,
				Err(err) => Err(err),
			};
			respond_invalidating(&state, &[CONTENT_VIEW], result)
		}
		other => unknown_section(other),
	}
}

/// DELETE /api/admin/showcase/{section}/items/{id}
pub async fn delete_item(state: Arc<AppState>, req: Request) -> Result<Response> {
	let id = req.param("id")?.to_string();

	match req.param("section")? {
		"projects" => {
			let result = state.sections.delete_item::<ProjectsSection>(&id).await;
			respond_invalidating(&state, &[CONTENT_VIEW], result)
		}
		"services" => {
			let result = state.sections.delete_item::<ServicesSection>(&id).await;
			respond_invalidating(&state, &[CONTENT_VIEW], result)
		}
		"testimonials" => {
			let result = state.sections.delete_item::<TestimonialsSection>(&id).await;
			respond_invalidating(&state, &[CONTENT_VIEW], result)
		}
		"stats" => {
			let result = state.sections.delete_item::<StatsSection>(&id).await;
			respond_invalidating(&state, &[CONTENT_VIEW], result)
		}
		other => unknown_section(other),
	}
}
