//! Page endpoints: public slug resolution and the admin page-builder API

use http::StatusCode;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use vitrine_cms::pages::{PageSection, SectionKind};
use vitrine_core::{ActionOutcome, Error, Result};

use crate::cache::page_view;
use crate::request::Request;
use crate::response::Response;
use crate::state::AppState;

/// GET /api/pages/{slug}
///
/// Resolves a published page; drafts and unknown slugs both answer 404.
pub async fn resolve(state: Arc<AppState>, req: Request) -> Result<Response> {
	let slug = req.param("slug")?.to_string();
	let view = page_view(&slug);

	if let Some(cached) = state.cache.get(&view) {
		return Response::json(StatusCode::OK, &ActionOutcome::ok(cached));
	}

	match state.pages.resolve(&slug).await {
		Ok(page) => {
			let data = json!({ "page": page, "html": page.render_html() });
			state.cache.put(view, data.clone());
			Response::json(StatusCode::OK, &ActionOutcome::ok(data))
		}
		Err(Error::NotFound(_)) => Response::failure(StatusCode::NOT_FOUND, "page not found"),
		Err(err) => {
			tracing::error!(error = %err, %slug, "failed to resolve page");
			Response::failure(StatusCode::INTERNAL_SERVER_ERROR, "failed to load page")
		}
	}
}

#[derive(Debug, Deserialize)]
struct CreatePageRequest {
	title: String,
	#[serde(default)]
	slug: String,
}

/// POST /api/admin/pages
pub async fn create(state: Arc<AppState>, req: Request) -> Result<Response> {
	let result = match req.json::<CreatePageRequest>() {
		Ok(body) => state.pages.create(&body.title, &body.slug).await,
		Err(err) => Err(err),
	};
	Response::envelope(result)
}

/// GET /api/admin/pages
pub async fn list(state: Arc<AppState>, _req: Request) -> Result<Response> {
	Response::envelope(state.pages.list().await)
}

/// GET /api/admin/pages/{id}
pub async fn get(state: Arc<AppState>, req: Request) -> Result<Response> {
	let result = match req.param("id") {
		Ok(id) => state.pages.get(id).await,
		Err(err) => Err(err),
	};
	Response::envelope(result)
}

/// POST /api/admin/pages/{id}/sections
///
/// Whole-array replace: the draft the dashboard holds becomes the stored
/// section list in one call.
pub async fn save_sections(state: Arc<AppState>, req: Request) -> Result<Response> {
	let result = match (req.param("id"), req.json::<Vec<PageSection>>()) {
		(Ok(id), Ok(sections)) => state.pages.save_sections(id, sections).await,
		(Err(err), _) | (_, Err(err)) => Err(err),
	};

	match result {
		Ok(page) => {
			state.cache.invalidate(&[&page_view(&page.slug)]);
			Response::envelope(Ok(page))
		}
		Err(err) => Response::envelope::<()>(Err(err)),
	}
}

#[derive(Debug, Deserialize)]
struct AddSectionRequest {
	#[serde(rename = "type")]
	kind: SectionKind,
}

/// POST /api/admin/pages/{id}/sections/add
///
/// Server-side convenience: append a section of the given kind with its
/// default payload.
pub async fn add_section(state: Arc<AppState>, req: Request) -> Result<Response> {
	let result = match (req.param("id"), req.json::<AddSectionRequest>()) {
		(Ok(id), Ok(body)) => match state.pages.get(id).await {
			Ok(mut page) => {
				page.add_section(body.kind);
				state.pages.save_sections(id, page.sections).await
			}
			Err(err) => Err(err),
		},
		(Err(err), _) | (_, Err(err)) => Err(err),
	};

	match result {
		Ok(page) => {
			state.cache.invalidate(&[&page_view(&page.slug)]);
			Response::envelope(Ok(page))
		}
		Err(err) => Response::envelope::<()>(Err(err)),
	}
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum MoveDirection {
	Up,
	Down,
}

#[derive(Debug, Deserialize)]
struct MoveSectionRequest {
	index: usize,
	direction: MoveDirection,
}

/// POST /api/admin/pages/{id}/sections/move
pub async fn move_section(state: Arc<AppState>, req: Request) -> Result<Response> {
	let result = match (req.param("id"), req.json::<MoveSectionRequest>()) {
		(Ok(id), Ok(body)) => match state.pages.get(id).await {
			Ok(mut page) => {
				let moved = match body.direction {
					MoveDirection::Up => page.move_section_up(body.index),
					MoveDirection::Down => page.move_section_down(body.index),
				};
				match moved {
					Ok(()) => state.pages.save_sections(id, page.sections).await,
					Err(err) => Err(err),
				}
			}
			Err(err) => Err(err),
		},
		(Err(err), _) | (_, Err(err)) => Err(err),
	};

	match result {
		Ok(page) => {
			state.cache.invalidate(&[&page_view(&page.slug)]);
			Response::envelope(Ok(page))
		}
		Err(err) => Response::envelope::<()>(Err(err)),
	}
}

#[derive(Debug, Deserialize)]
struct PublishRequest {
	published: bool,
}

/// POST /api/admin/pages/{id}/published
pub async fn set_published(state: Arc<AppState>, req: Request) -> Result<Response> {
	let result = match (req.param("id"), req.json::<PublishRequest>()) {
		(Ok(id), Ok(body)) => state.pages.set_published(id, body.published).await,
		(Err(err), _) | (_, Err(err)) => Err(err),
	};

	match result {
		Ok(page) => {
			state.cache.invalidate(&[&page_view(&page.slug)]);
			Response::envelope(Ok(page))
		}
		Err(err) => Response::envelope::<()>(Err(err)),
	}
}

/// DELETE /api/admin/pages/{id}
pub async fn delete(state: Arc<AppState>, req: Request) -> Result<Response> {
	let result = match req.param("id") {
		Ok(id) => match state.pages.get(id).await {
			Ok(page) => {
				let view = page_view(&page.slug);
				match state.pages.delete(id).await {
					Ok(()) => {
						state.cache.invalidate(&[&view]);
						Ok(())
					}
					Err(err) => Err(err),
				}
			}
			Err(err) => Err(err),
		},
		Err(err) => Err(err),
	};
	Response::envelope(result)
}
