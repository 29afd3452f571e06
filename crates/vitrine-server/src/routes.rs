//! Route table
//!
//! Literal routes (`.../reorder`, `.../items`) are registered before their
//! `{id}` siblings; the router matches in registration order.

use http::Method;
use std::future::Future;
use std::sync::Arc;

use vitrine_core::Result;

use crate::handler::{FnHandler, Handler};
use crate::handlers;
use crate::request::Request;
use crate::response::Response;
use crate::router::Router;
use crate::state::AppState;

fn h<Fut>(state: &Arc<AppState>, f: fn(Arc<AppState>, Request) -> Fut) -> Arc<dyn Handler>
where
	Fut: Future<Output = Result<Response>> + Send + 'static,
{
	let state = state.clone();
	Arc::new(FnHandler(move |req| f(state.clone(), req)))
}

/// Build the full route table over shared state.
pub fn build_router(state: Arc<AppState>) -> Router {
	let mut router = Router::new();
	let s = &state;

	// Public surface
	router.add(Method::GET, "/api/content", h(s, handlers::content::get_content));
	router.add(Method::GET, "/api/pages/{slug}", h(s, handlers::pages::resolve));
	router.add(Method::POST, "/api/auth/login", h(s, handlers::auth::login));
	router.add(Method::POST, "/api/auth/logout", h(s, handlers::auth::logout));

	// Site content
	router.add(Method::GET, "/api/admin/site", h(s, handlers::site::get));
	router.add(Method::POST, "/api/admin/site", h(s, handlers::site::update));
	router.add(Method::POST, "/api/admin/site/banners", h(s, handlers::site::add_banner));
	router.add(
		Method::POST,
		"/api/admin/site/banners/reorder",
		h(s, handlers::site::reorder_banners),
	);
	router.add(
		Method::POST,
		"/api/admin/site/banners/{id}",
		h(s, handlers::site::update_banner),
	);
	router.add(
		Method::DELETE,
		"/api/admin/site/banners/{id}",
		h(s, handlers::site::delete_banner),
	);
	router.add(Method::POST, "/api/admin/site/logos", h(s, handlers::site::add_client_logo));
	router.add(
		Method::POST,
		"/api/admin/site/logos/reorder",
		h(s, handlers::site::reorder_client_logos),
	);
	router.add(
		Method::POST,
		"/api/admin/site/logos/{id}",
		h(s, handlers::site::update_client_logo),
	);
	router.add(
		Method::DELETE,
		"/api/admin/site/logos/{id}",
		h(s, handlers::site::delete_client_logo),
	);

	// About page
	router.add(Method::GET, "/api/admin/about", h(s, handlers::about::get));
	router.add(Method::POST, "/api/admin/about", h(s, handlers::about::update));
	router.add(
		Method::POST,
		"/api/admin/about/sections",
		h(s, handlers::about::add_section),
	);
	router.add(
		Method::POST,
		"/api/admin/about/sections/reorder",
		h(s, handlers::about::reorder_sections),
	);
	router.add(
		Method::POST,
		"/api/admin/about/sections/{id}",
		h(s, handlers::about::update_section),
	);
	router.add(
		Method::DELETE,
		"/api/admin/about/sections/{id}",
		h(s, handlers::about::delete_section),
	);
	router.add(Method::POST, "/api/admin/about/leaders", h(s, handlers::about::add_leader));
	router.add(
		Method::POST,
		"/api/admin/about/leaders/reorder",
		h(s, handlers::about::reorder_leaders),
	);
	router.add(
		Method::POST,
		"/api/admin/about/leaders/{id}",
		h(s, handlers::about::update_leader),
	);
	router.add(
		Method::DELETE,
		"/api/admin/about/leaders/{id}",
		h(s, handlers::about::delete_leader),
	);

	// Products
	router.add(Method::GET, "/api/admin/products", h(s, handlers::products::list));
	router.add(Method::POST, "/api/admin/products", h(s, handlers::products::create));
	router.add(Method::GET, "/api/admin/products/{id}", h(s, handlers::products::get));
	router.add(Method::POST, "/api/admin/products/{id}", h(s, handlers::products::update));
	router.add(
		Method::DELETE,
		"/api/admin/products/{id}",
		h(s, handlers::products::delete),
	);

	// Showcase sections
	router.add(
		Method::GET,
		"/api/admin/showcase/{section}",
		h(s, handlers::showcase::get),
	);
	router.add(
		Method::POST,
		"/api/admin/showcase/{section}",
		h(s, handlers::showcase::update_heading),
	);
	router.add(
		Method::POST,
		"/api/admin/showcase/{section}/items",
		h(s, handlers::showcase::add_item),
	);
	router.add(
		Method::POST,
		"/api/admin/showcase/{section}/items/reorder",
		h(s, handlers::showcase::reorder_items),
	);
	router.add(
		Method::POST,
		"/api/admin/showcase/{section}/items/{id}",
		h(s, handlers::showcase::update_item),
	);
	router.add(
		Method::DELETE,
		"/api/admin/showcase/{section}/items/{id}",
		h(s, handlers::showcase::delete_item),
	);

	// Pages
	router.add(Method::GET, "/api/admin/pages", h(s, handlers::pages::list));
	router.add(Method::POST, "/api/admin/pages", h(s, handlers::pages::create));
	router.add(Method::GET, "/api/admin/pages/{id}", h(s, handlers::pages::get));
	router.add(
		Method::POST,
		"/api/admin/pages/{id}/sections/add",
		h(s, handlers::pages::add_section),
	);
	router.add(
		Method::POST,
		"/api/admin/pages/{id}/sections/move",
		h(s, handlers::pages::move_section),
	);
	router.add(
		Method::POST,
		"/api/admin/pages/{id}/sections",
		h(s, handlers::pages::save_sections),
	);
	router.add(
		Method::POST,
		"/api/admin/pages/{id}/published",
		h(s, handlers::pages::set_published),
	);
	router.add(Method::DELETE, "/api/admin/pages/{id}", h(s, handlers::pages::delete));

	// Accounts
	router.add(Method::GET, "/api/admin/users", h(s, handlers::users::list));
	router.add(Method::POST, "/api/admin/users", h(s, handlers::users::create));
	router.add(
		Method::POST,
		"/api/admin/users/{id}/password",
		h(s, handlers::users::change_password),
	);
	router.add(Method::DELETE, "/api/admin/users/{id}", h(s, handlers::users::delete));

	router
}
