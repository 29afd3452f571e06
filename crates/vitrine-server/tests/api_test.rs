//! End-to-end API tests over the in-memory backend
//!
//! Drives the full middleware chain + router the way the binary wires it,
//! without a TCP socket.

use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode, header};
use serde_json::{Value, json};
use std::sync::Arc;

use vitrine_conf::Settings;
use vitrine_db::MemoryBackend;
use vitrine_server::middleware::{AdminGuard, LoggingMiddleware, SessionMiddleware};
use vitrine_server::{AppState, Handler, MiddlewareChain, Request, Response, build_router};

struct TestApp {
	state: Arc<AppState>,
	chain: MiddlewareChain,
	cookie: Option<String>,
}

fn settings() -> Settings {
	Settings {
		database_url: "mongodb://unused".to_string(),
		database_name: "unused".to_string(),
		bind_addr: "127.0.0.1:0".to_string(),
		secret_key: "integration-test-secret".to_string(),
		session_ttl_secs: 3600,
	}
}

impl TestApp {
	fn new() -> Self {
		let state = Arc::new(AppState::new(Arc::new(MemoryBackend::new()), &settings()).unwrap());
		let router = Arc::new(build_router(state.clone()));
		let chain = MiddlewareChain::new(router)
			.with_middleware(Arc::new(LoggingMiddleware::new()))
			.with_middleware(Arc::new(SessionMiddleware::new(state.clone())))
			.with_middleware(Arc::new(AdminGuard::new()));

		Self {
			state,
			chain,
			cookie: None,
		}
	}

	async fn send(&self, method: Method, path: &str, body: Option<Value>) -> Response {
		let mut headers = HeaderMap::new();
		if let Some(cookie) = &self.cookie {
			headers.insert(header::COOKIE, cookie.parse().unwrap());
		}

		let bytes = body
			.map(|value| Bytes::from(serde_json::to_vec(&value).unwrap()))
			.unwrap_or_default();

		self.chain
			.handle(Request::new(method, path, headers, bytes))
			.await
			.unwrap()
	}

	async fn get(&self, path: &str) -> Response {
		self.send(Method::GET, path, None).await
	}

	async fn post(&self, path: &str, body: Value) -> Response {
		self.send(Method::POST, path, Some(body)).await
	}

	async fn delete(&self, path: &str) -> Response {
		self.send(Method::DELETE, path, None).await
	}

	/// Create an admin account and capture the session cookie.
	async fn login(&mut self) {
		self.state
			.users
			.create("admin@example.com", "integration-pass")
			.await
			.unwrap();

		let response = self
			.post(
				"/api/auth/login",
				json!({"email": "admin@example.com", "password": "integration-pass"}),
			)
			.await;
		assert_eq!(response.status, StatusCode::OK);

		let set_cookie = response
			.headers
			.get(header::SET_COOKIE)
			.expect("login should set the session cookie")
			.to_str()
			.unwrap();
		let pair = set_cookie.split(';').next().unwrap().to_string();
		self.cookie = Some(pair);
	}
}

fn body_json(response: &Response) -> Value {
	serde_json::from_slice(&response.body).unwrap()
}

#[tokio::test]
async fn test_admin_routes_require_authentication() {
	let app = TestApp::new();

	let response = app.post("/api/admin/site", json!({})).await;
	assert_eq!(response.status, StatusCode::UNAUTHORIZED);
	assert_eq!(body_json(&response)["success"], false);

	// Public routes stay open
	let response = app.get("/api/content").await;
	assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_login_rejects_bad_credentials() {
	let mut app = TestApp::new();
	app.login().await;

	let response = app
		.post(
			"/api/auth/login",
			json!({"email": "admin@example.com", "password": "wrong"}),
		)
		.await;
	assert_eq!(response.status, StatusCode::UNAUTHORIZED);

	let response = app.post("/api/auth/login", json!({"email": 42})).await;
	assert_eq!(response.status, StatusCode::OK);
	let value = body_json(&response);
	assert_eq!(value["success"], false);
}

#[tokio::test]
async fn test_content_endpoint_reflects_admin_edits() {
	let mut app = TestApp::new();
	app.login().await;

	// First read initializes and caches the empty skeleton
	let response = app.get("/api/content").await;
	let value = body_json(&response);
	assert_eq!(value["success"], true);
	assert_eq!(value["data"]["site"]["banners"], json!([]));

	// A mutation invalidates the cached view
	let response = app
		.post(
			"/api/admin/site/banners",
			json!({"heading": "Grand opening", "tagline": "now"}),
		)
		.await;
	assert_eq!(body_json(&response)["success"], true);

	let response = app.get("/api/content").await;
	let value = body_json(&response);
	assert_eq!(value["data"]["site"]["banners"][0]["heading"], "Grand opening");
}

#[tokio::test]
async fn test_envelope_reports_unknown_item_failures() {
	let mut app = TestApp::new();
	app.login().await;

	let response = app
		.post("/api/admin/site/banners/nope", json!({"heading": "x"}))
		.await;
	assert_eq!(response.status, StatusCode::OK);
	let value = body_json(&response);
	assert_eq!(value["success"], false);
	assert_eq!(value["error"], "Banner not found");

	let response = app
		.post("/api/admin/site/banners/reorder", json!({"from": 0, "to": 9}))
		.await;
	let value = body_json(&response);
	assert_eq!(value["success"], false);
}

#[tokio::test]
async fn test_page_lifecycle_over_http() {
	let mut app = TestApp::new();
	app.login().await;

	// Create
	let response = app
		.post("/api/admin/pages", json!({"title": "Our Work", "slug": ""}))
		.await;
	let value = body_json(&response);
	assert_eq!(value["success"], true);
	let id = value["data"]["id"].as_str().unwrap().to_string();
	assert_eq!(value["data"]["slug"], "our-work");

	// Drafts are invisible publicly
	let response = app.get("/api/pages/our-work").await;
	assert_eq!(response.status, StatusCode::NOT_FOUND);

	// Compose sections server-side
	let response = app
		.post(
			&format!("/api/admin/pages/{}/sections/add", id),
			json!({"type": "header-banner"}),
		)
		.await;
	assert_eq!(body_json(&response)["success"], true);

	let response = app
		.post(
			&format!("/api/admin/pages/{}/sections/add", id),
			json!({"type": "content-section"}),
		)
		.await;
	let value = body_json(&response);
	let sections = value["data"]["sections"].as_array().unwrap();
	assert_eq!(sections.len(), 2);
	assert_eq!(sections[1]["type"], "content-section");
	assert_eq!(sections[1]["order"], 1);

	// Move the second section up
	let response = app
		.post(
			&format!("/api/admin/pages/{}/sections/move", id),
			json!({"index": 1, "direction": "up"}),
		)
		.await;
	let value = body_json(&response);
	assert_eq!(value["data"]["sections"][0]["type"], "content-section");

	// Publish and resolve
	let response = app
		.post(
			&format!("/api/admin/pages/{}/published", id),
			json!({"published": true}),
		)
		.await;
	assert_eq!(body_json(&response)["success"], true);

	let response = app.get("/api/pages/our-work").await;
	assert_eq!(response.status, StatusCode::OK);
	let value = body_json(&response);
	let html = value["data"]["html"].as_str().unwrap();
	assert!(html.contains("content-section"));

	// Unpublish hides it again
	app.post(
		&format!("/api/admin/pages/{}/published", id),
		json!({"published": false}),
	)
	.await;
	let response = app.get("/api/pages/our-work").await;
	assert_eq!(response.status, StatusCode::NOT_FOUND);

	// Delete frees the slug
	let response = app.delete(&format!("/api/admin/pages/{}", id)).await;
	assert_eq!(body_json(&response)["success"], true);
	let response = app
		.post("/api/admin/pages", json!({"title": "Our Work", "slug": "our-work"}))
		.await;
	assert_eq!(body_json(&response)["success"], true);
}

#[tokio::test]
async fn test_showcase_routes_dispatch_by_section() {
	let mut app = TestApp::new();
	app.login().await;

	let response = app
		.post(
			"/api/admin/showcase/stats/items",
			json!({"label": "Projects delivered", "value": "140"}),
		)
		.await;
	let value = body_json(&response);
	assert_eq!(value["success"], true);
	assert_eq!(value["data"]["items"][0]["label"], "Projects delivered");

	let response = app.get("/api/admin/showcase/stats").await;
	assert_eq!(body_json(&response)["data"]["items"][0]["value"], "140");

	let response = app.get("/api/admin/showcase/bogus").await;
	let value = body_json(&response);
	assert_eq!(value["success"], false);
}

#[tokio::test]
async fn test_unknown_route_is_404_envelope() {
	let app = TestApp::new();

	let response = app.get("/api/nothing/here").await;
	assert_eq!(response.status, StatusCode::NOT_FOUND);
	assert_eq!(body_json(&response)["success"], false);
}

#[tokio::test]
async fn test_logout_clears_cookie() {
	let mut app = TestApp::new();
	app.login().await;

	let response = app.post("/api/auth/logout", json!({})).await;
	let set_cookie = response
		.headers
		.get(header::SET_COOKIE)
		.unwrap()
		.to_str()
		.unwrap();
	assert!(set_cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn test_tampered_cookie_is_anonymous() {
	let mut app = TestApp::new();
	app.login().await;

	// Break the signature
	let cookie = app.cookie.take().unwrap();
	app.cookie = Some(format!("{}x", cookie));

	let response = app.post("/api/admin/site", json!({})).await;
	assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
