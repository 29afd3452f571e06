//! Server binary
//!
//! Reads settings from the environment, connects to the document store,
//! and serves the JSON API.

use std::sync::Arc;

use vitrine_conf::Settings;
use vitrine_db::{DocumentBackend, MongoBackend};
use vitrine_server::middleware::{AdminGuard, LoggingMiddleware, SessionMiddleware};
use vitrine_server::{AppState, HttpServer, build_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	tracing_subscriber::fmt::init();

	let settings = Settings::from_env()?;
	let addr: std::net::SocketAddr = settings.bind_addr.parse()?;

	let backend = MongoBackend::connect(&settings.database_url)
		.await?
		.with_database(&settings.database_name);
	if let Err(err) = backend.health_check().await {
		// The driver connects lazily; surface unreachable stores early
		tracing::warn!(error = %err, "document store unreachable at startup");
	}

	let state = Arc::new(AppState::new(Arc::new(backend), &settings)?);
	let router = Arc::new(build_router(state.clone()));

	let server = HttpServer::new(router)
		.with_middleware(Arc::new(LoggingMiddleware::new()))
		.with_middleware(Arc::new(SessionMiddleware::new(state.clone())))
		.with_middleware(Arc::new(AdminGuard::new()));

	server.listen(addr).await?;
	Ok(())
}
