//! # Vitrine
//!
//! A content management backend for marketing websites.
//!
//! The public site (home, about, products, projects, contact) is backed by
//! a dashboard whose every action is a JSON RPC call: CRUD on singleton and
//! collection documents, ordered sub-item lists with stable ids, and a page
//! builder composing typed section blocks. MongoDB holds one document per
//! logical entity; an in-memory backend serves the test suites.
//!
//! ## Crates
//!
//! ```text
//! vitrine
//! ├── vitrine-core   - error taxonomy, action envelope, media references
//! ├── vitrine-conf   - environment-driven settings
//! ├── vitrine-db     - backend trait, MongoDB + memory backends, repository
//! ├── vitrine-auth   - accounts, Argon2 hashing, signed session cookies
//! ├── vitrine-cms    - content entities, services, the page builder
//! └── vitrine-server - hyper server, router, middleware, JSON handlers
//! ```
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use vitrine::prelude::*;
//!
//! # async fn example() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let settings = Settings::from_env()?;
//! let backend = Arc::new(
//!     MongoBackend::connect(&settings.database_url)
//!         .await?
//!         .with_database(&settings.database_name),
//! );
//!
//! let state = Arc::new(AppState::new(backend, &settings)?);
//! let router = Arc::new(build_router(state));
//! HttpServer::new(router).listen(settings.bind_addr.parse()?).await?;
//! # Ok(())
//! # }
//! ```

pub use vitrine_auth as auth;
pub use vitrine_cms as cms;
pub use vitrine_conf as conf;
pub use vitrine_core as core;
pub use vitrine_db as db;
pub use vitrine_server as server;

pub mod prelude {
	//! Convenient re-exports for wiring a server

	pub use vitrine_auth::{SessionSigner, UserManager};
	pub use vitrine_cms::prelude::*;
	pub use vitrine_conf::Settings;
	pub use vitrine_core::{ActionOutcome, Error, MediaRef, Result};
	pub use vitrine_db::{DocumentBackend, MemoryBackend, MongoBackend, Repository};
	pub use vitrine_server::{AppState, HttpServer, Router, build_router};
}
