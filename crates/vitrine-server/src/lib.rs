//! # Vitrine Server
//!
//! The HTTP surface of the content backend: a hyper-based server, a small
//! method+template router, middleware (request logging, session
//! extraction, the admin guard), and the JSON handlers that map services
//! onto the `{success, ...}` action envelope.

pub mod cache;
pub mod handler;
pub mod handlers;
pub mod middleware;
pub mod request;
pub mod response;
pub mod router;
pub mod routes;
pub mod server;
pub mod state;

pub use cache::ResponseCache;
pub use handler::{FnHandler, Handler, Middleware, MiddlewareChain};
pub use server::HttpServer;
pub use request::Request;
pub use response::Response;
pub use router::Router;
pub use routes::build_router;
pub use state::AppState;
