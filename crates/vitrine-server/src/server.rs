//! HTTP server
//!
//! TCP accept loop with one task per connection, translating between hyper
//! and the crate's owned [`Request`]/[`Response`] types. Handler errors
//! that escape the middleware chain become a 500 failure envelope, so the
//! wire contract holds even on internal bugs.

use bytes::Bytes;
use http::StatusCode;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::watch;

use crate::handler::{Handler, Middleware, MiddlewareChain};
use crate::request::Request;
use crate::response::Response;

/// HTTP server with middleware support
pub struct HttpServer {
	handler: Arc<dyn Handler>,
	middlewares: Vec<Arc<dyn Middleware>>,
}

impl HttpServer {
	/// Create a server around a terminal handler (usually the router).
	pub fn new(handler: Arc<dyn Handler>) -> Self {
		Self {
			handler,
			middlewares: Vec::new(),
		}
	}

	/// Add a middleware; they run in the order they are added.
	pub fn with_middleware(mut self, middleware: Arc<dyn Middleware>) -> Self {
		self.middlewares.push(middleware);
		self
	}

	fn build_handler(&self) -> Arc<dyn Handler> {
		if self.middlewares.is_empty() {
			return self.handler.clone();
		}

		let mut chain = MiddlewareChain::new(self.handler.clone());
		for middleware in &self.middlewares {
			chain = chain.with_middleware(middleware.clone());
		}
		Arc::new(chain)
	}

	/// Bind and serve until the process is stopped.
	pub async fn listen(self, addr: SocketAddr) -> std::io::Result<()> {
		let (_tx, rx) = watch::channel(false);
		self.listen_with_shutdown(addr, rx).await
	}

	/// Bind and serve until `shutdown` flips to true.
	pub async fn listen_with_shutdown(
		self,
		addr: SocketAddr,
		mut shutdown: watch::Receiver<bool>,
	) -> std::io::Result<()> {
		let listener = TcpListener::bind(addr).await?;
		tracing::info!(%addr, "server listening");

		let handler = self.build_handler();

		loop {
			let accepted = tokio::select! {
				accepted = listener.accept() => accepted,
				changed = shutdown.changed() => {
					// A dropped sender counts as shutdown
					if changed.is_err() || *shutdown.borrow() {
						tracing::info!("shutdown requested, no longer accepting connections");
						return Ok(());
					}
					continue;
				}
			};

			let (stream, peer) = match accepted {
				Ok(pair) => pair,
				Err(err) => {
					tracing::warn!(error = %err, "failed to accept connection");
					continue;
				}
			};

			let handler = handler.clone();
			tokio::task::spawn(async move {
				let io = TokioIo::new(stream);
				let service = service_fn(move |req| serve_one(handler.clone(), req));

				if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
					tracing::debug!(%peer, error = %err, "connection error");
				}
			});
		}
	}
}

async fn serve_one(
	handler: Arc<dyn Handler>,
	req: hyper::Request<Incoming>,
) -> std::result::Result<hyper::Response<Full<Bytes>>, std::convert::Infallible> {
	let (parts, body) = req.into_parts();

	let body = match body.collect().await {
		Ok(collected) => collected.to_bytes(),
		Err(err) => {
			tracing::warn!(error = %err, "failed to read request body");
			Bytes::new()
		}
	};

	let request = Request::new(parts.method, parts.uri.path().to_string(), parts.headers, body);

	let response = match handler.handle(request).await {
		Ok(response) => response,
		Err(err) => {
			tracing::error!(error = %err, "unhandled handler error");
			Response::failure(StatusCode::INTERNAL_SERVER_ERROR, "internal error")
				.unwrap_or_else(|_| Response::new(StatusCode::INTERNAL_SERVER_ERROR))
		}
	};

	Ok(into_hyper(response))
}

fn into_hyper(response: Response) -> hyper::Response<Full<Bytes>> {
	let mut builder = hyper::Response::builder().status(response.status);
	if let Some(headers) = builder.headers_mut() {
		*headers = response.headers;
	}

	builder
		.body(Full::new(response.body))
		.unwrap_or_else(|_| hyper::Response::new(Full::new(Bytes::new())))
}
