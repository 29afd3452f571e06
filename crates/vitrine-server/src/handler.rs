//! Handler and middleware traits
//!
//! Handlers are the core abstraction; middleware composes around them in
//! registration order.

use async_trait::async_trait;
use std::future::Future;
use std::sync::Arc;

use vitrine_core::Result;

use crate::request::Request;
use crate::response::Response;

/// Processes one request
#[async_trait]
pub trait Handler: Send + Sync {
	async fn handle(&self, request: Request) -> Result<Response>;
}

#[async_trait]
impl<T: Handler + ?Sized> Handler for Arc<T> {
	async fn handle(&self, request: Request) -> Result<Response> {
		(**self).handle(request).await
	}
}

/// Wraps a request on its way to the handler
#[async_trait]
pub trait Middleware: Send + Sync {
	async fn process(&self, request: Request, next: Arc<dyn Handler>) -> Result<Response>;
}

/// Adapter so plain async functions and closures can be registered as
/// handlers.
pub struct FnHandler<F>(pub F);

#[async_trait]
impl<F, Fut> Handler for FnHandler<F>
where
	F: Fn(Request) -> Fut + Send + Sync,
	Fut: Future<Output = Result<Response>> + Send,
{
	async fn handle(&self, request: Request) -> Result<Response> {
		(self.0)(request).await
	}
}

/// Composes middleware around a terminal handler
pub struct MiddlewareChain {
	middlewares: Vec<Arc<dyn Middleware>>,
	handler: Arc<dyn Handler>,
}

impl MiddlewareChain {
	pub fn new(handler: Arc<dyn Handler>) -> Self {
		Self {
			middlewares: Vec::new(),
			handler,
		}
	}

	/// Add a middleware; they run in the order they were added.
	pub fn with_middleware(mut self, middleware: Arc<dyn Middleware>) -> Self {
		self.middlewares.push(middleware);
		self
	}
}

struct ComposedHandler {
	middleware: Arc<dyn Middleware>,
	next: Arc<dyn Handler>,
}

#[async_trait]
impl Handler for ComposedHandler {
	async fn handle(&self, request: Request) -> Result<Response> {
		self.middleware.process(request, self.next.clone()).await
	}
}

#[async_trait]
impl Handler for MiddlewareChain {
	async fn handle(&self, request: Request) -> Result<Response> {
		let mut current: Arc<dyn Handler> = self.handler.clone();

		for middleware in self.middlewares.iter().rev() {
			current = Arc::new(ComposedHandler {
				middleware: middleware.clone(),
				next: current,
			});
		}

		current.handle(request).await
	}
}
