//! Route handlers
//!
//! Every admin handler follows one shape: parse the body (malformed JSON is
//! a validation failure, not a 500), call the service, invalidate the
//! public views the mutation dirties, and fold the result into the action
//! envelope. Public GET handlers map errors onto plain HTTP statuses
//! instead.

pub mod about;
pub mod auth;
pub mod content;
pub mod pages;
pub mod products;
pub mod showcase;
pub mod site;
pub mod users;

use serde::{Deserialize, Serialize};

use crate::response::Response;
use crate::state::AppState;
use vitrine_core::Result;

/// Body for positional reorder actions
#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
	pub from: usize,
	pub to: usize,
}

/// Fold a mutation result into the envelope, dropping the named cached
/// views on success.
pub(crate) fn respond_invalidating<T: Serialize>(
	state: &AppState,
	views: &[&str],
	result: Result<T>,
) -> Result<Response> {
	if result.is_ok() {
		state.cache.invalidate(views);
	}
	Response::envelope(result)
}
