//! Ordered sub-item lists
//!
//! Banners, leaders, grid entries and every other nested list share the
//! same editing rules: items carry stable generated ids, item CRUD is
//! id-addressed, and reorder is positional remove-then-reinsert (splice
//! semantics). A failed operation leaves the list untouched.

use vitrine_core::{Error, Result};

/// Anything with a stable string key
pub trait Keyed {
	/// The item's stable id.
	fn key(&self) -> &str;
}

/// Generate a fresh sub-item id.
pub fn new_key() -> String {
	uuid::Uuid::new_v4().simple().to_string()
}

/// Move the item at `from` so it ends up at `to`, shifting the rest.
///
/// Splice semantics: remove, then reinsert. The result is a permutation of
/// the input with the same length.
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) -> Result<()> {
	let len = items.len();
	if from >= len || to >= len {
		return Err(Error::Validation(format!(
			"reorder indices out of range: {} -> {} (length {})",
			from, to, len
		)));
	}

	let item = items.remove(from);
	items.insert(to, item);
	Ok(())
}

/// Apply `mutate` to the item with id `key`.
pub fn update_by_key<T: Keyed>(
	items: &mut [T],
	key: &str,
	what: &str,
	mutate: impl FnOnce(&mut T),
) -> Result<()> {
	match items.iter_mut().find(|item| item.key() == key) {
		Some(item) => {
			mutate(item);
			Ok(())
		}
		None => Err(Error::not_found(what)),
	}
}

/// Remove and return the item with id `key`.
pub fn remove_by_key<T: Keyed>(items: &mut Vec<T>, key: &str, what: &str) -> Result<T> {
	match items.iter().position(|item| item.key() == key) {
		Some(index) => Ok(items.remove(index)),
		None => Err(Error::not_found(what)),
	}
}
