//! Response cache
//!
//! Public GET payloads are cached until a mutation invalidates the views
//! they feed. Keys are view names (`content`, `page:{slug}`); every admin
//! mutation names the views it dirties.

use parking_lot::RwLock;
use std::collections::HashMap;

/// In-process cache of serialized public payloads
#[derive(Default)]
pub struct ResponseCache {
	entries: RwLock<HashMap<String, serde_json::Value>>,
}

/// View key for the homepage content payload
pub const CONTENT_VIEW: &str = "content";

/// View key for a published page payload
pub fn page_view(slug: &str) -> String {
	format!("page:{}", slug)
}

impl ResponseCache {
	pub fn new() -> Self {
		Self::default()
	}

	/// Fetch a cached payload.
	pub fn get(&self, key: &str) -> Option<serde_json::Value> {
		self.entries.read().get(key).cloned()
	}

	/// Store a payload under `key`.
	pub fn put(&self, key: impl Into<String>, value: serde_json::Value) {
		self.entries.write().insert(key.into(), value);
	}

	/// Drop the named views.
	pub fn invalidate(&self, keys: &[&str]) {
		let mut entries = self.entries.write();
		for key in keys {
			entries.remove(*key);
		}
	}

	/// Drop everything.
	pub fn clear(&self) {
		self.entries.write().clear();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_put_get_invalidate() {
		let cache = ResponseCache::new();
		cache.put(CONTENT_VIEW, serde_json::json!({"v": 1}));
		cache.put(page_view("about"), serde_json::json!({"v": 2}));

		assert_eq!(cache.get(CONTENT_VIEW).unwrap()["v"], 1);

		cache.invalidate(&[CONTENT_VIEW]);
		assert!(cache.get(CONTENT_VIEW).is_none());
		assert!(cache.get(&page_view("about")).is_some());

		cache.clear();
		assert!(cache.get(&page_view("about")).is_none());
	}
}
