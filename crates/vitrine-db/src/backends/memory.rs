//! In-memory backend
//!
//! A [`DocumentBackend`] over process memory, used by the test suites and
//! for running the server without a database. Filter matching is equality
//! on every field present in the filter document.

use async_trait::async_trait;
use bson::Document as BsonDocument;
use parking_lot::RwLock;
use std::collections::HashMap;

use crate::backend::DocumentBackend;
use crate::error::StoreResult;

/// In-process document store
#[derive(Default)]
pub struct MemoryBackend {
	collections: RwLock<HashMap<String, Vec<BsonDocument>>>,
}

impl MemoryBackend {
	/// Create an empty store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of documents currently held in `collection`.
	pub fn len(&self, collection: &str) -> usize {
		self.collections
			.read()
			.get(collection)
			.map(Vec::len)
			.unwrap_or(0)
	}

	/// Whether `collection` holds no documents.
	pub fn is_empty(&self, collection: &str) -> bool {
		self.len(collection) == 0
	}
}

fn matches(doc: &BsonDocument, filter: &BsonDocument) -> bool {
	filter
		.iter()
		.all(|(key, expected)| doc.get(key) == Some(expected))
}

// Documents handed out are deep copies; callers can never alias the stored
// value.
#[async_trait]
impl DocumentBackend for MemoryBackend {
	async fn find_one(
		&self,
		collection: &str,
		filter: BsonDocument,
	) -> StoreResult<Option<BsonDocument>> {
		let collections = self.collections.read();
		let docs = match collections.get(collection) {
			Some(docs) => docs,
			None => return Ok(None),
		};

		Ok(docs.iter().find(|doc| matches(doc, &filter)).cloned())
	}

	async fn find_many(
		&self,
		collection: &str,
		filter: BsonDocument,
	) -> StoreResult<Vec<BsonDocument>> {
		let collections = self.collections.read();
		let docs = match collections.get(collection) {
			Some(docs) => docs,
			None => return Ok(Vec::new()),
		};

		Ok(docs
			.iter()
			.filter(|doc| matches(doc, &filter))
			.cloned()
			.collect())
	}

	async fn insert_one(&self, collection: &str, document: BsonDocument) -> StoreResult<()> {
		let mut collections = self.collections.write();
		collections
			.entry(collection.to_string())
			.or_default()
			.push(document);
		Ok(())
	}

	async fn replace_one(
		&self,
		collection: &str,
		filter: BsonDocument,
		document: BsonDocument,
		upsert: bool,
	) -> StoreResult<bool> {
		let mut collections = self.collections.write();
		let docs = collections.entry(collection.to_string()).or_default();

		if let Some(existing) = docs.iter_mut().find(|doc| matches(doc, &filter)) {
			*existing = document;
			return Ok(true);
		}

		if upsert {
			docs.push(document);
			return Ok(true);
		}

		Ok(false)
	}

	async fn delete_one(&self, collection: &str, filter: BsonDocument) -> StoreResult<bool> {
		let mut collections = self.collections.write();
		let docs = match collections.get_mut(collection) {
			Some(docs) => docs,
			None => return Ok(false),
		};

		match docs.iter().position(|doc| matches(doc, &filter)) {
			Some(index) => {
				docs.remove(index);
				Ok(true)
			}
			None => Ok(false),
		}
	}

	async fn count(&self, collection: &str, filter: BsonDocument) -> StoreResult<u64> {
		let collections = self.collections.read();
		let docs = match collections.get(collection) {
			Some(docs) => docs,
			None => return Ok(0),
		};

		Ok(docs.iter().filter(|doc| matches(doc, &filter)).count() as u64)
	}

	async fn health_check(&self) -> StoreResult<()> {
		Ok(())
	}
}
