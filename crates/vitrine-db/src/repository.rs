//! Typed repository over a document backend
//!
//! Converts between entity types and BSON at the edge, so services deal
//! only in owned typed data. Whole-document replace-on-save is the write
//! model: last write wins, no version check.

use bson::doc;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::backend::DocumentBackend;
use crate::document::{Document, Singleton};
use crate::error::{StoreError, StoreResult};

/// Typed access to one collection
pub struct Repository<T: Document> {
	backend: Arc<dyn DocumentBackend>,
	_marker: PhantomData<fn() -> T>,
}

impl<T: Document> Clone for Repository<T> {
	fn clone(&self) -> Self {
		Self {
			backend: self.backend.clone(),
			_marker: PhantomData,
		}
	}
}

impl<T: Document> Repository<T> {
	/// Create a repository over `backend`.
	pub fn new(backend: Arc<dyn DocumentBackend>) -> Self {
		Self {
			backend,
			_marker: PhantomData,
		}
	}

	/// The backend this repository reads and writes through.
	pub fn backend(&self) -> Arc<dyn DocumentBackend> {
		self.backend.clone()
	}

	/// Fetch a document by id.
	pub async fn get(&self, id: &str) -> StoreResult<Option<T>> {
		let found = self
			.backend
			.find_one(T::COLLECTION, doc! { "id": id })
			.await?;

		match found {
			Some(document) => Ok(Some(bson::deserialize_from_document(document)?)),
			None => Ok(None),
		}
	}

	/// Fetch every document in the collection, in insertion order.
	pub async fn list(&self) -> StoreResult<Vec<T>> {
		let documents = self.backend.find_many(T::COLLECTION, doc! {}).await?;

		documents
			.into_iter()
			.map(|document| bson::deserialize_from_document(document).map_err(StoreError::from))
			.collect()
	}

	/// Whether any document matches `filter`.
	pub async fn exists(&self, filter: bson::Document) -> StoreResult<bool> {
		Ok(self.backend.count(T::COLLECTION, filter).await? > 0)
	}

	/// Insert a new document.
	pub async fn insert(&self, entity: &T) -> StoreResult<()> {
		let document = bson::serialize_to_document(entity)?;
		self.backend.insert_one(T::COLLECTION, document).await
	}

	/// Replace the stored document with `entity`, inserting when absent.
	///
	/// This is whole-document replace: concurrent writers race and the last
	/// one wins.
	pub async fn save(&self, entity: &T) -> StoreResult<()> {
		let document = bson::serialize_to_document(entity)?;
		self.backend
			.replace_one(T::COLLECTION, doc! { "id": entity.id() }, document, true)
			.await?;
		Ok(())
	}

	/// Delete a document by id. Returns whether one was removed.
	pub async fn delete(&self, id: &str) -> StoreResult<bool> {
		self.backend
			.delete_one(T::COLLECTION, doc! { "id": id })
			.await
	}
}

impl<T: Singleton> Repository<T> {
	/// Load the singleton, creating the default skeleton on first access.
	///
	/// Idempotent: the first call persists `T::default()`, later calls
	/// return the stored document unchanged.
	pub async fn load_or_init(&self) -> StoreResult<T> {
		let default = T::default();

		if let Some(existing) = self.get(default.id()).await? {
			return Ok(existing);
		}

		tracing::debug!(collection = T::COLLECTION, "initializing singleton");
		self.insert(&default).await?;
		Ok(default)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::backends::memory::MemoryBackend;
	use serde::{Deserialize, Serialize};

	#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
	struct Note {
		id: String,
		text: String,
	}

	impl Document for Note {
		const COLLECTION: &'static str = "notes";

		fn id(&self) -> &str {
			&self.id
		}
	}

	impl Default for Note {
		fn default() -> Self {
			Self {
				id: "singleton".to_string(),
				text: String::new(),
			}
		}
	}

	impl Singleton for Note {}

	fn repo() -> Repository<Note> {
		Repository::new(Arc::new(MemoryBackend::new()))
	}

	#[tokio::test]
	async fn test_insert_get_roundtrip() {
		let repo = repo();
		let note = Note {
			id: "n1".to_string(),
			text: "hello".to_string(),
		};

		repo.insert(&note).await.unwrap();
		let loaded = repo.get("n1").await.unwrap().unwrap();
		assert_eq!(loaded, note);
	}

	#[tokio::test]
	async fn test_save_upserts_and_replaces() {
		let repo = repo();
		let mut note = Note {
			id: "n1".to_string(),
			text: "first".to_string(),
		};

		repo.save(&note).await.unwrap();
		note.text = "second".to_string();
		repo.save(&note).await.unwrap();

		let all = repo.list().await.unwrap();
		assert_eq!(all.len(), 1);
		assert_eq!(all[0].text, "second");
	}

	#[tokio::test]
	async fn test_load_or_init_is_idempotent() {
		let repo = repo();

		let first = repo.load_or_init().await.unwrap();
		assert_eq!(first, Note::default());

		// Mutate, save, and make sure a second load returns the stored
		// document rather than a fresh default.
		let mut stored = first;
		stored.text = "kept".to_string();
		repo.save(&stored).await.unwrap();

		let second = repo.load_or_init().await.unwrap();
		assert_eq!(second.text, "kept");
	}

	#[tokio::test]
	async fn test_delete() {
		let repo = repo();
		repo.insert(&Note {
			id: "n1".to_string(),
			text: String::new(),
		})
		.await
		.unwrap();

		assert!(repo.delete("n1").await.unwrap());
		assert!(!repo.delete("n1").await.unwrap());
		assert!(repo.get("n1").await.unwrap().is_none());
	}
}
