//! Backend trait for document stores

use async_trait::async_trait;
use bson::Document as BsonDocument;

use crate::error::StoreResult;

/// Object-safe async interface over a document store
///
/// Filters are BSON documents matched by field equality, mirroring
/// `findOne`-style lookups. Implementations must not panic on malformed
/// filters; they report failures through [`StoreResult`].
#[async_trait]
pub trait DocumentBackend: Send + Sync {
	/// Find the first document matching `filter`, or `None`.
	async fn find_one(
		&self,
		collection: &str,
		filter: BsonDocument,
	) -> StoreResult<Option<BsonDocument>>;

	/// Find all documents matching `filter`, in insertion order.
	async fn find_many(
		&self,
		collection: &str,
		filter: BsonDocument,
	) -> StoreResult<Vec<BsonDocument>>;

	/// Insert a document.
	async fn insert_one(&self, collection: &str, document: BsonDocument) -> StoreResult<()>;

	/// Replace the first document matching `filter` with `document`.
	///
	/// With `upsert`, a non-matching filter inserts instead. Returns whether
	/// a document was written (always true when upserting).
	async fn replace_one(
		&self,
		collection: &str,
		filter: BsonDocument,
		document: BsonDocument,
		upsert: bool,
	) -> StoreResult<bool>;

	/// Delete the first document matching `filter`. Returns whether a
	/// document was removed.
	async fn delete_one(&self, collection: &str, filter: BsonDocument) -> StoreResult<bool>;

	/// Count documents matching `filter`.
	async fn count(&self, collection: &str, filter: BsonDocument) -> StoreResult<u64>;

	/// Check store connectivity.
	async fn health_check(&self) -> StoreResult<()>;
}
