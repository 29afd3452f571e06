//! Typed document traits

use serde::Serialize;
use serde::de::DeserializeOwned;

/// A typed document stored in its own collection
///
/// Ids are caller-assigned strings (UUIDs for collection entities, a fixed
/// well-known id for singletons), so identity survives reordering and
/// concurrent edits.
pub trait Document: Serialize + DeserializeOwned + Send + Sync + 'static {
	/// Collection name in the store.
	const COLLECTION: &'static str;

	/// The document's stable id.
	fn id(&self) -> &str;
}

/// Marker for one-document entities
///
/// A singleton's `Default` value carries the entity's well-known id and the
/// empty skeleton persisted on first read.
pub trait Singleton: Document + Default {}
