//! MongoDB backend
//!
//! Production [`DocumentBackend`] implementation over the official driver.
//!
//! # Example
//!
//! ```rust,no_run
//! use vitrine_db::{DocumentBackend, MongoBackend};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = MongoBackend::connect("mongodb://localhost:27017")
//!     .await?
//!     .with_database("vitrine");
//! backend.health_check().await?;
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use bson::Document as BsonDocument;
use mongodb::{Client, Database};
use std::sync::Arc;

use crate::backend::DocumentBackend;
use crate::error::{StoreError, StoreResult};

/// MongoDB-backed document store
///
/// Cloning is cheap; all clones share one connection pool.
#[derive(Clone)]
pub struct MongoBackend {
	client: Arc<Client>,
	database_name: String,
}

/// Builder for configuring MongoDB connections
pub struct MongoBackendBuilder {
	url: String,
	database: String,
	max_pool_size: Option<u32>,
	min_pool_size: Option<u32>,
}

impl Default for MongoBackendBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl MongoBackendBuilder {
	/// Create a builder with local development defaults.
	pub fn new() -> Self {
		Self {
			url: "mongodb://localhost:27017".to_string(),
			database: "vitrine".to_string(),
			max_pool_size: None,
			min_pool_size: None,
		}
	}

	/// Set the connection string.
	pub fn url(mut self, url: impl Into<String>) -> Self {
		self.url = url.into();
		self
	}

	/// Set the database name.
	pub fn database(mut self, database: impl Into<String>) -> Self {
		self.database = database.into();
		self
	}

	/// Set the maximum connection pool size.
	pub fn max_pool_size(mut self, size: u32) -> Self {
		self.max_pool_size = Some(size);
		self
	}

	/// Set the minimum connection pool size.
	pub fn min_pool_size(mut self, size: u32) -> Self {
		self.min_pool_size = Some(size);
		self
	}

	/// Connect and build the backend.
	pub async fn build(self) -> StoreResult<MongoBackend> {
		use mongodb::options::ClientOptions;

		let mut options = ClientOptions::parse(&self.url)
			.await
			.map_err(|e| StoreError::Connection(e.to_string()))?;

		if let Some(max_size) = self.max_pool_size {
			options.max_pool_size = Some(max_size);
		}
		if let Some(min_size) = self.min_pool_size {
			options.min_pool_size = Some(min_size);
		}

		let client =
			Client::with_options(options).map_err(|e| StoreError::Connection(e.to_string()))?;

		Ok(MongoBackend {
			client: Arc::new(client),
			database_name: self.database,
		})
	}
}

impl MongoBackend {
	/// Connect using a connection string.
	pub async fn connect(url: &str) -> StoreResult<Self> {
		let client = Client::with_uri_str(url)
			.await
			.map_err(|e| StoreError::Connection(e.to_string()))?;

		Ok(Self {
			client: Arc::new(client),
			database_name: "vitrine".to_string(),
		})
	}

	/// Create a builder for configuring the connection.
	pub fn builder() -> MongoBackendBuilder {
		MongoBackendBuilder::new()
	}

	/// Set the database name to use.
	pub fn with_database(mut self, database_name: &str) -> Self {
		self.database_name = database_name.to_string();
		self
	}

	fn database(&self) -> Database {
		self.client.database(&self.database_name)
	}
}

#[async_trait]
impl DocumentBackend for MongoBackend {
	async fn find_one(
		&self,
		collection: &str,
		filter: BsonDocument,
	) -> StoreResult<Option<BsonDocument>> {
		let coll = self.database().collection::<BsonDocument>(collection);

		coll.find_one(filter)
			.await
			.map_err(|e| StoreError::Execution(e.to_string()))
	}

	async fn find_many(
		&self,
		collection: &str,
		filter: BsonDocument,
	) -> StoreResult<Vec<BsonDocument>> {
		use futures::stream::TryStreamExt;

		let coll = self.database().collection::<BsonDocument>(collection);

		let cursor = coll
			.find(filter)
			.await
			.map_err(|e| StoreError::Execution(e.to_string()))?;

		cursor
			.try_collect()
			.await
			.map_err(|e| StoreError::Execution(e.to_string()))
	}

	async fn insert_one(&self, collection: &str, document: BsonDocument) -> StoreResult<()> {
		let coll = self.database().collection::<BsonDocument>(collection);

		coll.insert_one(document)
			.await
			.map_err(|e| StoreError::Execution(e.to_string()))?;

		Ok(())
	}

	async fn replace_one(
		&self,
		collection: &str,
		filter: BsonDocument,
		document: BsonDocument,
		upsert: bool,
	) -> StoreResult<bool> {
		let coll = self.database().collection::<BsonDocument>(collection);

		let result = coll
			.replace_one(filter, document)
			.upsert(upsert)
			.await
			.map_err(|e| StoreError::Execution(e.to_string()))?;

		Ok(result.modified_count > 0 || result.upserted_id.is_some())
	}

	async fn delete_one(&self, collection: &str, filter: BsonDocument) -> StoreResult<bool> {
		let coll = self.database().collection::<BsonDocument>(collection);

		let result = coll
			.delete_one(filter)
			.await
			.map_err(|e| StoreError::Execution(e.to_string()))?;

		Ok(result.deleted_count > 0)
	}

	async fn count(&self, collection: &str, filter: BsonDocument) -> StoreResult<u64> {
		let coll = self.database().collection::<BsonDocument>(collection);

		coll.count_documents(filter)
			.await
			.map_err(|e| StoreError::Execution(e.to_string()))
	}

	async fn health_check(&self) -> StoreResult<()> {
		self.database()
			.run_command(bson::doc! { "ping": 1 })
			.await
			.map_err(|e| StoreError::Connection(format!("Health check failed: {}", e)))?;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_builder_default() {
		let builder = MongoBackendBuilder::new();
		assert_eq!(builder.url, "mongodb://localhost:27017");
		assert_eq!(builder.database, "vitrine");
		assert_eq!(builder.max_pool_size, None);
		assert_eq!(builder.min_pool_size, None);
	}

	#[test]
	fn test_builder_configuration() {
		let builder = MongoBackend::builder()
			.url("mongodb://db.internal:27017")
			.database("site")
			.max_pool_size(50)
			.min_pool_size(5);

		assert_eq!(builder.url, "mongodb://db.internal:27017");
		assert_eq!(builder.database, "site");
		assert_eq!(builder.max_pool_size, Some(50));
		assert_eq!(builder.min_pool_size, Some(5));
	}
}
