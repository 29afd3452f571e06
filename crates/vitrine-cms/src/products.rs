//! Product catalogue
//!
//! Products are their own collection, addressed by stable id rather than
//! array position. A product carries a key/value feature list and a gallery
//! of media references; `update` replaces exactly the fields the caller
//! supplies, so `features: []` empties the list without touching the rest.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use vitrine_core::{Error, MediaRef, Result};
use vitrine_db::{Document, DocumentBackend, Repository};

/// One key/value specification row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Feature {
	#[serde(default)]
	pub key: String,
	#[serde(default)]
	pub value: String,
}

/// A catalogue entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
	pub id: String,
	pub name: String,
	#[serde(default)]
	pub description: String,
	#[serde(default)]
	pub features: Vec<Feature>,
	#[serde(default)]
	pub thumbnail: MediaRef,
	#[serde(default)]
	pub images: Vec<MediaRef>,
	pub created_at: DateTime<Utc>,
	pub updated_at: DateTime<Utc>,
}

impl Document for Product {
	const COLLECTION: &'static str = "products";

	fn id(&self) -> &str {
		&self.id
	}
}

/// Fields for creating a product
#[derive(Debug, Clone, Deserialize)]
pub struct ProductInput {
	pub name: String,
	#[serde(default)]
	pub description: String,
	#[serde(default)]
	pub features: Vec<Feature>,
	#[serde(default)]
	pub thumbnail: MediaRef,
	#[serde(default)]
	pub images: Vec<MediaRef>,
}

/// Partial update; absent fields keep their stored value
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductPatch {
	pub name: Option<String>,
	pub description: Option<String>,
	pub features: Option<Vec<Feature>>,
	pub thumbnail: Option<MediaRef>,
	pub images: Option<Vec<MediaRef>>,
}

/// CRUD over the product collection
pub struct ProductService {
	repo: Repository<Product>,
}

impl ProductService {
	pub fn new(backend: Arc<dyn DocumentBackend>) -> Self {
		Self {
			repo: Repository::new(backend),
		}
	}

	/// All products, oldest first.
	pub async fn list(&self) -> Result<Vec<Product>> {
		let mut products = self.repo.list().await?;
		products.sort_by(|a, b| a.created_at.cmp(&b.created_at));
		Ok(products)
	}

	/// Fetch one product by id.
	pub async fn get(&self, id: &str) -> Result<Product> {
		self.repo
			.get(id)
			.await?
			.ok_or_else(|| Error::not_found("Product"))
	}

	/// Create a product.
	pub async fn create(&self, input: ProductInput) -> Result<Product> {
		if input.name.trim().is_empty() {
			return Err(Error::Validation("product name must not be empty".to_string()));
		}

		let now = Utc::now();
		let product = Product {
			id: Uuid::new_v4().simple().to_string(),
			name: input.name,
			description: input.description,
			features: input.features,
			thumbnail: input.thumbnail,
			images: input.images,
			created_at: now,
			updated_at: now,
		};

		self.repo.insert(&product).await?;
		Ok(product)
	}

	/// Apply a partial update and replace the stored document.
	pub async fn update(&self, id: &str, patch: ProductPatch) -> Result<Product> {
		let mut product = self.get(id).await?;

		if let Some(name) = patch.name {
			if name.trim().is_empty() {
				return Err(Error::Validation("product name must not be empty".to_string()));
			}
			product.name = name;
		}
		if let Some(description) = patch.description {
			product.description = description;
		}
		if let Some(features) = patch.features {
			product.features = features;
		}
		if let Some(thumbnail) = patch.thumbnail {
			product.thumbnail = thumbnail;
		}
		if let Some(images) = patch.images {
			product.images = images;
		}
		product.updated_at = Utc::now();

		self.repo.save(&product).await?;
		Ok(product)
	}

	/// Delete a product by id.
	pub async fn delete(&self, id: &str) -> Result<()> {
		if self.repo.delete(id).await? {
			Ok(())
		} else {
			Err(Error::not_found("Product"))
		}
	}
}
