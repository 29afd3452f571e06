//! Showcase sections
//!
//! Projects, services, testimonials, and stats each live in their own
//! singleton document: a heading pair plus an ordered item list. The four
//! sections share one generic service; each section type describes its item
//! shape through [`ShowcaseSection`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use vitrine_core::{MediaRef, Result};
use vitrine_db::{Document, DocumentBackend, Repository, Singleton};

use crate::items::{self, Keyed};

/// A section singleton carrying an ordered item list
pub trait ShowcaseSection: Singleton {
	/// The item type stored in the section.
	type Item: Keyed + Send + Sync;

	/// Caller-supplied fields for a new or updated item.
	type Input: DeserializeOwned + Send;

	/// Name used in not-found messages ("Project", "Stat", ...).
	const ITEM_NAME: &'static str;

	fn title_mut(&mut self) -> &mut String;
	fn subtitle_mut(&mut self) -> &mut String;
	fn items_mut(&mut self) -> &mut Vec<Self::Item>;

	/// Build a fresh item (with a generated id) from input fields.
	fn build_item(input: Self::Input) -> Self::Item;

	/// Replace an existing item's fields, keeping its id.
	fn apply_input(item: &mut Self::Item, input: Self::Input);
}

/// Heading update shared by all four sections
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HeadingPatch {
	pub title: Option<String>,
	pub subtitle: Option<String>,
}

/// Generic editing operations over any showcase section
pub struct SectionService {
	backend: Arc<dyn DocumentBackend>,
}

impl SectionService {
	pub fn new(backend: Arc<dyn DocumentBackend>) -> Self {
		Self { backend }
	}

	fn repo<S: ShowcaseSection>(&self) -> Repository<S> {
		Repository::new(self.backend.clone())
	}

	pub async fn get<S: ShowcaseSection>(&self) -> Result<S> {
		Ok(self.repo::<S>().load_or_init().await?)
	}

	pub async fn update_heading<S: ShowcaseSection>(&self, patch: HeadingPatch) -> Result<S> {
		let repo = self.repo::<S>();
		let mut section = repo.load_or_init().await?;

		if let Some(title) = patch.title {
			*section.title_mut() = title;
		}
		if let Some(subtitle) = patch.subtitle {
			*section.subtitle_mut() = subtitle;
		}

		repo.save(&section).await?;
		Ok(section)
	}

	pub async fn add_item<S: ShowcaseSection>(&self, input: S::Input) -> Result<S> {
		let repo = self.repo::<S>();
		let mut section = repo.load_or_init().await?;

		section.items_mut().push(S::build_item(input));
		repo.save(&section).await?;
		Ok(section)
	}

	pub async fn update_item<S: ShowcaseSection>(&self, id: &str, input: S::Input) -> Result<S> {
		let repo = self.repo::<S>();
		let mut section = repo.load_or_init().await?;

		items::update_by_key(section.items_mut(), id, S::ITEM_NAME, |item| {
			S::apply_input(item, input);
		})?;
		repo.save(&section).await?;
		Ok(section)
	}

	pub async fn delete_item<S: ShowcaseSection>(&self, id: &str) -> Result<S> {
		let repo = self.repo::<S>();
		let mut section = repo.load_or_init().await?;

		items::remove_by_key(section.items_mut(), id, S::ITEM_NAME)?;
		repo.save(&section).await?;
		Ok(section)
	}

	pub async fn reorder_items<S: ShowcaseSection>(&self, from: usize, to: usize) -> Result<S> {
		let repo = self.repo::<S>();
		let mut section = repo.load_or_init().await?;

		items::move_item(section.items_mut(), from, to)?;
		repo.save(&section).await?;
		Ok(section)
	}
}

// ---------------------------------------------------------------------------
// Projects

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectItem {
	pub id: String,
	#[serde(default)]
	pub name: String,
	#[serde(default)]
	pub description: String,
	#[serde(default)]
	pub media: MediaRef,
}

impl Keyed for ProjectItem {
	fn key(&self) -> &str {
		&self.id
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectInput {
	#[serde(default)]
	pub name: String,
	#[serde(default)]
	pub description: String,
	#[serde(default)]
	pub media: MediaRef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectsSection {
	pub id: String,
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub subtitle: String,
	#[serde(default)]
	pub items: Vec<ProjectItem>,
}

impl Default for ProjectsSection {
	fn default() -> Self {
		Self {
			id: "projects".to_string(),
			title: String::new(),
			subtitle: String::new(),
			items: Vec::new(),
		}
	}
}

impl Document for ProjectsSection {
	const COLLECTION: &'static str = "projects_section";

	fn id(&self) -> &str {
		&self.id
	}
}

impl Singleton for ProjectsSection {}

impl ShowcaseSection for ProjectsSection {
	type Item = ProjectItem;
	type Input = ProjectInput;

	const ITEM_NAME: &'static str = "Project";

	fn title_mut(&mut self) -> &mut String {
		&mut self.title
	}

	fn subtitle_mut(&mut self) -> &mut String {
		&mut self.subtitle
	}

	fn items_mut(&mut self) -> &mut Vec<Self::Item> {
		&mut self.items
	}

	fn build_item(input: Self::Input) -> Self::Item {
		ProjectItem {
			id: items::new_key(),
			name: input.name,
			description: input.description,
			media: input.media,
		}
	}

	fn apply_input(item: &mut Self::Item, input: Self::Input) {
		item.name = input.name;
		item.description = input.description;
		item.media = input.media;
	}
}

// ---------------------------------------------------------------------------
// Services

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceItem {
	pub id: String,
	#[serde(default)]
	pub name: String,
	#[serde(default)]
	pub description: String,
	#[serde(default)]
	pub media: MediaRef,
}

impl Keyed for ServiceItem {
	fn key(&self) -> &str {
		&self.id
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceInput {
	#[serde(default)]
	pub name: String,
	#[serde(default)]
	pub description: String,
	#[serde(default)]
	pub media: MediaRef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServicesSection {
	pub id: String,
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub subtitle: String,
	#[serde(default)]
	pub items: Vec<ServiceItem>,
}

impl Default for ServicesSection {
	fn default() -> Self {
		Self {
			id: "services".to_string(),
			title: String::new(),
			subtitle: String::new(),
			items: Vec::new(),
		}
	}
}

impl Document for ServicesSection {
	const COLLECTION: &'static str = "services_section";

	fn id(&self) -> &str {
		&self.id
	}
}

impl Singleton for ServicesSection {}

impl ShowcaseSection for ServicesSection {
	type Item = ServiceItem;
	type Input = ServiceInput;

	const ITEM_NAME: &'static str = "Service";

	fn title_mut(&mut self) -> &mut String {
		&mut self.title
	}

	fn subtitle_mut(&mut self) -> &mut String {
		&mut self.subtitle
	}

	fn items_mut(&mut self) -> &mut Vec<Self::Item> {
		&mut self.items
	}

	fn build_item(input: Self::Input) -> Self::Item {
		ServiceItem {
			id: items::new_key(),
			name: input.name,
			description: input.description,
			media: input.media,
		}
	}

	fn apply_input(item: &mut Self::Item, input: Self::Input) {
		item.name = input.name;
		item.description = input.description;
		item.media = input.media;
	}
}

// ---------------------------------------------------------------------------
// Testimonials

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestimonialItem {
	pub id: String,
	#[serde(default)]
	pub author: String,
	#[serde(default)]
	pub role: String,
	#[serde(default)]
	pub quote: String,
	#[serde(default)]
	pub media: MediaRef,
}

impl Keyed for TestimonialItem {
	fn key(&self) -> &str {
		&self.id
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TestimonialInput {
	#[serde(default)]
	pub author: String,
	#[serde(default)]
	pub role: String,
	#[serde(default)]
	pub quote: String,
	#[serde(default)]
	pub media: MediaRef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestimonialsSection {
	pub id: String,
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub subtitle: String,
	#[serde(default)]
	pub items: Vec<TestimonialItem>,
}

impl Default for TestimonialsSection {
	fn default() -> Self {
		Self {
			id: "testimonials".to_string(),
			title: String::new(),
			subtitle: String::new(),
			items: Vec::new(),
		}
	}
}

impl Document for TestimonialsSection {
	const COLLECTION: &'static str = "testimonials_section";

	fn id(&self) -> &str {
		&self.id
	}
}

impl Singleton for TestimonialsSection {}

impl ShowcaseSection for TestimonialsSection {
	type Item = TestimonialItem;
	type Input = TestimonialInput;

	const ITEM_NAME: &'static str = "Testimonial";

	fn title_mut(&mut self) -> &mut String {
		&mut self.title
	}

	fn subtitle_mut(&mut self) -> &mut String {
		&mut self.subtitle
	}

	fn items_mut(&mut self) -> &mut Vec<Self::Item> {
		&mut self.items
	}

	fn build_item(input: Self::Input) -> Self::Item {
		TestimonialItem {
			id: items::new_key(),
			author: input.author,
			role: input.role,
			quote: input.quote,
			media: input.media,
		}
	}

	fn apply_input(item: &mut Self::Item, input: Self::Input) {
		item.author = input.author;
		item.role = input.role;
		item.quote = input.quote;
		item.media = input.media;
	}
}

// ---------------------------------------------------------------------------
// Stats

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatItem {
	pub id: String,
	#[serde(default)]
	pub label: String,
	#[serde(default)]
	pub value: String,
}

impl Keyed for StatItem {
	fn key(&self) -> &str {
		&self.id
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatInput {
	#[serde(default)]
	pub label: String,
	#[serde(default)]
	pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSection {
	pub id: String,
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub subtitle: String,
	#[serde(default)]
	pub items: Vec<StatItem>,
}

impl Default for StatsSection {
	fn default() -> Self {
		Self {
			id: "stats".to_string(),
			title: String::new(),
			subtitle: String::new(),
			items: Vec::new(),
		}
	}
}

impl Document for StatsSection {
	const COLLECTION: &'static str = "stats_section";

	fn id(&self) -> &str {
		&self.id
	}
}

impl Singleton for StatsSection {}

impl ShowcaseSection for StatsSection {
	type Item = StatItem;
	type Input = StatInput;

	const ITEM_NAME: &'static str = "Stat";

	fn title_mut(&mut self) -> &mut String {
		&mut self.title
	}

	fn subtitle_mut(&mut self) -> &mut String {
		&mut self.subtitle
	}

	fn items_mut(&mut self) -> &mut Vec<Self::Item> {
		&mut self.items
	}

	fn build_item(input: Self::Input) -> Self::Item {
		StatItem {
			id: items::new_key(),
			label: input.label,
			value: input.value,
		}
	}

	fn apply_input(item: &mut Self::Item, input: Self::Input) {
		item.label = input.label;
		item.value = input.value;
	}
}
