//! About-us page content
//!
//! A singleton document: intro imagery, a list of narrative sections, and
//! the leadership block with its list of leaders.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use vitrine_core::{MediaRef, Result};
use vitrine_db::{Document, DocumentBackend, Repository, Singleton};

use crate::items::{self, Keyed};

const ABOUT_US_ID: &str = "about-us";

/// A narrative section on the about page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AboutSection {
	pub id: String,
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub description: String,
	#[serde(default)]
	pub image: MediaRef,
}

impl Keyed for AboutSection {
	fn key(&self) -> &str {
		&self.id
	}
}

/// A leadership profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Leader {
	pub id: String,
	#[serde(default)]
	pub name: String,
	#[serde(default)]
	pub designation: String,
	#[serde(default)]
	pub bio: String,
}

impl Keyed for Leader {
	fn key(&self) -> &str {
		&self.id
	}
}

/// Leadership block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Leadership {
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub description: String,
	#[serde(default)]
	pub leaders: Vec<Leader>,
}

/// The about-us singleton
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutUs {
	pub id: String,
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub background_image: MediaRef,
	#[serde(default)]
	pub sections: Vec<AboutSection>,
	#[serde(default)]
	pub leadership: Leadership,
	#[serde(default)]
	pub bottom_image: MediaRef,
}

impl Default for AboutUs {
	fn default() -> Self {
		Self {
			id: ABOUT_US_ID.to_string(),
			title: String::new(),
			background_image: MediaRef::default(),
			sections: Vec::new(),
			leadership: Leadership::default(),
			bottom_image: MediaRef::default(),
		}
	}
}

impl Document for AboutUs {
	const COLLECTION: &'static str = "about_us";

	fn id(&self) -> &str {
		&self.id
	}
}

impl Singleton for AboutUs {}

/// Partial update for the page-level fields
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AboutUsPatch {
	pub title: Option<String>,
	pub background_image: Option<MediaRef>,
	pub bottom_image: Option<MediaRef>,
	pub leadership_title: Option<String>,
	pub leadership_description: Option<String>,
}

/// Fields for a new or updated section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AboutSectionInput {
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub description: String,
	#[serde(default)]
	pub image: MediaRef,
}

/// Fields for a new or updated leader
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeaderInput {
	#[serde(default)]
	pub name: String,
	#[serde(default)]
	pub designation: String,
	#[serde(default)]
	pub bio: String,
}

/// Editing operations on the about-us singleton
pub struct AboutService {
	repo: Repository<AboutUs>,
}

impl AboutService {
	pub fn new(backend: Arc<dyn DocumentBackend>) -> Self {
		Self {
			repo: Repository::new(backend),
		}
	}

	pub async fn get(&self) -> Result<AboutUs> {
		Ok(self.repo.load_or_init().await?)
	}

	pub async fn update(&self, patch: AboutUsPatch) -> Result<AboutUs> {
		let mut about = self.get().await?;

		if let Some(title) = patch.title {
			about.title = title;
		}
		if let Some(background_image) = patch.background_image {
			about.background_image = background_image;
		}
		if let Some(bottom_image) = patch.bottom_image {
			about.bottom_image = bottom_image;
		}
		if let Some(leadership_title) = patch.leadership_title {
			about.leadership.title = leadership_title;
		}
		if let Some(leadership_description) = patch.leadership_description {
			about.leadership.description = leadership_description;
		}

		self.repo.save(&about).await?;
		Ok(about)
	}

	pub async fn add_section(&self, input: AboutSectionInput) -> Result<AboutUs> {
		let mut about = self.get().await?;
		about.sections.push(AboutSection {
			id: items::new_key(),
			title: input.title,
			description: input.description,
			image: input.image,
		});
		self.repo.save(&about).await?;
		Ok(about)
	}

	pub async fn update_section(&self, id: &str, input: AboutSectionInput) -> Result<AboutUs> {
		let mut about = self.get().await?;
		items::update_by_key(&mut about.sections, id, "Section", |section| {
			section.title = input.title;
			section.description = input.description;
			section.image = input.image;
		})?;
		self.repo.save(&about).await?;
		Ok(about)
	}

	pub async fn delete_section(&self, id: &str) -> Result<AboutUs> {
		let mut about = self.get().await?;
		items::remove_by_key(&mut about.sections, id, "Section")?;
		self.repo.save(&about).await?;
		Ok(about)
	}

	pub async fn reorder_sections(&self, from: usize, to: usize) -> Result<AboutUs> {
		let mut about = self.get().await?;
		items::move_item(&mut about.sections, from, to)?;
		self.repo.save(&about).await?;
		Ok(about)
	}

	pub async fn add_leader(&self, input: LeaderInput) -> Result<AboutUs> {
		let mut about = self.get().await?;
		about.leadership.leaders.push(Leader {
			id: items::new_key(),
			name: input.name,
			designation: input.designation,
			bio: input.bio,
		});
		self.repo.save(&about).await?;
		Ok(about)
	}

	pub async fn update_leader(&self, id: &str, input: LeaderInput) -> Result<AboutUs> {
		let mut about = self.get().await?;
		items::update_by_key(&mut about.leadership.leaders, id, "Leader", |leader| {
			leader.name = input.name;
			leader.designation = input.designation;
			leader.bio = input.bio;
		})?;
		self.repo.save(&about).await?;
		Ok(about)
	}

	pub async fn delete_leader(&self, id: &str) -> Result<AboutUs> {
		let mut about = self.get().await?;
		items::remove_by_key(&mut about.leadership.leaders, id, "Leader")?;
		self.repo.save(&about).await?;
		Ok(about)
	}

	pub async fn reorder_leaders(&self, from: usize, to: usize) -> Result<AboutUs> {
		let mut about = self.get().await?;
		items::move_item(&mut about.leadership.leaders, from, to)?;
		self.repo.save(&about).await?;
		Ok(about)
	}
}
