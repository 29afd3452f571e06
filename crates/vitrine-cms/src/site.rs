//! Site-wide content
//!
//! One document holds everything the public shell displays: logo, the
//! banner carousel, the home about/clients/contact blocks, and the footer.
//! First read creates the empty skeleton; updates are whole-document
//! replaces of the loaded copy.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use vitrine_core::{MediaRef, Result};
use vitrine_db::{Document, DocumentBackend, Repository, Singleton};

use crate::items::{self, Keyed};

/// Well-known id of the singleton document
const SITE_CONTENT_ID: &str = "site-content";

/// A carousel banner
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Banner {
	pub id: String,
	#[serde(default)]
	pub media: MediaRef,
	#[serde(default)]
	pub heading: String,
	#[serde(default)]
	pub tagline: String,
}

impl Keyed for Banner {
	fn key(&self) -> &str {
		&self.id
	}
}

/// A client logo entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientLogo {
	pub id: String,
	#[serde(default)]
	pub media: MediaRef,
	#[serde(default)]
	pub name: String,
}

impl Keyed for ClientLogo {
	fn key(&self) -> &str {
		&self.id
	}
}

/// Home "about" teaser block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AboutBlock {
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub description: String,
	#[serde(default)]
	pub image: MediaRef,
}

/// Clients strip
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientsBlock {
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub logos: Vec<ClientLogo>,
}

/// Contact details block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactBlock {
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub address: String,
	#[serde(default)]
	pub phone: String,
	#[serde(default)]
	pub email: String,
}

/// Footer block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FooterBlock {
	#[serde(default)]
	pub text: String,
	#[serde(default)]
	pub copyright: String,
}

/// The site-content singleton
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
	pub id: String,
	#[serde(default)]
	pub logo: MediaRef,
	#[serde(default)]
	pub banners: Vec<Banner>,
	#[serde(default)]
	pub about: AboutBlock,
	#[serde(default)]
	pub clients: ClientsBlock,
	#[serde(default)]
	pub contact: ContactBlock,
	#[serde(default)]
	pub footer: FooterBlock,
}

impl Default for SiteContent {
	fn default() -> Self {
		Self {
			id: SITE_CONTENT_ID.to_string(),
			logo: MediaRef::default(),
			banners: Vec::new(),
			about: AboutBlock::default(),
			clients: ClientsBlock::default(),
			contact: ContactBlock::default(),
			footer: FooterBlock::default(),
		}
	}
}

impl Document for SiteContent {
	const COLLECTION: &'static str = "site_content";

	fn id(&self) -> &str {
		&self.id
	}
}

impl Singleton for SiteContent {}

/// Caller-supplied partial update for the singleton
///
/// Absent fields keep their stored value; banners and client logos are
/// managed through the item operations instead.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteContentPatch {
	pub logo: Option<MediaRef>,
	pub about: Option<AboutBlock>,
	pub contact: Option<ContactBlock>,
	pub footer: Option<FooterBlock>,
	pub clients_title: Option<String>,
}

/// Fields for a new or updated banner
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BannerInput {
	#[serde(default)]
	pub media: MediaRef,
	#[serde(default)]
	pub heading: String,
	#[serde(default)]
	pub tagline: String,
}

/// Fields for a new or updated client logo
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientLogoInput {
	#[serde(default)]
	pub media: MediaRef,
	#[serde(default)]
	pub name: String,
}

/// Editing operations on the site-content singleton
pub struct SiteService {
	repo: Repository<SiteContent>,
}

impl SiteService {
	pub fn new(backend: Arc<dyn DocumentBackend>) -> Self {
		Self {
			repo: Repository::new(backend),
		}
	}

	/// Load the singleton, creating the empty skeleton on first read.
	pub async fn get(&self) -> Result<SiteContent> {
		Ok(self.repo.load_or_init().await?)
	}

	/// Apply a partial update and replace the stored document.
	pub async fn update(&self, patch: SiteContentPatch) -> Result<SiteContent> {
		let mut content = self.get().await?;

		if let Some(logo) = patch.logo {
			content.logo = logo;
		}
		if let Some(about) = patch.about {
			content.about = about;
		}
		if let Some(contact) = patch.contact {
			content.contact = contact;
		}
		if let Some(footer) = patch.footer {
			content.footer = footer;
		}
		if let Some(clients_title) = patch.clients_title {
			content.clients.title = clients_title;
		}

		self.repo.save(&content).await?;
		Ok(content)
	}

	/// Append a banner.
	pub async fn add_banner(&self, input: BannerInput) -> Result<SiteContent> {
		let mut content = self.get().await?;
		content.banners.push(Banner {
			id: items::new_key(),
			media: input.media,
			heading: input.heading,
			tagline: input.tagline,
		});
		self.repo.save(&content).await?;
		Ok(content)
	}

	/// Replace a banner's fields, keeping its id and position.
	pub async fn update_banner(&self, id: &str, input: BannerInput) -> Result<SiteContent> {
		let mut content = self.get().await?;
		items::update_by_key(&mut content.banners, id, "Banner", |banner| {
			banner.media = input.media;
			banner.heading = input.heading;
			banner.tagline = input.tagline;
		})?;
		self.repo.save(&content).await?;
		Ok(content)
	}

	/// Delete a banner by id.
	pub async fn delete_banner(&self, id: &str) -> Result<SiteContent> {
		let mut content = self.get().await?;
		items::remove_by_key(&mut content.banners, id, "Banner")?;
		self.repo.save(&content).await?;
		Ok(content)
	}

	/// Move a banner from one position to another.
	pub async fn reorder_banners(&self, from: usize, to: usize) -> Result<SiteContent> {
		let mut content = self.get().await?;
		items::move_item(&mut content.banners, from, to)?;
		self.repo.save(&content).await?;
		Ok(content)
	}

	/// Append a client logo.
	pub async fn add_client_logo(&self, input: ClientLogoInput) -> Result<SiteContent> {
		let mut content = self.get().await?;
		content.clients.logos.push(ClientLogo {
			id: items::new_key(),
			media: input.media,
			name: input.name,
		});
		self.repo.save(&content).await?;
		Ok(content)
	}

	/// Replace a client logo's fields.
	pub async fn update_client_logo(&self, id: &str, input: ClientLogoInput) -> Result<SiteContent> {
		let mut content = self.get().await?;
		items::update_by_key(&mut content.clients.logos, id, "Client logo", |logo| {
			logo.media = input.media;
			logo.name = input.name;
		})?;
		self.repo.save(&content).await?;
		Ok(content)
	}

	/// Delete a client logo by id.
	pub async fn delete_client_logo(&self, id: &str) -> Result<SiteContent> {
		let mut content = self.get().await?;
		items::remove_by_key(&mut content.clients.logos, id, "Client logo")?;
		self.repo.save(&content).await?;
		Ok(content)
	}

	/// Move a client logo from one position to another.
	pub async fn reorder_client_logos(&self, from: usize, to: usize) -> Result<SiteContent> {
		let mut content = self.get().await?;
		items::move_item(&mut content.clients.logos, from, to)?;
		self.repo.save(&content).await?;
		Ok(content)
	}
}
