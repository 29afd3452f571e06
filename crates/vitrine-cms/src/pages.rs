//! Page builder
//!
//! Admins compose arbitrary pages from typed section blocks. A section is a
//! tagged variant — five fixed kinds, each with its own payload struct — and
//! pages keep their sections in a dense `order = 0..N-1` sequence that the
//! renderer relies on. Editing happens on the in-memory draft; `save` sends
//! the whole ordered array to the store in one call.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use vitrine_core::{Error, MediaRef, Result};
use vitrine_db::{Document, DocumentBackend, Repository};

use crate::items::{self, Keyed};

/// The five section kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKind {
	HeaderBanner,
	ContentSection,
	GridLayout,
	ImageText,
	BottomMedia,
}

impl SectionKind {
	/// The default payload used when a section of this kind is added.
	pub fn default_body(self) -> SectionBody {
		match self {
			SectionKind::HeaderBanner => SectionBody::HeaderBanner(HeaderBanner::default()),
			SectionKind::ContentSection => SectionBody::ContentSection(ContentSection::default()),
			SectionKind::GridLayout => SectionBody::GridLayout(GridLayout::default()),
			SectionKind::ImageText => SectionBody::ImageText(ImageText::default()),
			SectionKind::BottomMedia => SectionBody::BottomMedia(BottomMedia::default()),
		}
	}
}

/// Full-width banner at the top of a page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeaderBanner {
	#[serde(default)]
	pub heading: String,
	#[serde(default)]
	pub subheading: String,
	#[serde(default)]
	pub media: MediaRef,
}

/// Rich-text block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentSection {
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub body_html: String,
}

/// One card in a grid layout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GridItem {
	#[serde(default)]
	pub id: String,
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub description: String,
	#[serde(default)]
	pub media: MediaRef,
}

impl Keyed for GridItem {
	fn key(&self) -> &str {
		&self.id
	}
}

/// Card grid
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub items: Vec<GridItem>,
}

/// Which side of the text the image sits on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageSide {
	#[default]
	Left,
	Right,
}

/// Image-beside-text block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageText {
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub body_html: String,
	#[serde(default)]
	pub media: MediaRef,
	#[serde(default)]
	pub image_side: ImageSide,
}

/// Closing media block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BottomMedia {
	#[serde(default)]
	pub media: MediaRef,
	#[serde(default)]
	pub caption: String,
}

/// Section payload, tagged by kind on the wire:
/// `{"type": "header-banner", "data": {...}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "kebab-case")]
pub enum SectionBody {
	HeaderBanner(HeaderBanner),
	ContentSection(ContentSection),
	GridLayout(GridLayout),
	ImageText(ImageText),
	BottomMedia(BottomMedia),
}

impl SectionBody {
	/// The kind tag of this payload.
	pub fn kind(&self) -> SectionKind {
		match self {
			SectionBody::HeaderBanner(_) => SectionKind::HeaderBanner,
			SectionBody::ContentSection(_) => SectionKind::ContentSection,
			SectionBody::GridLayout(_) => SectionKind::GridLayout,
			SectionBody::ImageText(_) => SectionKind::ImageText,
			SectionBody::BottomMedia(_) => SectionKind::BottomMedia,
		}
	}

	/// Render this section to an HTML fragment.
	///
	/// Plain-text fields are escaped; `body_html` fields carry
	/// editor-produced HTML and are inserted as-is.
	pub fn render_html(&self) -> String {
		match self {
			SectionBody::HeaderBanner(banner) => format!(
				r#"<section class="header-banner" style="background-image:url('{}')"><h1>{}</h1><p>{}</p></section>"#,
				escape(&banner.media.file),
				escape(&banner.heading),
				escape(&banner.subheading),
			),
			SectionBody::ContentSection(content) => format!(
				r#"<section class="content-section"><h2>{}</h2><div class="rich-text">{}</div></section>"#,
				escape(&content.title),
				content.body_html,
			),
			SectionBody::GridLayout(grid) => {
				let cards: String = grid
					.items
					.iter()
					.map(|item| {
						format!(
							r#"<div class="card"><img src="{}" alt="{}" /><h3>{}</h3><p>{}</p></div>"#,
							escape(&item.media.thumbnail),
							escape(&item.title),
							escape(&item.title),
							escape(&item.description),
						)
					})
					.collect();
				format!(
					r#"<section class="grid-layout"><h2>{}</h2><div class="grid">{}</div></section>"#,
					escape(&grid.title),
					cards,
				)
			}
			SectionBody::ImageText(block) => {
				let side = match block.image_side {
					ImageSide::Left => "image-left",
					ImageSide::Right => "image-right",
				};
				format!(
					r#"<section class="image-text {}"><img src="{}" alt="{}" /><div><h2>{}</h2><div class="rich-text">{}</div></div></section>"#,
					side,
					escape(&block.media.file),
					escape(&block.title),
					escape(&block.title),
					block.body_html,
				)
			}
			SectionBody::BottomMedia(bottom) => format!(
				r#"<section class="bottom-media"><img src="{}" alt="" /><p>{}</p></section>"#,
				escape(&bottom.media.file),
				escape(&bottom.caption),
			),
		}
	}
}

fn escape(text: &str) -> String {
	let mut out = String::with_capacity(text.len());
	for ch in text.chars() {
		match ch {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#39;"),
			_ => out.push(ch),
		}
	}
	out
}

/// One section instance on a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSection {
	pub id: String,
	pub order: usize,
	#[serde(flatten)]
	pub body: SectionBody,
}

impl Keyed for PageSection {
	fn key(&self) -> &str {
		&self.id
	}
}

/// An admin-composed page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomPage {
	pub id: String,
	pub title: String,
	pub slug: String,
	#[serde(default)]
	pub is_published: bool,
	#[serde(default)]
	pub sections: Vec<PageSection>,
	pub created_at: DateTime<Utc>,
	pub updated_at: DateTime<Utc>,
}

impl Document for CustomPage {
	const COLLECTION: &'static str = "pages";

	fn id(&self) -> &str {
		&self.id
	}
}

impl CustomPage {
	/// Append a section of `kind` with its default payload.
	pub fn add_section(&mut self, kind: SectionKind) -> &PageSection {
		let section = PageSection {
			id: items::new_key(),
			order: self.sections.len(),
			body: kind.default_body(),
		};
		self.sections.push(section);
		self.sections.last().expect("just pushed")
	}

	/// Swap the section at `index` with its predecessor, then renumber.
	pub fn move_section_up(&mut self, index: usize) -> Result<()> {
		if index == 0 || index >= self.sections.len() {
			return Err(Error::Validation(format!(
				"cannot move section at index {} up",
				index
			)));
		}
		self.sections.swap(index - 1, index);
		self.renumber();
		Ok(())
	}

	/// Swap the section at `index` with its successor, then renumber.
	pub fn move_section_down(&mut self, index: usize) -> Result<()> {
		if self.sections.len() < 2 || index >= self.sections.len() - 1 {
			return Err(Error::Validation(format!(
				"cannot move section at index {} down",
				index
			)));
		}
		self.sections.swap(index, index + 1);
		self.renumber();
		Ok(())
	}

	/// Remove the section with the given id, then renumber.
	pub fn delete_section(&mut self, id: &str) -> Result<()> {
		items::remove_by_key(&mut self.sections, id, "Section")?;
		self.renumber();
		Ok(())
	}

	/// Restore the dense `0..N-1` order invariant for any input: sort by
	/// the stored order (stable), then rewrite sequentially.
	pub fn normalize_orders(&mut self) {
		self.sections.sort_by_key(|section| section.order);
		self.renumber();
	}

	/// Whether `order` values are exactly `0..N-1` in array position.
	pub fn orders_are_dense(&self) -> bool {
		self.sections
			.iter()
			.enumerate()
			.all(|(index, section)| section.order == index)
	}

	fn renumber(&mut self) {
		for (index, section) in self.sections.iter_mut().enumerate() {
			section.order = index;
		}
	}

	/// Render the whole page body in section order.
	pub fn render_html(&self) -> String {
		self.sections
			.iter()
			.map(|section| section.body.render_html())
			.collect()
	}
}

/// Listing entry for the dashboard
#[derive(Debug, Clone, Serialize)]
pub struct PageSummary {
	pub id: String,
	pub title: String,
	pub slug: String,
	pub is_published: bool,
	pub section_count: usize,
	pub updated_at: DateTime<Utc>,
}

impl From<&CustomPage> for PageSummary {
	fn from(page: &CustomPage) -> Self {
		Self {
			id: page.id.clone(),
			title: page.title.clone(),
			slug: page.slug.clone(),
			is_published: page.is_published,
			section_count: page.sections.len(),
			updated_at: page.updated_at,
		}
	}
}

/// Normalize a title or caller-supplied slug into URL form.
pub fn slugify(input: &str) -> String {
	let mut slug = String::with_capacity(input.len());
	let mut last_was_dash = true; // suppress leading dashes
	for ch in input.chars() {
		if ch.is_ascii_alphanumeric() {
			slug.push(ch.to_ascii_lowercase());
			last_was_dash = false;
		} else if !last_was_dash {
			slug.push('-');
			last_was_dash = true;
		}
	}
	while slug.ends_with('-') {
		slug.pop();
	}
	slug
}

/// Persistence operations for pages
pub struct PageService {
	repo: Repository<CustomPage>,
}

impl PageService {
	pub fn new(backend: Arc<dyn DocumentBackend>) -> Self {
		Self {
			repo: Repository::new(backend),
		}
	}

	/// Create an unpublished page with no sections. The slug is normalized
	/// and must be unique.
	pub async fn create(&self, title: &str, slug: &str) -> Result<CustomPage> {
		if title.trim().is_empty() {
			return Err(Error::Validation("page title must not be empty".to_string()));
		}

		let slug = slugify(if slug.trim().is_empty() { title } else { slug });
		if slug.is_empty() {
			return Err(Error::Validation("slug must contain characters".to_string()));
		}

		if self.repo.exists(bson::doc! { "slug": slug.as_str() }).await? {
			return Err(Error::Duplicate(format!("page /{}", slug)));
		}

		let now = Utc::now();
		let page = CustomPage {
			id: Uuid::new_v4().simple().to_string(),
			title: title.trim().to_string(),
			slug,
			is_published: false,
			sections: Vec::new(),
			created_at: now,
			updated_at: now,
		};

		self.repo.insert(&page).await?;
		tracing::info!(slug = %page.slug, "created page");
		Ok(page)
	}

	/// Fetch one page by id.
	pub async fn get(&self, id: &str) -> Result<CustomPage> {
		self.repo
			.get(id)
			.await?
			.ok_or_else(|| Error::not_found("Page"))
	}

	/// Dashboard listing, newest first.
	pub async fn list(&self) -> Result<Vec<PageSummary>> {
		let mut pages = self.repo.list().await?;
		pages.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
		Ok(pages.iter().map(PageSummary::from).collect())
	}

	/// Replace the whole section array in one call.
	pub async fn save_sections(&self, id: &str, sections: Vec<PageSection>) -> Result<CustomPage> {
		let mut page = self.get(id).await?;
		page.sections = sections;
		page.normalize_orders();
		page.updated_at = Utc::now();

		self.repo.save(&page).await?;
		Ok(page)
	}

	/// Toggle the published flag; sections are untouched.
	pub async fn set_published(&self, id: &str, published: bool) -> Result<CustomPage> {
		let mut page = self.get(id).await?;
		page.is_published = published;

		self.repo.save(&page).await?;
		Ok(page)
	}

	/// Resolve a public slug. Unpublished and unknown slugs are both
	/// not-found, so drafts never leak.
	pub async fn resolve(&self, slug: &str) -> Result<CustomPage> {
		let found = self
			.repo
			.backend()
			.find_one(CustomPage::COLLECTION, bson::doc! { "slug": slug })
			.await
			.map_err(vitrine_core::Error::from)?;

		let page: CustomPage = match found {
			Some(document) => {
				bson::deserialize_from_document(document).map_err(|e| Error::Serialization(e.to_string()))?
			}
			None => return Err(Error::not_found("Page")),
		};

		if !page.is_published {
			return Err(Error::not_found("Page"));
		}
		Ok(page)
	}

	/// Delete a page by id.
	pub async fn delete(&self, id: &str) -> Result<()> {
		if self.repo.delete(id).await? {
			tracing::info!(page = %id, "deleted page");
			Ok(())
		} else {
			Err(Error::not_found("Page"))
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn page_with(kinds: &[SectionKind]) -> CustomPage {
		let now = Utc::now();
		let mut page = CustomPage {
			id: "p1".to_string(),
			title: "Test".to_string(),
			slug: "test".to_string(),
			is_published: false,
			sections: Vec::new(),
			created_at: now,
			updated_at: now,
		};
		for &kind in kinds {
			page.add_section(kind);
		}
		page
	}

	#[test]
	fn test_add_section_appends_with_dense_order() {
		let page = page_with(&[
			SectionKind::HeaderBanner,
			SectionKind::ContentSection,
			SectionKind::BottomMedia,
		]);

		assert!(page.orders_are_dense());
		assert_eq!(page.sections[0].body.kind(), SectionKind::HeaderBanner);
		assert_eq!(page.sections[2].body.kind(), SectionKind::BottomMedia);
	}

	#[test]
	fn test_move_section_up_and_down() {
		let mut page = page_with(&[
			SectionKind::HeaderBanner,
			SectionKind::ContentSection,
			SectionKind::BottomMedia,
		]);

		page.move_section_up(2).unwrap();
		assert_eq!(page.sections[1].body.kind(), SectionKind::BottomMedia);
		assert!(page.orders_are_dense());

		page.move_section_down(1).unwrap();
		assert_eq!(page.sections[2].body.kind(), SectionKind::BottomMedia);
		assert!(page.orders_are_dense());
	}

	#[test]
	fn test_boundary_moves_rejected() {
		let mut page = page_with(&[SectionKind::HeaderBanner, SectionKind::ContentSection]);
		let before = page.sections.clone();

		assert!(page.move_section_up(0).is_err());
		assert!(page.move_section_down(1).is_err());
		assert!(page.move_section_up(5).is_err());
		assert_eq!(page.sections, before);
	}

	#[test]
	fn test_delete_section_renumbers() {
		let mut page = page_with(&[
			SectionKind::HeaderBanner,
			SectionKind::ContentSection,
			SectionKind::BottomMedia,
		]);
		let middle_id = page.sections[1].id.clone();

		page.delete_section(&middle_id).unwrap();
		assert_eq!(page.sections.len(), 2);
		assert!(page.orders_are_dense());
		assert_eq!(page.sections[1].body.kind(), SectionKind::BottomMedia);

		assert!(page.delete_section(&middle_id).is_err());
	}

	#[test]
	fn test_normalize_orders_repairs_gaps() {
		let mut page = page_with(&[SectionKind::HeaderBanner, SectionKind::ContentSection]);
		page.sections[0].order = 7;
		page.sections[1].order = 3;

		page.normalize_orders();
		assert!(page.orders_are_dense());
		// The section that had the lower order comes first
		assert_eq!(page.sections[0].body.kind(), SectionKind::ContentSection);
	}

	#[test]
	fn test_section_wire_format() {
		let section = PageSection {
			id: "s1".to_string(),
			order: 0,
			body: SectionBody::HeaderBanner(HeaderBanner {
				heading: "Welcome".to_string(),
				..HeaderBanner::default()
			}),
		};

		let value = serde_json::to_value(&section).unwrap();
		assert_eq!(value["type"], "header-banner");
		assert_eq!(value["data"]["heading"], "Welcome");
		assert_eq!(value["order"], 0);

		let back: PageSection = serde_json::from_value(value).unwrap();
		assert_eq!(back, section);
	}

	#[test]
	fn test_render_escapes_text_fields() {
		let body = SectionBody::HeaderBanner(HeaderBanner {
			heading: "<script>alert(1)</script>".to_string(),
			subheading: String::new(),
			media: Default::default(),
		});

		let html = body.render_html();
		assert!(html.contains("&lt;script&gt;"));
		assert!(!html.contains("<script>"));
	}

	#[test]
	fn test_render_page_in_order() {
		let page = page_with(&[SectionKind::HeaderBanner, SectionKind::BottomMedia]);
		let html = page.render_html();

		let banner_pos = html.find("header-banner").unwrap();
		let bottom_pos = html.find("bottom-media").unwrap();
		assert!(banner_pos < bottom_pos);
	}

	#[test]
	fn test_slugify() {
		assert_eq!(slugify("Our Projects"), "our-projects");
		assert_eq!(slugify("  Hello,  World!  "), "hello-world");
		assert_eq!(slugify("Ünicode — dash"), "nicode-dash");
		assert_eq!(slugify("!!!"), "");
	}
}
