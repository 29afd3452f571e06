//! # Vitrine CMS
//!
//! The content model and editing services for the marketing site.
//!
//! ## Architecture
//!
//! ```text
//! vitrine-cms
//! ├── items    - ordered sub-item lists: id-addressed CRUD, splice reorder
//! ├── site     - SiteContent singleton (logo, banners, clients, contact, footer)
//! ├── about    - AboutUs singleton (sections, leadership, imagery)
//! ├── products - product collection with key/value feature lists
//! ├── showcase - projects/services/testimonials/stats section singletons
//! └── pages    - the page builder: typed sections, ordering, publish flow
//! ```
//!
//! Every service follows one contract: load the document (creating the
//! default skeleton on first read for singletons), mutate in memory, replace
//! the whole document, and hand the updated entity back. Failures surface as
//! [`vitrine_core::Error`]; the HTTP layer folds them into the
//! `{success, ...}` envelope.

pub mod about;
pub mod items;
pub mod pages;
pub mod products;
pub mod showcase;
pub mod site;

pub mod prelude {
	//! Convenient re-exports of commonly used items

	pub use crate::about::{AboutService, AboutUs};
	pub use crate::pages::{CustomPage, PageSection, PageService, SectionBody, SectionKind};
	pub use crate::products::{Product, ProductService};
	pub use crate::showcase::{SectionService, ShowcaseSection};
	pub use crate::site::{SiteContent, SiteService};
}
