//! Shared application state

use std::sync::Arc;

use vitrine_auth::{SessionSigner, UserManager};
use vitrine_cms::about::AboutService;
use vitrine_cms::pages::PageService;
use vitrine_cms::products::ProductService;
use vitrine_cms::showcase::SectionService;
use vitrine_cms::site::SiteService;
use vitrine_conf::Settings;
use vitrine_core::Result;
use vitrine_db::DocumentBackend;

use crate::cache::ResponseCache;

/// Everything the handlers need, shared behind one `Arc`
pub struct AppState {
	pub site: SiteService,
	pub about: AboutService,
	pub products: ProductService,
	pub sections: SectionService,
	pub pages: PageService,
	pub users: UserManager,
	pub signer: SessionSigner,
	pub cache: ResponseCache,
	pub session_ttl_secs: u64,
}

impl AppState {
	/// Wire the services over one backend.
	pub fn new(backend: Arc<dyn DocumentBackend>, settings: &Settings) -> Result<Self> {
		Ok(Self {
			site: SiteService::new(backend.clone()),
			about: AboutService::new(backend.clone()),
			products: ProductService::new(backend.clone()),
			sections: SectionService::new(backend.clone()),
			pages: PageService::new(backend.clone()),
			users: UserManager::new(backend),
			signer: SessionSigner::new(&settings.secret_key, settings.session_ttl_secs)?,
			cache: ResponseCache::new(),
			session_ttl_secs: settings.session_ttl_secs,
		})
	}
}
