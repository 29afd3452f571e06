//! Tests for the content services over the in-memory backend

use std::sync::Arc;

use rstest::rstest;
use vitrine_cms::about::{AboutService, AboutUsPatch, LeaderInput};
use vitrine_cms::products::{Feature, ProductInput, ProductPatch, ProductService};
use vitrine_cms::site::{BannerInput, SiteContentPatch, SiteService};
use vitrine_core::{Error, MediaRef};
use vitrine_db::{DocumentBackend, MemoryBackend};

fn backend() -> Arc<dyn DocumentBackend> {
	Arc::new(MemoryBackend::new())
}

#[rstest]
#[tokio::test]
async fn test_singleton_first_read_creates_default() {
	let backend = backend();
	let service = SiteService::new(backend.clone());

	// First read creates the empty skeleton
	let first = service.get().await.unwrap();
	assert!(first.banners.is_empty());
	assert!(first.logo.is_empty());

	// Second read returns the same document unchanged
	let second = service.get().await.unwrap();
	assert_eq!(first, second);
}

#[rstest]
#[tokio::test]
async fn test_update_then_get_roundtrip() {
	let service = SiteService::new(backend());

	let patch = SiteContentPatch {
		logo: Some(MediaRef::new("/logo.svg", "f_logo", "/logo_t.svg")),
		clients_title: Some("Our clients".to_string()),
		..SiteContentPatch::default()
	};
	let updated = service.update(patch).await.unwrap();

	let fetched = service.get().await.unwrap();
	assert_eq!(fetched, updated);
	assert_eq!(fetched.logo.file, "/logo.svg");
	assert_eq!(fetched.clients.title, "Our clients");
}

#[rstest]
#[tokio::test]
async fn test_banner_item_operations() {
	let service = SiteService::new(backend());

	for heading in ["one", "two", "three"] {
		service
			.add_banner(BannerInput {
				heading: heading.to_string(),
				..BannerInput::default()
			})
			.await
			.unwrap();
	}

	let content = service.get().await.unwrap();
	assert_eq!(content.banners.len(), 3);

	// Reorder is a permutation
	let before: Vec<String> = content.banners.iter().map(|b| b.heading.clone()).collect();
	let reordered = service.reorder_banners(0, 2).await.unwrap();
	let after: Vec<String> = reordered.banners.iter().map(|b| b.heading.clone()).collect();
	assert_eq!(after, vec!["two", "three", "one"]);
	assert_eq!(after.len(), before.len());

	// Out-of-range reorder fails and leaves the stored array unmodified
	let err = service.reorder_banners(0, 3).await.unwrap_err();
	assert!(matches!(err, Error::Validation(_)));
	let unchanged = service.get().await.unwrap();
	let still: Vec<String> = unchanged.banners.iter().map(|b| b.heading.clone()).collect();
	assert_eq!(still, after);

	// Unknown id fails without touching the array
	let err = service
		.update_banner("no-such-id", BannerInput::default())
		.await
		.unwrap_err();
	assert_eq!(err.to_string(), "Banner not found");
	assert_eq!(service.get().await.unwrap().banners.len(), 3);
}

#[rstest]
#[tokio::test]
async fn test_delete_middle_leader_keeps_relative_order() {
	let service = AboutService::new(backend());

	for name in ["Ada", "Grace", "Edsger"] {
		service
			.add_leader(LeaderInput {
				name: name.to_string(),
				..LeaderInput::default()
			})
			.await
			.unwrap();
	}

	let about = service.get().await.unwrap();
	let middle_id = about.leadership.leaders[1].id.clone();

	let updated = service.delete_leader(&middle_id).await.unwrap();
	assert_eq!(updated.leadership.leaders.len(), 2);
	assert_eq!(updated.leadership.leaders[0].name, "Ada");
	assert_eq!(updated.leadership.leaders[1].name, "Edsger");
}

#[rstest]
#[tokio::test]
async fn test_about_patch_touches_only_named_fields() {
	let service = AboutService::new(backend());
	service
		.update(AboutUsPatch {
			title: Some("About us".to_string()),
			..AboutUsPatch::default()
		})
		.await
		.unwrap();

	let updated = service
		.update(AboutUsPatch {
			leadership_title: Some("Leadership".to_string()),
			..AboutUsPatch::default()
		})
		.await
		.unwrap();

	assert_eq!(updated.title, "About us");
	assert_eq!(updated.leadership.title, "Leadership");
}

#[rstest]
#[tokio::test]
async fn test_product_features_replaced_with_empty_list() {
	let service = ProductService::new(backend());

	let created = service
		.create(ProductInput {
			name: "Widget".to_string(),
			description: "d".to_string(),
			features: vec![Feature {
				key: "Color".to_string(),
				value: "Red".to_string(),
			}],
			thumbnail: MediaRef::default(),
			images: Vec::new(),
		})
		.await
		.unwrap();

	let updated = service
		.update(
			&created.id,
			ProductPatch {
				features: Some(Vec::new()),
				..ProductPatch::default()
			},
		)
		.await
		.unwrap();

	assert!(updated.features.is_empty());
	assert_eq!(updated.name, "Widget");
	assert_eq!(updated.description, "d");

	let fetched = service.get(&created.id).await.unwrap();
	assert!(fetched.features.is_empty());
}

#[rstest]
#[tokio::test]
async fn test_product_not_found() {
	let service = ProductService::new(backend());

	assert!(matches!(
		service.get("missing").await,
		Err(Error::NotFound(_))
	));
	assert!(matches!(
		service.update("missing", ProductPatch::default()).await,
		Err(Error::NotFound(_))
	));
	assert!(matches!(
		service.delete("missing").await,
		Err(Error::NotFound(_))
	));
}

#[rstest]
#[tokio::test]
async fn test_products_listed_oldest_first() {
	let service = ProductService::new(backend());

	for name in ["first", "second"] {
		service
			.create(ProductInput {
				name: name.to_string(),
				description: String::new(),
				features: Vec::new(),
				thumbnail: MediaRef::default(),
				images: Vec::new(),
			})
			.await
			.unwrap();
	}

	let listed = service.list().await.unwrap();
	assert_eq!(listed.len(), 2);
	assert_eq!(listed[0].name, "first");
	assert_eq!(listed[1].name, "second");
}
