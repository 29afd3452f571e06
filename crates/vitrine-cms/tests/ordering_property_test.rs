//! Property-based tests for the ordered-list laws

use proptest::prelude::*;
use vitrine_cms::items::{Keyed, move_item};
use vitrine_cms::pages::{CustomPage, SectionKind};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct Tag(String);

impl Keyed for Tag {
	fn key(&self) -> &str {
		&self.0
	}
}

fn empty_page() -> CustomPage {
	let now = chrono::Utc::now();
	CustomPage {
		id: "p".to_string(),
		title: "p".to_string(),
		slug: "p".to_string(),
		is_published: false,
		sections: Vec::new(),
		created_at: now,
		updated_at: now,
	}
}

proptest! {
	#[test]
	fn prop_move_item_is_a_permutation(
		len in 1usize..20,
		from in 0usize..20,
		to in 0usize..20,
	) {
		prop_assume!(from < len && to < len);

		let mut items: Vec<Tag> = (0..len).map(|i| Tag(format!("k{}", i))).collect();
		let mut expected_sorted = items.clone();
		expected_sorted.sort();
		let moved_key = items[from].0.clone();

		move_item(&mut items, from, to).unwrap();

		// Same length, same elements
		prop_assert_eq!(items.len(), len);
		let mut sorted = items.clone();
		sorted.sort();
		prop_assert_eq!(sorted, expected_sorted);

		// The moved element sits at `to`
		prop_assert_eq!(items[to].0.clone(), moved_key);
	}

	#[test]
	fn prop_move_item_out_of_range_never_mutates(
		len in 0usize..10,
		from in 0usize..30,
		to in 0usize..30,
	) {
		prop_assume!(from >= len || to >= len);

		let mut items: Vec<Tag> = (0..len).map(|i| Tag(format!("k{}", i))).collect();
		let before = items.clone();

		prop_assert!(move_item(&mut items, from, to).is_err());
		prop_assert_eq!(items, before);
	}

	#[test]
	fn prop_normalize_orders_always_dense(orders in proptest::collection::vec(0usize..100, 0..20)) {
		let mut page = empty_page();
		for _ in 0..orders.len() {
			page.add_section(SectionKind::ContentSection);
		}
		for (section, order) in page.sections.iter_mut().zip(orders.iter()) {
			section.order = *order;
		}

		page.normalize_orders();
		prop_assert!(page.orders_are_dense());
	}

	#[test]
	fn prop_move_sequences_preserve_density(ops in proptest::collection::vec((0usize..10, any::<bool>()), 0..30)) {
		let mut page = empty_page();
		for _ in 0..5 {
			page.add_section(SectionKind::ContentSection);
		}

		for (index, up) in ops {
			let result = if up {
				page.move_section_up(index)
			} else {
				page.move_section_down(index)
			};
			// Boundary moves fail; density must hold either way
			let _ = result;
			prop_assert!(page.orders_are_dense());
			prop_assert_eq!(page.sections.len(), 5);
		}
	}
}
