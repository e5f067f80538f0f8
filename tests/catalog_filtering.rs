//! Gallery category and listing search scenarios over the static catalog.

use assimox::catalog::{GalleryItem, ItemSource, ServiceListing, StaticCatalog};
use assimox::cli::{gallery_items, listings};
use assimox::state::{CollectionView, Filter};

fn gallery() -> CollectionView<GalleryItem> {
    CollectionView::new(ItemSource::<GalleryItem>::list_items(&StaticCatalog::new()))
}

fn ids<T: assimox::catalog::Identified>(items: &[&T]) -> Vec<u32> {
    items.iter().map(|item| item.id()).collect()
}

#[test]
fn test_abstract_category_has_one_item() {
    let mut view = gallery();
    view.set_filter(Filter::category("Abstract"));
    let visible = view.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "Geometric Tensions");
}

#[test]
fn test_all_category_restores_full_collection_in_order() {
    let mut view = gallery();
    view.set_filter(Filter::category("Landscape"));
    view.set_filter(Filter::category("All"));
    assert_eq!(ids(&view.visible()), vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_every_category_only_yields_its_items() {
    let mut view = gallery();
    for category in view.categories().into_iter().skip(1) {
        view.set_filter(Filter::category(&category));
        assert!(!view.is_empty(), "{} should not be empty", category);
        assert!(view.visible().iter().all(|item| item.category == category));
    }
}

#[test]
fn test_category_change_clears_modal_focus() {
    let mut view = gallery();
    view.focus_on(2);
    assert!(view.focused_item().is_some());
    view.set_filter(Filter::category("Abstract"));
    assert_eq!(view.focus(), None);
}

#[test]
fn test_search_ac_matches_first_three_listings() {
    let catalog = StaticCatalog::new();
    let found = ItemSource::<ServiceListing>::search_items(&catalog, "AC");
    let found: Vec<u32> = found.iter().map(|l| l.id).collect();
    assert_eq!(found, vec![1, 2, 3]);
}

#[test]
fn test_search_is_case_insensitive_substring() {
    let lower: Vec<u32> = listings(Some("dahisar")).iter().map(|l| l.id).collect();
    let upper: Vec<u32> = listings(Some("DAHISAR")).iter().map(|l| l.id).collect();
    assert_eq!(lower, vec![2]);
    assert_eq!(lower, upper);
    assert!(listings(Some("plumbing")).is_empty());
    assert_eq!(listings(Some("")).len(), listings(None).len());
}

#[test]
fn test_cli_gallery_matches_view() {
    let items = gallery_items(Some("Abstract")).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "Geometric Tensions");
}

#[test]
fn test_search_result_is_exact_substring_subset() {
    let catalog = StaticCatalog::new();
    for needle in ["mumbai", "mumbai ", "  ", "West,", "ac repair", "Q"] {
        let expected: Vec<u32> = ItemSource::<ServiceListing>::list_items(&catalog)
            .iter()
            .filter(|l| {
                let needle = needle.to_lowercase();
                l.name.to_lowercase().contains(&needle)
                    || l.address.to_lowercase().contains(&needle)
                    || l.services.iter().any(|s| s.to_lowercase().contains(&needle))
            })
            .map(|l| l.id)
            .collect();
        let found: Vec<u32> = listings(Some(needle)).iter().map(|l| l.id).collect();
        assert_eq!(found, expected, "needle {:?}", needle);
    }
    assert!(listings(Some("mumbai ")).is_empty());
}
