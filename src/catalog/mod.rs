//! Static brochure content behind a fetch-style interface
//!
//! Screens never reach into the fixture arrays directly: they ask an
//! [`ItemSource`] for records, so the static catalog can later be swapped for
//! a remote one without touching presentation code.

pub mod fixtures;
pub mod model;

pub use model::{
    Categorized, City, ContactInfo, FooterContent, GalleryItem, Identified, Searchable,
    ServiceGroup, ServiceListing, Testimonial, VideoEvent,
};

use tracing::debug;

/// Fetch-style access to a collection of records.
pub trait ItemSource<T: Clone> {
    /// Every record, in catalog order.
    fn list_items(&self) -> Vec<T>;

    /// Records matching a case-insensitive text search, in catalog order.
    fn search_items(&self, needle: &str) -> Vec<T>
    where
        T: Searchable,
    {
        let items: Vec<T> = self
            .list_items()
            .into_iter()
            .filter(|item| item.matches_text(needle))
            .collect();
        debug!(needle = %needle, matched = items.len(), "Catalog search");
        items
    }
}

/// Catalog backed by the compiled-in fixtures.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCatalog;

impl StaticCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl ItemSource<GalleryItem> for StaticCatalog {
    fn list_items(&self) -> Vec<GalleryItem> {
        fixtures::GALLERY_ITEMS.to_vec()
    }
}

impl ItemSource<ServiceListing> for StaticCatalog {
    fn list_items(&self) -> Vec<ServiceListing> {
        fixtures::LISTINGS.to_vec()
    }
}

impl ItemSource<Testimonial> for StaticCatalog {
    fn list_items(&self) -> Vec<Testimonial> {
        fixtures::TESTIMONIALS.to_vec()
    }
}

impl ItemSource<City> for StaticCatalog {
    fn list_items(&self) -> Vec<City> {
        fixtures::CITIES.to_vec()
    }
}

impl ItemSource<VideoEvent> for StaticCatalog {
    fn list_items(&self) -> Vec<VideoEvent> {
        fixtures::EVENTS.to_vec()
    }
}

impl ItemSource<ServiceGroup> for StaticCatalog {
    fn list_items(&self) -> Vec<ServiceGroup> {
        fixtures::SERVICE_GROUPS.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_preserves_catalog_order() {
        let items: Vec<GalleryItem> = StaticCatalog::new().list_items();
        let ids: Vec<u32> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_search_listings_by_address() {
        let found: Vec<ServiceListing> = StaticCatalog::new().search_items("borivali");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Urban Expert Service");
    }

    #[test]
    fn test_search_with_no_hits_is_empty() {
        let found: Vec<ServiceListing> = StaticCatalog::new().search_items("plumbing");
        assert!(found.is_empty());
    }
}
