//! Filterable collection view with a focused (expanded) item.
//!
//! Backs the gallery grid and the service-provider listing. The view keeps
//! the full collection and recomputes the visible subsequence whenever the
//! filter changes; indices handed out by the view always refer to the
//! *filtered* list.

use crate::catalog::{Categorized, Identified, Searchable};
use tracing::debug;

/// Label of the pseudo-category that shows everything.
pub const ALL_CATEGORY: &str = "All";

/// Which records of a collection are visible.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    /// Exact match on the record's category.
    Category(String),
    /// Case-insensitive substring match over the record's search fields.
    Text(String),
}

impl Filter {
    /// Category filter, mapping the "All" label back to [`Filter::All`].
    pub fn category(name: &str) -> Self {
        if name == ALL_CATEGORY {
            Filter::All
        } else {
            Filter::Category(name.to_string())
        }
    }

    /// Text filter; the empty needle collapses to [`Filter::All`].
    pub fn text(needle: &str) -> Self {
        if needle.is_empty() {
            Filter::All
        } else {
            Filter::Text(needle.to_string())
        }
    }
}

/// Indices of `items` selected by `filter`, in original order.
pub fn filter_indices<T: Searchable + Categorized>(items: &[T], filter: &Filter) -> Vec<usize> {
    match filter {
        Filter::All => (0..items.len()).collect(),
        Filter::Category(category) => positions(items, |item| item.category() == category),
        Filter::Text(needle) => positions(items, |item| item.matches_text(needle)),
    }
}

fn positions<T>(items: &[T], pred: impl Fn(&T) -> bool) -> Vec<usize> {
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| pred(item))
        .map(|(i, _)| i)
        .collect()
}

#[derive(Debug, Clone)]
pub struct CollectionView<T> {
    items: Vec<T>,
    filter: Filter,
    /// Positions in `items` that pass the filter
    visible: Vec<usize>,
    /// Keyboard cursor within the filtered list
    selected: usize,
    /// Expanded item within the filtered list (modal / detail)
    focus: Option<usize>,
}

impl<T> CollectionView<T> {
    pub fn new(items: Vec<T>) -> Self {
        let visible = (0..items.len()).collect();
        Self {
            items,
            filter: Filter::All,
            visible,
            selected: 0,
            focus: None,
        }
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    /// Filtered records, in original order.
    pub fn visible(&self) -> Vec<&T> {
        self.visible.iter().map(|&i| &self.items[i]).collect()
    }

    /// Number of records that pass the filter.
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    /// Record at `index` of the filtered list.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.visible.get(index).map(|&i| &self.items[i])
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&T> {
        self.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if !self.visible.is_empty() {
            self.selected = (self.selected + 1).min(self.visible.len() - 1);
        }
    }

    pub fn select_by(&mut self, delta: isize) {
        if self.visible.is_empty() {
            return;
        }
        let max = self.visible.len() - 1;
        self.selected = self.selected.saturating_add_signed(delta).min(max);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.visible.len().saturating_sub(1);
    }

    pub fn focus(&self) -> Option<usize> {
        self.focus
    }

    pub fn focused_item(&self) -> Option<&T> {
        self.focus.and_then(|i| self.get(i))
    }

    /// Expand the item at `index`; out-of-range indices are ignored.
    pub fn focus_on(&mut self, index: usize) {
        if index < self.visible.len() {
            self.focus = Some(index);
            self.selected = index;
        }
    }

    /// Expand the item under the keyboard cursor.
    pub fn focus_selected(&mut self) {
        self.focus_on(self.selected);
    }

    pub fn clear_focus(&mut self) {
        self.focus = None;
    }

    /// Move focus forward, wrapping. No-op without focus or items.
    pub fn focus_next(&mut self) {
        let len = self.visible.len();
        if let (Some(current), true) = (self.focus, len > 0) {
            let next = (current + 1) % len;
            self.focus = Some(next);
            self.selected = next;
        }
    }

    /// Move focus backward, wrapping. No-op without focus or items.
    pub fn focus_prev(&mut self) {
        let len = self.visible.len();
        if let (Some(current), true) = (self.focus, len > 0) {
            let prev = (current + len - 1) % len;
            self.focus = Some(prev);
            self.selected = prev;
        }
    }

    fn apply(&mut self, filter: Filter, visible: Vec<usize>) {
        debug!(?filter, visible = visible.len(), "Collection filter changed");
        self.filter = filter;
        self.visible = visible;
        self.selected = 0;
        self.focus = None;
    }
}

impl<T: Searchable + Categorized> CollectionView<T> {
    /// Replace the filter. Always clears focus and resets the cursor.
    pub fn set_filter(&mut self, filter: Filter) {
        let visible = filter_indices(&self.items, &filter);
        self.apply(filter, visible);
    }

    /// "All" followed by each distinct category in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut categories = vec![ALL_CATEGORY.to_string()];
        for item in &self.items {
            if !categories.iter().any(|c| c == item.category()) {
                categories.push(item.category().to_string());
            }
        }
        categories
    }

    /// Label of the active category ("All" unless a category filter is set).
    pub fn active_category(&self) -> &str {
        match &self.filter {
            Filter::Category(c) => c,
            _ => ALL_CATEGORY,
        }
    }
}

impl<T: Identified> CollectionView<T> {
    /// Show the records a source returned for `needle`, matched by id.
    pub fn show_matches(&mut self, needle: &str, matches: &[T]) {
        let filter = Filter::text(needle);
        let visible = match &filter {
            Filter::All => (0..self.items.len()).collect(),
            _ => positions(&self.items, |item| {
                matches.iter().any(|m| m.id() == item.id())
            }),
        };
        self.apply(filter, visible);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{fixtures, ItemSource, ServiceListing, StaticCatalog};

    fn search(view: &mut CollectionView<ServiceListing>, needle: &str) {
        let matches = ItemSource::<ServiceListing>::search_items(&StaticCatalog::new(), needle);
        view.show_matches(needle, &matches);
    }

    fn gallery() -> CollectionView<crate::catalog::GalleryItem> {
        CollectionView::new(fixtures::GALLERY_ITEMS.to_vec())
    }

    #[test]
    fn test_every_category_yields_only_its_items() {
        let mut view = gallery();
        for category in view.categories().into_iter().skip(1) {
            view.set_filter(Filter::category(&category));
            assert!(!view.is_empty());
            assert!(view.visible().iter().all(|i| i.category == category));
        }
    }

    #[test]
    fn test_categories_in_first_seen_order() {
        let view = gallery();
        assert_eq!(
            view.categories(),
            vec![
                "All",
                "Contemporary",
                "Landscape",
                "Classical",
                "Modern",
                "Photography",
                "Abstract"
            ]
        );
    }

    #[test]
    fn test_filter_change_clears_focus() {
        let mut view = gallery();
        view.focus_on(3);
        assert_eq!(view.focused_item().map(|i| i.id), Some(4));
        view.set_filter(Filter::category("Abstract"));
        assert_eq!(view.focus(), None);
        assert_eq!(view.selected(), 0);
    }

    #[test]
    fn test_focus_wraps_both_ways() {
        let mut view = gallery();
        view.focus_on(5);
        view.focus_next();
        assert_eq!(view.focus(), Some(0));
        view.focus_prev();
        assert_eq!(view.focus(), Some(5));
    }

    #[test]
    fn test_focus_navigation_without_focus_is_noop() {
        let mut view = gallery();
        view.focus_next();
        view.focus_prev();
        assert_eq!(view.focus(), None);
    }

    #[test]
    fn test_empty_result_is_safe() {
        let mut view = CollectionView::new(fixtures::LISTINGS.to_vec());
        search(&mut view, "zzz");
        assert!(view.is_empty());
        view.focus_on(0);
        view.focus_next();
        view.focus_prev();
        view.select_next();
        view.select_by(3);
        assert_eq!(view.focus(), None);
        assert!(view.selected_item().is_none());
    }

    #[test]
    fn test_search_matches_service_tags() {
        let mut view = CollectionView::new(fixtures::LISTINGS.to_vec());
        search(&mut view, "installation");
        let names: Vec<_> = view.visible().iter().map(|l| l.name).collect();
        assert_eq!(names, vec!["Cool Comfort Solutions"]);
        search(&mut view, "");
        assert_eq!(view.len(), 3);
        assert_eq!(view.filter(), &Filter::All);
    }

    #[test]
    fn test_whitespace_in_needle_is_literal() {
        let mut view = CollectionView::new(fixtures::LISTINGS.to_vec());
        search(&mut view, "mumbai ");
        assert!(view.is_empty());
        search(&mut view, "  ");
        assert!(view.is_empty());
        assert_eq!(view.filter(), &Filter::Text("  ".to_string()));
        search(&mut view, "mumbai");
        assert_eq!(view.len(), 3);
    }

    #[test]
    fn test_show_matches_keeps_catalog_order() {
        let listings = fixtures::LISTINGS.to_vec();
        let mut view = CollectionView::new(listings.clone());
        view.show_matches("x", &[listings[2].clone(), listings[0].clone()]);
        let ids: Vec<u32> = view.visible().iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 3]);
        view.show_matches("", &[]);
        assert_eq!(view.len(), 3);
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut view = gallery();
        view.select_by(100);
        assert_eq!(view.selected(), 5);
        view.select_by(-100);
        assert_eq!(view.selected(), 0);
        view.select_last();
        view.select_next();
        assert_eq!(view.selected(), 5);
    }
}
