//! Output helpers shared by the CLI commands.

use crate::catalog::{GalleryItem, ServiceListing};

/// Print a success message with a checkmark prefix.
pub fn print_success(msg: &str) {
    println!("\u{2713} {}", msg);
}

/// Print an error message with an X prefix to stderr.
pub fn print_error(msg: &str) {
    eprintln!("\u{2717} {}", msg);
}

pub fn print_warning(msg: &str) {
    println!("\u{26A0}\u{FE0F} {}", msg);
}

pub fn print_info(msg: &str) {
    println!("\u{2139}\u{FE0F} {}", msg);
}

/// `#1  Abstract Sculpture Study by Elena Moraitis (Contemporary, 2023)`
pub fn format_gallery_item(item: &GalleryItem) -> String {
    format!(
        "#{:<2} {} by {} ({}, {})",
        item.id, item.title, item.artist, item.category, item.date
    )
}

/// Multi-line provider summary: name with badges, rating, address, phone
/// and service tags.
pub fn format_listing(listing: &ServiceListing) -> String {
    let badges = listing.badges();
    let badges = if badges.is_empty() {
        String::new()
    } else {
        format!(" [{}]", badges.join(", "))
    };
    format!(
        "{}{}\n  {:.1} \u{2605} ({} ratings)\n  {}\n  {}\n  {}",
        listing.name,
        badges,
        listing.rating,
        listing.review_count,
        listing.address,
        listing.phone,
        listing.services.join(" \u{00B7} ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::{GALLERY_ITEMS, LISTINGS};

    #[test]
    fn test_format_listing_shows_badges_and_services() {
        let text = format_listing(&LISTINGS[0]);
        assert!(text.starts_with("Urban Expert Service"));
        assert!(text.contains("AC Repair & Services"));
        assert!(text.contains("Borivali"));
    }

    #[test]
    fn test_format_gallery_item() {
        let line = format_gallery_item(&GALLERY_ITEMS[0]);
        assert!(line.starts_with("#1 "));
        assert!(line.contains(GALLERY_ITEMS[0].title));
    }
}
