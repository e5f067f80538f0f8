//! Record types for the brochure content
//!
//! All records are static: they are built once from the fixtures and never
//! mutated, so every text field is a `&'static str`.

use chrono::NaiveDate;
use serde::Serialize;

/// Anything that can be matched by the free-text search box.
pub trait Searchable {
    /// Fields inspected by a text search, in display order.
    fn search_fields(&self) -> Vec<&str>;

    /// Case-insensitive substring match over every search field.
    ///
    /// Only the empty needle matches everything; whitespace is matched
    /// literally like any other character.
    fn matches_text(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Records that belong to exactly one category.
pub trait Categorized {
    fn category(&self) -> &str;
}

/// Records with an id that is unique within their fixture array.
pub trait Identified {
    fn id(&self) -> u32;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GalleryItem {
    pub id: u32,
    pub image: &'static str,
    pub title: &'static str,
    pub artist: &'static str,
    /// Year (or free text) the work was made
    pub date: &'static str,
    pub category: &'static str,
}

impl GalleryItem {
    /// One-line description of the work's category shown in the modal.
    pub fn blurb(&self) -> String {
        let quality = match self.category {
            "Abstract" => "non-representational forms",
            "Contemporary" => "bold experimentation",
            "Classical" => "masterful technique",
            "Photography" => "powerful composition",
            "Landscape" => "atmospheric quality",
            _ => "unique style",
        };
        format!(
            "This artwork exemplifies the {} movement's characteristics with its {}.",
            self.category.to_lowercase(),
            quality
        )
    }
}

impl Categorized for GalleryItem {
    fn category(&self) -> &str {
        self.category
    }
}

impl Searchable for GalleryItem {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title, self.artist, self.category]
    }
}

impl Identified for GalleryItem {
    fn id(&self) -> u32 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceListing {
    pub id: u32,
    pub name: &'static str,
    pub rating: f32,
    pub review_count: u32,
    pub address: &'static str,
    pub services: &'static [&'static str],
    pub phone: &'static str,
    pub images: &'static [&'static str],
    pub trusted: bool,
    pub verified: bool,
    pub top_search: bool,
}

impl ServiceListing {
    /// Badges in display order.
    pub fn badges(&self) -> Vec<&'static str> {
        let mut badges = Vec::new();
        if self.trusted {
            badges.push("Trust");
        }
        if self.verified {
            badges.push("Verified");
        }
        if self.top_search {
            badges.push("Top Search");
        }
        badges
    }

    /// WhatsApp deep link for the listing's phone number.
    pub fn whatsapp_link(&self) -> String {
        let digits: String = self.phone.chars().filter(char::is_ascii_digit).collect();
        format!("https://wa.me/{}", digits)
    }
}

impl Searchable for ServiceListing {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name, self.address];
        fields.extend(self.services.iter().copied());
        fields
    }
}

impl Identified for ServiceListing {
    fn id(&self) -> u32 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Testimonial {
    pub id: u32,
    pub service: &'static str,
    pub name: &'static str,
    /// ISO date, `YYYY-MM-DD`
    pub date: &'static str,
    /// 1..=5
    pub rating: u8,
    pub image: &'static str,
    pub content: &'static str,
}

impl Testimonial {
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date, "%Y-%m-%d").ok()
    }

    /// Date as "Apr 28, 2025"; unparsable dates are shown as-is.
    pub fn formatted_date(&self) -> String {
        self.parsed_date()
            .map(|d| d.format("%b %-d, %Y").to_string())
            .unwrap_or_else(|| self.date.to_string())
    }

    /// Initials used in place of an avatar, e.g. "VS" for "Vijay Singh".
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// Five-slot star row, filled up to the rating.
    pub fn stars(&self) -> String {
        let filled = usize::from(self.rating.min(5));
        format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
    }
}

impl Identified for Testimonial {
    fn id(&self) -> u32 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct City {
    pub id: u32,
    pub name: &'static str,
    pub image: &'static str,
    pub is_new: bool,
}

impl Identified for City {
    fn id(&self) -> u32 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoEvent {
    pub id: u32,
    pub title: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub thumbnail: &'static str,
    pub video_url: Option<&'static str>,
    pub instructor: Option<&'static str>,
    pub organizer: Option<&'static str>,
    pub featured: bool,
}

impl VideoEvent {
    /// "Instructor: ..." or "Organized by ..." line, when either is known.
    pub fn credit(&self) -> Option<String> {
        match (self.instructor, self.organizer) {
            (Some(instructor), _) => Some(format!("Instructor: {}", instructor)),
            (None, Some(organizer)) => Some(format!("Organized by {}", organizer)),
            (None, None) => None,
        }
    }
}

impl Identified for VideoEvent {
    fn id(&self) -> u32 {
        self.id
    }
}

/// A tab on the home page's services section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceGroup {
    /// Tab key ("ac", "washing", ...)
    pub key: &'static str,
    /// Section heading ("AC Services")
    pub title: &'static str,
    /// Short tab label ("AC")
    pub tab_label: &'static str,
    pub services: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactInfo {
    pub phone: &'static str,
    pub whatsapp: &'static str,
    pub email: &'static str,
    pub address: &'static str,
    pub socials: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceArea {
    pub name: &'static str,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentPost {
    pub title: &'static str,
    pub date: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FooterContent {
    pub brand: &'static str,
    pub tagline: &'static str,
    pub address: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub service_areas: &'static [ServiceArea],
    pub services: &'static [&'static str],
    pub recent_posts: &'static [RecentPost],
    pub copyright: &'static str,
}
