// Component-based architecture for the brochure pages

pub mod auth_form;
pub mod component;
pub mod footer;
pub mod gallery;
pub mod header;
pub mod help_overlay;
pub mod hero;
pub mod latest_videos;
pub mod message_box;
pub mod our_area;
pub mod page;
pub mod service_card;
pub mod services;
pub mod testimonials;

pub use component::{Component, ComponentAction};
pub use footer::Footer;
pub use header::{Header, HeaderMenu};
pub use page::ScrollPage;
