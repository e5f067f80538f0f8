//! Screen controllers for the application.
//!
//! One screen per route. Each screen owns its state and handles both
//! rendering and events.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                      App                               │
//! │  Header (contact bar, nav, login menu, drawer)         │
//! │  ┌────────────────────────────────────────────────┐    │
//! │  │               Screen Router                    │    │
//! │  │  match route {                                 │    │
//! │  │    Home     => home.handle_event(...)          │    │
//! │  │    Services => services.handle_event(...)      │    │
//! │  │    ...                                         │    │
//! │  │  }                                             │    │
//! │  └────────────────────────────────────────────────┘    │
//! │  Hint bar, toasts, help overlay                        │
//! └────────────────────────────────────────────────────────┘
//! ```

pub mod admin;
pub mod gallery;
pub mod home;
pub mod screen_trait;
pub mod service_listing;

pub use admin::AdminScreen;
pub use gallery::GalleryScreen;
pub use home::HomeScreen;
pub use screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
pub use service_listing::ServiceListingScreen;
