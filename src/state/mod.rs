//! UI state shared by the brochure screens.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │ App                                                  │
//! │  ┌──────────────┐   ┌──────────────────────────────┐ │
//! │  │ GlobalState  │   │ active Screen                │ │
//! │  │ - toasts     │   │  CollectionView  (gallery)   │ │
//! │  │ - help shown │   │  Carousel        (videos...) │ │
//! │  │ - session    │   │  DisclosureGroup (header)    │ │
//! │  └──────────────┘   └──────────────────────────────┘ │
//! │           signal::viewport()  (size + scroll)        │
//! └──────────────────────────────────────────────────────┘
//! ```

pub mod carousel;
pub mod collection;
pub mod disclosure;
pub mod global;
pub mod signal;
pub mod strip;

pub use carousel::{Carousel, ManualPolicy};
pub use collection::{CollectionView, Filter};
pub use disclosure::{Disclosure, DisclosureGroup};
pub use global::{GlobalState, Session};
pub use signal::{Signal, Subscription, Viewport};
pub use strip::Strip;
