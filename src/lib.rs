//! Assimox - appliance repair services, gallery and admin in the terminal
//!
//! The brochure site as a ratatui application: a routed set of scrolling
//! pages over a static catalog, plus an admin login backed by an HTTP API.

pub mod app;
pub mod auth;
pub mod catalog;
pub mod cli;
pub mod components;
pub mod config;
pub mod keymap;
pub mod router;
pub mod screens;
pub mod state;
pub mod styles;
pub mod tui;
pub mod utils;
pub mod widgets;

pub use config::Config;
pub use router::Route;

// Keymap re-exports (used by Config and for external API)
pub use keymap::{Action, KeyBinding, Keymap, KeymapPreset};
