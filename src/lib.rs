//! postboard - a terminal viewer for paginated, searchable, sortable posts
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod error;
pub mod input;
pub mod loader;
pub mod models;
pub mod startup;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod view_state;
