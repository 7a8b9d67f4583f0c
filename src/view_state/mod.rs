//! Data view state and its pure derivation.
//!
//! [`ViewState`] holds what the user controls plus the fetched posts;
//! [`derive_view`] turns that into the page on screen. Rendering code reads
//! from [`ViewState::snapshot`] and never mutates.

mod data_view;
mod derive;
mod theme;

pub use data_view::{LoadPhase, PagerControls, ViewState};
pub use derive::{
    count_matches, derive_view, filter_and_sort, locale_compare, page_count, page_slice,
    DerivedView, SortOrder, PAGE_SIZE,
};
pub use theme::Theme;
