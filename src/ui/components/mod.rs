//! Reusable UI components.
//!
//! - [`dialog_frame`] - centered bordered dialog
//! - [`input_field`] - single-line text input
//! - [`sort_selector`] - two-option sort selector line

pub mod dialog_frame;
pub mod input_field;
pub mod sort_selector;

pub use dialog_frame::{render_dialog_frame, DialogFrameConfig};
pub use input_field::{render_input_field, InputFieldConfig, INPUT_FIELD_HEIGHT};
pub use sort_selector::render_sort_selector;
