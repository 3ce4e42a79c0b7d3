//! Terminal UI components.
//!
//! This module contains all UI-related code including:
//! - [`layout`]: Screen regions shared with mouse hit testing
//! - [`style`]: Theming and colors

pub mod layout;
pub mod style;

mod overlays;
mod render;
mod status;

pub use layout::{ScreenLayout, bordered_inner, list_inner, list_window_start, point_in_rect, screen_layout};
pub use render::render;

/// Per-row delete control.
pub const DELETE_LABEL: &str = "[Delete]";

/// Narrowest list row that fits the selection marker, one column of text
/// and the delete control. Narrower rows show text only.
pub const MIN_ROW_WIDTH_WITH_DELETE: usize = 2 + DELETE_LABEL.len() + 1;

/// Shown in place of the list when there are no notes.
pub const EMPTY_PLACEHOLDER: &str = "No notes yet. Add one above!";
