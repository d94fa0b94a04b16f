//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

/// Height of the header bar in lines.
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the overview panel in lines, borders included.
///
/// Inner rows: tick labels, axis with markers, era band, era labels,
/// tooltip.
pub const OVERVIEW_HEIGHT: u16 = 7;

/// Height of the search input widget in lines.
///
/// Used when search is typing or active. Includes border and text input area.
pub const SEARCH_INPUT_HEIGHT: u16 = 3;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Minimum horizontal gap between two tick labels.
pub const TICK_LABEL_GAP: u16 = 2;
