//! View-state layer - time-axis mapping, view range and list layout
//!
//! Pure computations behind the overview navigator and the event list.
//! Nothing here touches the terminal; the shell recomputes these after
//! every state change.
//!
//! # Module Structure
//!
//! - `scale`: TimeScale - year to axis percentage (piecewise or linear)
//! - `ticks`: tick-mark years for a visible range
//! - `view_range`: ViewRange and ViewRangeController - zoom, pan, reset
//! - `projection`: ProjectedEvent - per-event marker positions and flags
//! - `rows`: ListRow - event-list rows and text wrapping
//! - `card_index`: CardIndex - O(log n) row offsets via Fenwick tree

pub mod card_index;
pub mod projection;
pub mod rows;
pub mod scale;
pub mod ticks;
pub mod view_range;

pub use card_index::CardIndex;
pub use projection::{
    in_draw_order, marker_at_column, percent_to_column, project, ProjectedEvent,
    DEFAULT_OVERSCAN_PERCENT,
};
pub use rows::{build_rows, card_height, wrap_text, ListRow, MARKER_ROW_HEIGHT};
pub use scale::{linear_position, TimeScale, DEFAULT_BREAKPOINT_YEAR, DEFAULT_SEGMENT1_RATIO};
pub use ticks::{tick_label, tick_step, ticks};
pub use view_range::{
    ViewRange, ViewRangeController, DEFAULT_MIN_ZOOM_SPAN, DEFAULT_PAN_FRACTION,
    DEFAULT_ZOOM_IN_FACTOR, DEFAULT_ZOOM_OUT_FACTOR,
};
