//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod dataset;
pub mod era;
pub mod error;
pub mod event;
pub mod key_action;
pub mod year;

// Re-export for convenience
pub use dataset::Dataset;
pub use era::{era_spans, Era, EraSpan};
pub use error::{AppError, DatasetError, ScaleError};
pub use event::{Event, EventId};
pub use key_action::KeyAction;
pub use year::{marker_label, year_label, DatasetBounds, YEAR_LIMIT};
