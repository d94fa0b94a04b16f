//! Error types for epochline.
//!
//! Errors are split by concern and compose via `?` and `From`:
//!
//! - [`AppError`] - top-level error wrapping every fatal failure
//!   - [`DatasetError`] - dataset reading and load-time validation
//!   - [`ScaleError`] - invalid scale configuration or a degenerate view range
//!   - `std::io::Error` - terminal failures
//!
//! Dataset errors are fatal: malformed records are rejected before anything
//! is rendered. Scale errors surface at startup when the configuration is
//! inconsistent; during interaction the view-range invariants make them
//! unreachable.

use super::event::EventId;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// The dataset could not be read or failed validation.
    #[error("Failed to load dataset: {0}")]
    Dataset(#[from] DatasetError),

    /// Scale or view-range configuration is inconsistent.
    #[error("Invalid timeline scale: {0}")]
    Scale(#[from] ScaleError),

    /// Terminal or TUI rendering error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors raised while loading and validating a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The dataset file does not exist.
    #[error("Dataset file not found: {path}")]
    FileNotFound {
        /// Path that was attempted.
        path: PathBuf,
    },

    /// The dataset file exists but could not be read.
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        /// Path of the unreadable file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON, a missing field, or an era outside the known set.
    #[error("Malformed dataset: {reason}")]
    Parse {
        /// Parser message, including line and column.
        reason: String,
    },

    /// The dataset contains no events.
    #[error("Dataset contains no events")]
    Empty,

    /// Two events share an identifier.
    #[error("Duplicate event id {id}")]
    DuplicateId {
        /// The repeated identifier.
        id: EventId,
    },

    /// An event lies outside the configured year bounds.
    #[error("Event {id} has year {year}, outside [{min_year}, {max_year}]")]
    YearOutOfBounds {
        /// Offending event.
        id: EventId,
        /// Its year.
        year: i64,
        /// Lower dataset bound.
        min_year: i64,
        /// Upper dataset bound.
        max_year: i64,
    },
}

/// Errors from the coordinate mapper and view-range controller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScaleError {
    /// A view range with `end <= start` reached the mapper.
    #[error("Degenerate view range [{start}, {end}]")]
    DegenerateRange {
        /// Range start.
        start: i64,
        /// Range end, not after `start`.
        end: i64,
    },

    /// Dataset bounds are empty, inverted or beyond the supported years.
    #[error("Invalid dataset bounds [{min_year}, {max_year}]")]
    InvalidBounds {
        /// Requested lower bound.
        min_year: i64,
        /// Requested upper bound.
        max_year: i64,
    },

    /// The breakpoint does not lie strictly inside the dataset bounds.
    #[error("Breakpoint year {breakpoint} must lie strictly inside [{min_year}, {max_year}]")]
    InvalidBreakpoint {
        /// Requested breakpoint year.
        breakpoint: i64,
        /// Lower dataset bound.
        min_year: i64,
        /// Upper dataset bound.
        max_year: i64,
    },

    /// The first-segment ratio is not strictly between 0 and 1.
    #[error("Segment ratio {0} must lie strictly between 0 and 1")]
    InvalidSegmentRatio(f64),

    /// The minimum zoom span is zero or negative.
    #[error("Minimum zoom span must be positive, got {0}")]
    InvalidZoomSpan(i64),

    /// The dataset is narrower than the minimum zoom span.
    #[error("Dataset span {span} is below the minimum zoom span {min_zoom_span}")]
    SpanBelowMinimum {
        /// Dataset span in years.
        span: i64,
        /// Configured minimum zoom span.
        min_zoom_span: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_error_converts_into_app_error() {
        fn load() -> Result<(), DatasetError> {
            Err(DatasetError::Empty)
        }
        fn run() -> Result<(), AppError> {
            load()?;
            Ok(())
        }

        let err = run().unwrap_err();
        assert!(matches!(err, AppError::Dataset(DatasetError::Empty)));
    }

    #[test]
    fn scale_error_converts_into_app_error() {
        let err: AppError = ScaleError::InvalidSegmentRatio(1.5).into();
        assert!(err.to_string().contains("1.5"));
    }

    #[test]
    fn year_out_of_bounds_message_names_event_and_bounds() {
        let err = DatasetError::YearOutOfBounds {
            id: EventId::new(3),
            year: 3000,
            min_year: -10_000,
            max_year: 2024,
        };
        let msg = err.to_string();
        assert!(msg.contains("event-3"));
        assert!(msg.contains("3000"));
        assert!(msg.contains("2024"));
    }

    #[test]
    fn file_not_found_includes_path() {
        let err = DatasetError::FileNotFound {
            path: PathBuf::from("/tmp/missing.json"),
        };
        assert!(err.to_string().contains("/tmp/missing.json"));
    }
}
