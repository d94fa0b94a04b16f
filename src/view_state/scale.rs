//! Year-to-axis coordinate mapping.
//!
//! Positions are percentages of the overview axis width. Two regimes:
//!
//! - **Full view** (the view range is the whole dataset): a two-segment
//!   piecewise scale. Years up to the breakpoint share the first
//!   `segment1_ratio` of the axis; later years share the rest. This
//!   compresses sparse prehistory and widens the dense recent centuries.
//! - **Zoomed view**: plain linear scale over the view range.

use super::view_range::ViewRange;
use crate::model::{DatasetBounds, ScaleError};

/// Default breakpoint between the compressed and expanded segments.
pub const DEFAULT_BREAKPOINT_YEAR: i64 = -4000;

/// Default share of the axis given to years up to the breakpoint.
pub const DEFAULT_SEGMENT1_RATIO: f64 = 0.2;

/// Coordinate mapper for a dataset.
///
/// # Invariants
/// - `min_year < breakpoint_year < max_year`
/// - `0 < segment1_ratio < 1`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    bounds: DatasetBounds,
    breakpoint_year: i64,
    segment1_ratio: f64,
}

impl TimeScale {
    /// Smart constructor validating the breakpoint and ratio.
    pub fn new(
        bounds: DatasetBounds,
        breakpoint_year: i64,
        segment1_ratio: f64,
    ) -> Result<Self, ScaleError> {
        if breakpoint_year <= bounds.min_year() || breakpoint_year >= bounds.max_year() {
            return Err(ScaleError::InvalidBreakpoint {
                breakpoint: breakpoint_year,
                min_year: bounds.min_year(),
                max_year: bounds.max_year(),
            });
        }
        // NaN fails both comparisons and is rejected too.
        if !(segment1_ratio > 0.0 && segment1_ratio < 1.0) {
            return Err(ScaleError::InvalidSegmentRatio(segment1_ratio));
        }

        Ok(Self {
            bounds,
            breakpoint_year,
            segment1_ratio,
        })
    }

    /// Dataset bounds the scale spans.
    pub fn bounds(&self) -> DatasetBounds {
        self.bounds
    }

    /// Year where the full-view axis changes slope.
    pub fn breakpoint_year(&self) -> i64 {
        self.breakpoint_year
    }

    /// Share of the full-view axis before the breakpoint.
    pub fn segment1_ratio(&self) -> f64 {
        self.segment1_ratio
    }

    /// Axis position of `year` as a percentage.
    ///
    /// Uses the piecewise scale when `view` is the full dataset and the
    /// linear scale otherwise. Years inside `view` land in `[0, 100]`;
    /// under the linear scale years outside it land outside that interval.
    ///
    /// # Errors
    ///
    /// [`ScaleError::DegenerateRange`] for a zero-width range.
    pub fn position(&self, year: i64, view: ViewRange) -> Result<f64, ScaleError> {
        if view.is_full(self.bounds) {
            Ok(self.piecewise_position(year))
        } else {
            linear_position(year, view.start(), view.end())
        }
    }

    /// Full-view position under the two-segment scale.
    ///
    /// `piecewise_position(breakpoint_year) == segment1_ratio * 100.0` exactly.
    pub fn piecewise_position(&self, year: i64) -> f64 {
        let seam = self.segment1_ratio * 100.0;
        let min_year = self.bounds.min_year();
        let max_year = self.bounds.max_year();

        if year <= self.breakpoint_year {
            let progress =
                (year - min_year) as f64 / (self.breakpoint_year - min_year) as f64;
            progress * seam
        } else {
            let progress =
                (year - self.breakpoint_year) as f64 / (max_year - self.breakpoint_year) as f64;
            seam + progress * (100.0 - seam)
        }
    }
}

impl Default for TimeScale {
    /// Bounds `[-10000, 2024]`, breakpoint `-4000`, ratio `0.2`.
    fn default() -> Self {
        Self {
            bounds: DatasetBounds::default(),
            breakpoint_year: DEFAULT_BREAKPOINT_YEAR,
            segment1_ratio: DEFAULT_SEGMENT1_RATIO,
        }
    }
}

/// Linear position of `year` over `[start, end]` as a percentage.
///
/// # Errors
///
/// [`ScaleError::DegenerateRange`] when `end <= start`.
pub fn linear_position(year: i64, start: i64, end: i64) -> Result<f64, ScaleError> {
    let span = end - start;
    if span <= 0 {
        return Err(ScaleError::DegenerateRange { start, end });
    }
    Ok((year - start) as f64 * 100.0 / span as f64)
}
