//! Visible year interval and the controller that owns it.
//!
//! The overview navigator shows `[start, end]` of the dataset. Zoom and pan
//! never break the range invariants: both bounds stay inside the dataset, the
//! span never drops below the minimum zoom span, and panning never changes
//! the span.

use crate::model::{DatasetBounds, ScaleError};
use tracing::{debug, warn};

/// Narrowest span, in years, the view can be zoomed to.
pub const DEFAULT_MIN_ZOOM_SPAN: i64 = 50;

/// Span multiplier for one zoom-in step.
pub const DEFAULT_ZOOM_IN_FACTOR: f64 = 0.5;

/// Span multiplier for one zoom-out step.
pub const DEFAULT_ZOOM_OUT_FACTOR: f64 = 2.0;

/// Fraction of the span moved by one pan step.
pub const DEFAULT_PAN_FRACTION: f64 = 0.25;

/// Visible year interval `[start, end]`.
///
/// # Invariants
/// - `start < end`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewRange {
    start: i64,
    end: i64,
}

impl ViewRange {
    /// Smart constructor: rejects zero-width and inverted ranges.
    pub fn new(start: i64, end: i64) -> Result<Self, ScaleError> {
        if end <= start {
            return Err(ScaleError::DegenerateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Range covering the whole dataset.
    pub fn full(bounds: DatasetBounds) -> Self {
        Self {
            start: bounds.min_year(),
            end: bounds.max_year(),
        }
    }

    /// First visible year.
    pub fn start(self) -> i64 {
        self.start
    }

    /// Last visible year.
    pub fn end(self) -> i64 {
        self.end
    }

    /// Width in years. Always positive.
    pub fn span(self) -> i64 {
        self.end - self.start
    }

    /// Whether `year` is visible, ends included.
    pub fn contains(self, year: i64) -> bool {
        (self.start..=self.end).contains(&year)
    }

    /// Whether this range is exactly the dataset bounds.
    pub fn is_full(self, bounds: DatasetBounds) -> bool {
        self.start == bounds.min_year() && self.end == bounds.max_year()
    }
}

/// Owns the [`ViewRange`] and exposes the only operations that mutate it.
///
/// # Invariants
/// - `bounds.min_year() <= start < end <= bounds.max_year()`
/// - `end - start >= min_zoom_span`
#[derive(Debug, Clone)]
pub struct ViewRangeController {
    bounds: DatasetBounds,
    min_zoom_span: i64,
    range: ViewRange,
}

impl ViewRangeController {
    /// Create a controller showing the full dataset.
    ///
    /// # Errors
    ///
    /// - [`ScaleError::InvalidZoomSpan`] when `min_zoom_span <= 0`
    /// - [`ScaleError::SpanBelowMinimum`] when the dataset is narrower than
    ///   `min_zoom_span`
    pub fn new(bounds: DatasetBounds, min_zoom_span: i64) -> Result<Self, ScaleError> {
        if min_zoom_span <= 0 {
            return Err(ScaleError::InvalidZoomSpan(min_zoom_span));
        }
        if bounds.span() < min_zoom_span {
            return Err(ScaleError::SpanBelowMinimum {
                span: bounds.span(),
                min_zoom_span,
            });
        }

        Ok(Self {
            bounds,
            min_zoom_span,
            range: ViewRange::full(bounds),
        })
    }

    /// Current view range.
    pub fn range(&self) -> ViewRange {
        self.range
    }

    /// Dataset bounds the range is clamped to.
    pub fn bounds(&self) -> DatasetBounds {
        self.bounds
    }

    /// Narrowest allowed span.
    pub fn min_zoom_span(&self) -> i64 {
        self.min_zoom_span
    }

    /// Whether the full dataset is shown (piecewise scale applies).
    pub fn is_full_view(&self) -> bool {
        self.range.is_full(self.bounds)
    }

    /// Scale the span by `factor` around the current midpoint.
    ///
    /// `factor < 1` zooms in, `factor > 1` zooms out. The new span is
    /// clamped to `[min_zoom_span, dataset span]`; if the centered interval
    /// crosses a dataset bound it is shifted back inside with its span
    /// intact. Non-finite or non-positive factors are ignored.
    pub fn zoom(&mut self, factor: f64) {
        if !factor.is_finite() || factor <= 0.0 {
            warn!(factor, "Ignoring invalid zoom factor");
            return;
        }

        let span = self.range.span();
        // `as` saturates for out-of-range floats; the clamp below handles it.
        let target = (span as f64 * factor).round() as i64;
        let new_span = target.clamp(self.min_zoom_span, self.bounds.span());
        if new_span == span {
            return;
        }

        let start = self.range.start + (span - new_span).div_euclid(2);
        self.range = self.place(start, new_span);
        self.check_invariants();
        debug!(factor, start = self.range.start, end = self.range.end, "Zoomed view");
    }

    /// Shift both bounds by `fraction` of the current span.
    ///
    /// A shift that would cross a dataset limit is shortened so that the
    /// bound lands exactly on the limit; the span is always preserved.
    /// Non-finite fractions are ignored.
    pub fn pan(&mut self, fraction: f64) {
        if !fraction.is_finite() {
            warn!(fraction, "Ignoring invalid pan fraction");
            return;
        }

        let span = self.range.span();
        let requested = (span as f64 * fraction).round() as i64;
        let shift = requested.clamp(
            self.bounds.min_year() - self.range.start,
            self.bounds.max_year() - self.range.end,
        );
        if shift == 0 {
            return;
        }

        self.range = ViewRange {
            start: self.range.start + shift,
            end: self.range.end + shift,
        };
        self.check_invariants();
        debug!(fraction, start = self.range.start, end = self.range.end, "Panned view");
    }

    /// Show the full dataset.
    pub fn reset(&mut self) {
        self.range = ViewRange::full(self.bounds);
        debug!("Reset view to full dataset");
    }

    /// Keep the current span and center it on `year`, shifted inside the
    /// dataset when needed.
    pub fn center_on(&mut self, year: i64) {
        let span = self.range.span();
        self.range = self.place(year - span / 2, span);
        self.check_invariants();
        debug!(year, start = self.range.start, end = self.range.end, "Centered view");
    }

    /// Show at least the interval between `from` and `to`.
    ///
    /// The interval is widened to the minimum zoom span around its midpoint
    /// and clamped to the dataset.
    pub fn focus_span(&mut self, from: i64, to: i64) {
        let lo = from.min(to).max(self.bounds.min_year());
        let hi = from.max(to).min(self.bounds.max_year());
        let wanted = (hi - lo).max(0);
        let span = wanted.clamp(self.min_zoom_span, self.bounds.span());
        let start = lo - (span - wanted).div_euclid(2);

        self.range = self.place(start, span);
        self.check_invariants();
        debug!(from, to, start = self.range.start, end = self.range.end, "Focused view");
    }

    /// Interval of `span` years starting at `start`, shifted inside the bounds.
    ///
    /// Requires `0 < span <= bounds.span()`.
    fn place(&self, start: i64, span: i64) -> ViewRange {
        let start = start.clamp(
            self.bounds.min_year(),
            self.bounds.max_year() - span,
        );
        ViewRange {
            start,
            end: start + span,
        }
    }

    fn check_invariants(&self) {
        debug_assert!(self.range.start >= self.bounds.min_year());
        debug_assert!(self.range.end <= self.bounds.max_year());
        debug_assert!(self.range.start < self.range.end);
        debug_assert!(self.range.span() >= self.min_zoom_span);
    }
}

#[cfg(test)]
#[path = "view_range_tests.rs"]
mod tests;
