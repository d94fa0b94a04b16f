//! Calendar year labels and dataset bounds.

use super::error::ScaleError;

/// Largest absolute year accepted as a dataset bound.
///
/// Keeps spans, tick steps and the millennium marker rows well inside `i64`.
pub const YEAR_LIMIT: i64 = 1_000_000;

/// Closed year interval `[min_year, max_year]` covered by a dataset.
///
/// # Invariants
/// - `min_year < max_year`
/// - both bounds lie within `[-YEAR_LIMIT, YEAR_LIMIT]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetBounds {
    min_year: i64,
    max_year: i64,
}

impl DatasetBounds {
    /// Smart constructor: rejects empty, inverted or out-of-range intervals.
    ///
    /// # Errors
    ///
    /// [`ScaleError::InvalidBounds`] when `min_year >= max_year`, when the
    /// span does not fit in an `i64`, or when a bound exceeds [`YEAR_LIMIT`].
    pub fn new(min_year: i64, max_year: i64) -> Result<Self, ScaleError> {
        let invalid = ScaleError::InvalidBounds { min_year, max_year };
        let span = max_year
            .checked_sub(min_year)
            .ok_or_else(|| invalid.clone())?;
        if span <= 0 || min_year < -YEAR_LIMIT || max_year > YEAR_LIMIT {
            return Err(invalid);
        }
        Ok(Self { min_year, max_year })
    }

    /// Earliest year of the interval.
    pub fn min_year(self) -> i64 {
        self.min_year
    }

    /// Latest year of the interval.
    pub fn max_year(self) -> i64 {
        self.max_year
    }

    /// Width of the interval in years. Always positive.
    pub fn span(self) -> i64 {
        self.max_year - self.min_year
    }

    /// Whether `year` lies inside the interval, ends included.
    pub fn contains(self, year: i64) -> bool {
        (self.min_year..=self.max_year).contains(&year)
    }
}

impl Default for DatasetBounds {
    /// `[-10000, 2024]`
    fn default() -> Self {
        Self {
            min_year: -10_000,
            max_year: 2024,
        }
    }
}

/// Axis label for a year: `0`, `N BCE` or `N CE`.
pub fn year_label(year: i64) -> String {
    match year {
        0 => "0".to_string(),
        y if y < 0 => format!("{} BCE", y.unsigned_abs()),
        y => format!("{y} CE"),
    }
}

/// Label for a millennium marker row in the event list.
///
/// There is no year zero in the calendar, so the marker at 0 reads `1 CE`.
pub fn marker_label(year: i64) -> String {
    match year {
        0 => "1 CE".to_string(),
        y if y < 0 => format!("{} BCE", y.unsigned_abs()),
        y => format!("{y} CE"),
    }
}
