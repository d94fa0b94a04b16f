//! Tick-mark selection for the overview axis.
//!
//! The step is the largest power of ten not exceeding a quarter of the
//! visible span, which keeps a handful of round-numbered labels on screen
//! at every zoom level.

use super::view_range::ViewRange;
use crate::model::year_label;

/// Tick spacing for a span: `10^floor(log10(span / 4))`, at least 1.
///
/// Computed in integers so exact powers of ten are never misrounded.
pub fn tick_step(span: i64) -> i64 {
    let mut step: i64 = 1;
    // step * 10 <= span / 4, without integer division truncation
    while step
        .checked_mul(40)
        .is_some_and(|scaled| scaled <= span)
    {
        step *= 10;
    }
    step
}

/// Label drawn above a tick: `0`, `N BCE` or `N CE`.
pub fn tick_label(year: i64) -> String {
    year_label(year)
}

/// Every multiple of the tick step inside `view`, ascending.
pub fn ticks(view: ViewRange) -> Vec<i64> {
    let step = tick_step(view.span());

    let mut first = view.start().div_euclid(step) * step;
    if first < view.start() {
        first += step;
    }

    let mut ticks: Vec<i64> = (0..)
        .map(|i| first + i * step)
        .take_while(|year| *year <= view.end())
        .collect();
    ticks.dedup();
    ticks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DatasetBounds;

    #[test]
    fn step_for_span_4000_is_1000() {
        assert_eq!(tick_step(4000), 1000);
    }

    #[test]
    fn step_just_below_power_boundary() {
        assert_eq!(tick_step(3999), 100);
    }

    #[test]
    fn step_for_min_zoom_span() {
        // 50 / 4 = 12.5
        assert_eq!(tick_step(50), 10);
    }

    #[test]
    fn step_never_below_one() {
        assert_eq!(tick_step(1), 1);
        assert_eq!(tick_step(3), 1);
    }

    #[test]
    fn ticks_are_multiples_of_step_within_range() {
        let view = ViewRange::new(-4000, 0).unwrap();
        assert_eq!(ticks(view), vec![-4000, -3000, -2000, -1000, 0]);
    }

    #[test]
    fn ticks_skip_partial_steps_at_edges() {
        let view = ViewRange::new(-3950, 50).unwrap();
        assert_eq!(ticks(view), vec![-3000, -2000, -1000, 0]);
    }

    #[test]
    fn full_default_view_ticks_every_millennium() {
        let view = ViewRange::full(DatasetBounds::default());
        let ticks = ticks(view);
        assert_eq!(ticks.first(), Some(&-10_000));
        assert_eq!(ticks.last(), Some(&2000));
        assert_eq!(ticks.len(), 13);
    }

    #[test]
    fn tick_labels_use_era_suffixes() {
        assert_eq!(tick_label(0), "0");
        assert_eq!(tick_label(-3000), "3000 BCE");
        assert_eq!(tick_label(1500), "1500 CE");
    }

    #[test]
    fn narrow_view_ticks_every_decade() {
        let view = ViewRange::new(1905, 1955).unwrap();
        assert_eq!(ticks(view), vec![1910, 1920, 1930, 1940, 1950]);
    }
}
