//! Event projection onto the overview axis.
//!
//! Pure: events, the view range, the scale and the active-id set go in, a
//! render-ready marker list comes out.

use super::scale::TimeScale;
use super::view_range::ViewRange;
use crate::model::{Event, EventId, ScaleError};
use std::collections::HashSet;

/// Default overscan band, in percent of the axis, on each side.
pub const DEFAULT_OVERSCAN_PERCENT: f64 = 5.0;

/// One overview marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedEvent {
    /// Projected event.
    pub id: EventId,
    /// Axis position in percent; within `[-overscan, 100 + overscan]`.
    pub position_percent: f64,
    /// Member of the externally filtered subset. Styling only.
    pub is_active: bool,
    /// On the axis proper (`[0, 100]`) rather than in the overscan band.
    pub is_visible: bool,
}

/// Project every event onto the axis.
///
/// Events whose position falls outside `[-overscan, 100 + overscan]` are
/// omitted, so every emitted record lies within the overscan margin; the
/// narrower `is_visible` flag marks the ones on the axis itself. Output
/// keeps the order of `events`.
///
/// # Errors
///
/// Propagates [`ScaleError::DegenerateRange`] from the scale.
pub fn project(
    events: &[Event],
    view: ViewRange,
    scale: &TimeScale,
    active_ids: &HashSet<EventId>,
    overscan_percent: f64,
) -> Result<Vec<ProjectedEvent>, ScaleError> {
    let overscan = overscan_percent.max(0.0);
    let band = -overscan..=100.0 + overscan;

    let mut projected = Vec::with_capacity(events.len());
    for event in events {
        let position = scale.position(event.year, view)?;
        if !band.contains(&position) {
            continue;
        }
        projected.push(ProjectedEvent {
            id: event.id,
            position_percent: position,
            is_active: active_ids.contains(&event.id),
            is_visible: (0.0..=100.0).contains(&position),
        });
    }
    Ok(projected)
}

/// Markers in paint order: inactive first so active markers end up on top.
///
/// Stable within each group.
pub fn in_draw_order(projected: &[ProjectedEvent]) -> Vec<&ProjectedEvent> {
    let mut ordered: Vec<&ProjectedEvent> = projected.iter().collect();
    ordered.sort_by_key(|marker| marker.is_active);
    ordered
}

/// Terminal column for an axis position, or `None` when off the axis.
pub fn percent_to_column(percent: f64, width: u16) -> Option<u16> {
    if width == 0 || !(0.0..=100.0).contains(&percent) {
        return None;
    }
    let last = f64::from(width - 1);
    // In [0, last] because percent is in [0, 100].
    Some((percent / 100.0 * last).round() as u16)
}

/// The marker nearest to `column`, if one lies within one column of it.
///
/// Among equally near markers the one painted last (active, later in the
/// list) wins, matching what the user sees on top.
pub fn marker_at_column(projected: &[ProjectedEvent], width: u16, column: u16) -> Option<EventId> {
    in_draw_order(projected)
        .into_iter()
        .filter_map(|marker| {
            percent_to_column(marker.position_percent, width)
                .map(|col| (col.abs_diff(column), marker.id))
        })
        .filter(|(distance, _)| *distance <= 1)
        .fold(None, |best: Option<(u16, EventId)>, candidate| match best {
            Some((distance, _)) if distance < candidate.0 => best,
            _ => Some(candidate),
        })
        .map(|(_, id)| id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::event::test_event;
    use crate::model::{DatasetBounds, Era};

    fn sample_events() -> Vec<Event> {
        vec![
            test_event(1, -10_000, Era::Ancient),
            test_event(2, -4000, Era::Ancient),
            test_event(3, -3000, Era::Ancient),
            test_event(4, 500, Era::PostClassical),
            test_event(5, 2024, Era::Contemporary),
        ]
    }

    fn ids(values: &[u32]) -> HashSet<EventId> {
        values.iter().copied().map(EventId::new).collect()
    }

    #[test]
    fn full_view_projects_every_event() {
        let events = sample_events();
        let view = ViewRange::full(DatasetBounds::default());

        let projected = project(
            &events,
            view,
            &TimeScale::default(),
            &ids(&[]),
            DEFAULT_OVERSCAN_PERCENT,
        )
        .unwrap();

        assert_eq!(projected.len(), 5);
        assert_eq!(projected[0].position_percent, 0.0);
        assert_eq!(projected[1].position_percent, 20.0);
        assert_eq!(projected[4].position_percent, 100.0);
        assert!(projected.iter().all(|p| p.is_visible));
    }

    #[test]
    fn events_beyond_overscan_are_excluded() {
        let events = sample_events();
        // -3000 is 50%, -4000 is 0%; -10000 and 500 and 2024 are far outside.
        let view = ViewRange::new(-4000, -2000).unwrap();

        let projected = project(
            &events,
            view,
            &TimeScale::default(),
            &ids(&[]),
            DEFAULT_OVERSCAN_PERCENT,
        )
        .unwrap();

        let projected_ids: Vec<u32> = projected.iter().map(|p| p.id.get()).collect();
        assert_eq!(projected_ids, vec![2, 3]);
    }

    #[test]
    fn overscan_band_events_are_kept_but_not_visible() {
        let events = vec![test_event(1, -4060, Era::Ancient)];
        // -4060 is -3% of [-4000, -2000].
        let view = ViewRange::new(-4000, -2000).unwrap();

        let projected = project(
            &events,
            view,
            &TimeScale::default(),
            &ids(&[]),
            DEFAULT_OVERSCAN_PERCENT,
        )
        .unwrap();

        assert_eq!(projected.len(), 1);
        assert!(!projected[0].is_visible);
        assert!((projected[0].position_percent + 3.0).abs() < 1e-9);
    }

    #[test]
    fn active_flag_follows_the_supplied_set() {
        let events = sample_events();
        let view = ViewRange::full(DatasetBounds::default());

        let projected = project(
            &events,
            view,
            &TimeScale::default(),
            &ids(&[2, 5]),
            DEFAULT_OVERSCAN_PERCENT,
        )
        .unwrap();

        let active: Vec<u32> = projected
            .iter()
            .filter(|p| p.is_active)
            .map(|p| p.id.get())
            .collect();
        assert_eq!(active, vec![2, 5]);
    }

    #[test]
    fn active_flag_does_not_change_position() {
        let events = sample_events();
        let view = ViewRange::full(DatasetBounds::default());
        let scale = TimeScale::default();

        let none = project(&events, view, &scale, &ids(&[]), 5.0).unwrap();
        let all = project(&events, view, &scale, &ids(&[1, 2, 3, 4, 5]), 5.0).unwrap();

        for (a, b) in none.iter().zip(&all) {
            assert_eq!(a.position_percent, b.position_percent);
        }
    }

    #[test]
    fn draw_order_puts_active_last_and_is_stable() {
        let marker = |id, active| ProjectedEvent {
            id: EventId::new(id),
            position_percent: 0.0,
            is_active: active,
            is_visible: true,
        };
        let projected = vec![marker(1, true), marker(2, false), marker(3, true), marker(4, false)];

        let order: Vec<u32> = in_draw_order(&projected)
            .iter()
            .map(|p| p.id.get())
            .collect();

        assert_eq!(order, vec![2, 4, 1, 3]);
    }

    #[test]
    fn percent_to_column_spans_the_width() {
        assert_eq!(percent_to_column(0.0, 101), Some(0));
        assert_eq!(percent_to_column(50.0, 101), Some(50));
        assert_eq!(percent_to_column(100.0, 101), Some(100));
        assert_eq!(percent_to_column(-1.0, 101), None);
        assert_eq!(percent_to_column(50.0, 0), None);
    }

    #[test]
    fn marker_at_column_finds_nearest_within_one_column() {
        let marker = |id, pos| ProjectedEvent {
            id: EventId::new(id),
            position_percent: pos,
            is_active: true,
            is_visible: true,
        };
        let projected = vec![marker(1, 10.0), marker(2, 50.0)];

        assert_eq!(marker_at_column(&projected, 101, 10), Some(EventId::new(1)));
        assert_eq!(marker_at_column(&projected, 101, 51), Some(EventId::new(2)));
        assert_eq!(marker_at_column(&projected, 101, 30), None);
    }

    #[test]
    fn marker_at_column_prefers_active_marker_on_tie() {
        let projected = vec![
            ProjectedEvent {
                id: EventId::new(1),
                position_percent: 50.0,
                is_active: true,
                is_visible: true,
            },
            ProjectedEvent {
                id: EventId::new(2),
                position_percent: 50.0,
                is_active: false,
                is_visible: true,
            },
        ];

        assert_eq!(marker_at_column(&projected, 101, 50), Some(EventId::new(1)));
    }
}
