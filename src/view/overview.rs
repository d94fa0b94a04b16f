//! Overview navigator widget.
//!
//! A bordered panel with five inner rows:
//! 1. tick labels
//! 2. axis with event markers
//! 3. era band
//! 4. era labels
//! 5. tooltip for the hovered or selected event

use super::constants::TICK_LABEL_GAP;
use super::styles::Palette;
use crate::model::{year_label, EventId};
use crate::state::AppState;
use crate::view_state::{in_draw_order, percent_to_column, tick_label};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};
use unicode_width::UnicodeWidthStr;

const AXIS_SYMBOL: &str = "─";
const TICK_SYMBOL: &str = "┼";
const ACTIVE_MARKER: &str = "●";
const INACTIVE_MARKER: &str = "○";
const SELECTED_MARKER: &str = "◆";
const BAND_SYMBOL: &str = "━";

/// Offset of the axis row inside the panel's inner area.
pub const AXIS_ROW: u16 = 1;

/// Offset of the era band row inside the panel's inner area.
pub const BAND_ROW: u16 = 2;

/// Inner area of the overview panel (inside the border).
pub fn overview_inner(area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(area)
}

/// Overview navigator widget.
pub struct OverviewPanel<'a> {
    state: &'a AppState,
    palette: Palette,
}

impl<'a> OverviewPanel<'a> {
    /// Widget over the state's current view range.
    pub fn new(state: &'a AppState, palette: Palette) -> Self {
        Self { state, palette }
    }

    fn title(&self) -> String {
        let range = self.state.view_range();
        let mode = if self.state.navigator().is_full_view() {
            "full"
        } else {
            "zoomed"
        };
        format!(
            " Overview · {} – {} ({mode}) ",
            year_label(range.start()),
            year_label(range.end())
        )
    }

    fn render_ticks(&self, inner: Rect, buf: &mut Buffer) {
        let labels: Vec<(u16, String)> = self
            .state
            .ticks()
            .into_iter()
            .filter_map(|year| {
                let percent = self.state.position_of(year).ok()?;
                let column = percent_to_column(percent, inner.width)?;
                Some((column, tick_label(year)))
            })
            .collect();

        for (column, _) in &labels {
            set_symbol(buf, inner.x + column, inner.y + AXIS_ROW, TICK_SYMBOL, self.palette.axis());
        }
        for (start, label) in place_labels(&labels, inner.width) {
            buf.set_string(inner.x + start, inner.y, label, self.palette.tick_label());
        }
    }

    fn render_markers(&self, inner: Rect, buf: &mut Buffer) {
        let Ok(projected) = self.state.projections() else {
            return;
        };
        let highlighted = self.state.selected();
        let y = inner.y + AXIS_ROW;

        let mut selected_column = None;
        for marker in in_draw_order(&projected) {
            let Some(column) = percent_to_column(marker.position_percent, inner.width) else {
                continue;
            };
            let Some(event) = self.state.dataset().get(marker.id) else {
                continue;
            };
            if Some(marker.id) == highlighted {
                selected_column = Some(column);
                continue;
            }
            let (symbol, style) = if marker.is_active {
                (ACTIVE_MARKER, self.palette.active_marker(event.era))
            } else {
                (INACTIVE_MARKER, self.palette.inactive_marker(event.era))
            };
            set_symbol(buf, inner.x + column, y, symbol, style);
        }

        // Selected marker is painted last so it is never hidden.
        if let Some(column) = selected_column {
            set_symbol(buf, inner.x + column, y, SELECTED_MARKER, self.palette.selected_marker());
        }
    }

    fn render_eras(&self, inner: Rect, buf: &mut Buffer) {
        if inner.width == 0 {
            return;
        }
        let mut labels = Vec::new();
        for span in self.state.dataset().era_spans() {
            let (Ok(start), Ok(end)) = (
                self.state.position_of(span.start),
                self.state.position_of(span.end),
            ) else {
                continue;
            };
            if end < 0.0 || start > 100.0 {
                continue;
            }
            let (Some(first), Some(last)) = (
                percent_to_column(start.clamp(0.0, 100.0), inner.width),
                percent_to_column(end.clamp(0.0, 100.0), inner.width),
            ) else {
                continue;
            };

            let style = if self.state.era_filter().is_enabled(span.era) {
                self.palette.era(span.era)
            } else {
                self.palette.muted()
            };
            for column in first..=last {
                set_symbol(buf, inner.x + column, inner.y + BAND_ROW, BAND_SYMBOL, style);
            }
            labels.push((first, span.era.short_label().to_string(), style));
        }

        let mut next_free = 0;
        for (column, label, style) in labels {
            let width = label.width() as u16;
            if column < next_free || column + width > inner.width {
                continue;
            }
            buf.set_string(inner.x + column, inner.y + BAND_ROW + 1, &label, style);
            next_free = column + width + TICK_LABEL_GAP;
        }
    }

    fn render_tooltip(&self, inner: Rect, buf: &mut Buffer) {
        let y = inner.y + inner.height.saturating_sub(1);
        let line = match self.state.hovered_event().or_else(|| self.state.selected_event()) {
            Some(event) => Line::from(vec![
                Span::styled(format!("{SELECTED_MARKER} "), self.palette.era(event.era)),
                Span::styled(event.title.clone(), self.palette.title(event.era, false)),
                Span::styled(
                    format!(" · {} · {}", event.date, event.location),
                    self.palette.muted(),
                ),
            ]),
            None => Line::styled(
                "Click a marker or press n to select an event",
                self.palette.muted(),
            ),
        };
        buf.set_line(inner.x, y, &line, inner.width);
    }
}

impl Widget for OverviewPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.palette.border())
            .title(Span::styled(self.title(), self.palette.header()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height <= AXIS_ROW || inner.width == 0 {
            return;
        }

        let axis = AXIS_SYMBOL.repeat(usize::from(inner.width));
        buf.set_string(inner.x, inner.y + AXIS_ROW, axis, self.palette.axis());

        self.render_ticks(inner, buf);
        self.render_markers(inner, buf);
        if inner.height > BAND_ROW + 1 {
            self.render_eras(inner, buf);
        }
        if inner.height > BAND_ROW + 2 {
            self.render_tooltip(inner, buf);
        }
    }
}

/// Marker under a terminal cell of the axis or era band, if any.
pub fn marker_at(state: &AppState, overview_area: Rect, column: u16, row: u16) -> Option<EventId> {
    let inner = overview_inner(overview_area);
    let on_axis = row == inner.y + AXIS_ROW || row == inner.y + BAND_ROW;
    if !on_axis || column < inner.x || column >= inner.x + inner.width {
        return None;
    }
    let projected = state.projections().ok()?;
    crate::view_state::marker_at_column(&projected, inner.width, column - inner.x)
}

/// Lay out labels centered on their columns, dropping any that would
/// overlap the previous one or not fit the width.
///
/// Returns `(start column, label)` pairs.
pub fn place_labels(labels: &[(u16, String)], width: u16) -> Vec<(u16, String)> {
    let mut placed = Vec::new();
    let mut next_free = 0u16;

    for (column, label) in labels {
        let label_width = label.width() as u16;
        if label_width > width {
            continue;
        }
        let start = column
            .saturating_sub(label_width / 2)
            .min(width - label_width);
        if start < next_free {
            continue;
        }
        placed.push((start, label.clone()));
        next_free = start + label_width + TICK_LABEL_GAP;
    }
    placed
}

fn set_symbol(buf: &mut Buffer, x: u16, y: u16, symbol: &str, style: ratatui::style::Style) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_symbol(symbol).set_style(style);
    }
}
