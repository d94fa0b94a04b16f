//! Event list widget.
//!
//! Draws the visible slice of the list: millennium marker rows and event
//! cards. Line counts per row must agree with
//! [`card_height`](crate::view_state::card_height) so scroll offsets land
//! on the right card.

use super::styles::Palette;
use crate::model::{marker_label, Event};
use crate::state::AppState;
use crate::view_state::rows::body_width;
use crate::view_state::{wrap_text, ListRow};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const INDENT: &str = "  ";

/// Event list widget.
pub struct EventList<'a> {
    state: &'a AppState,
    palette: Palette,
}

impl<'a> EventList<'a> {
    /// Widget over the state's current list rows.
    pub fn new(state: &'a AppState, palette: Palette) -> Self {
        Self { state, palette }
    }

    fn row_lines(&self, row: ListRow, width: u16) -> Vec<Line<'static>> {
        match row {
            ListRow::Marker(year) => marker_lines(year, width, &self.palette),
            ListRow::Event(id) => match self.state.dataset().get(id) {
                Some(event) => {
                    card_lines(event, width, self.state.selected() == Some(id), &self.palette)
                }
                None => Vec::new(),
            },
        }
    }
}

impl Widget for EventList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let list = self.state.list();
        if list.event_ids().next().is_none() {
            Paragraph::new(Line::styled(
                "No events match the current filters",
                self.palette.muted(),
            ))
            .render(area, buf);
            return;
        }

        let Some(top_row) = list.top_row() else {
            return;
        };
        let skip = list.scroll_offset() - list.index().offset_of(top_row);
        let height = usize::from(area.height);

        let mut lines = Vec::with_capacity(height + skip);
        for row in &list.rows()[top_row..] {
            if lines.len() >= height + skip {
                break;
            }
            lines.extend(self.row_lines(*row, list.content_width()));
        }

        let visible: Vec<Line> = lines.into_iter().skip(skip).take(height).collect();
        Paragraph::new(visible).render(area, buf);
    }
}

/// Lines of a millennium marker row: the rule with its label, then a blank.
pub fn marker_lines(year: i64, width: u16, palette: &Palette) -> Vec<Line<'static>> {
    let label = format!("── {} ", marker_label(year));
    let fill = usize::from(width).saturating_sub(label.chars().count());
    vec![
        Line::styled(format!("{label}{}", "─".repeat(fill)), palette.muted()),
        Line::default(),
    ]
}

/// Lines of an event card.
///
/// Layout: title, `date | location`, wrapped description, optional link,
/// blank separator.
pub fn card_lines(
    event: &Event,
    width: u16,
    selected: bool,
    palette: &Palette,
) -> Vec<Line<'static>> {
    let marker = if selected { "▶ " } else { "" };
    let mut lines = vec![
        Line::from(vec![
            Span::styled(marker.to_string(), palette.era(event.era)),
            Span::styled(event.title.clone(), palette.title(event.era, selected)),
        ]),
        Line::from(vec![
            Span::raw(INDENT),
            Span::styled(format!("{} | {}", event.date, event.location), palette.era(event.era)),
        ]),
    ];

    lines.extend(
        wrap_text(&event.description, body_width(width))
            .into_iter()
            .map(|text| Line::from(vec![Span::raw(INDENT), Span::raw(text)])),
    );

    if !event.link.is_empty() {
        lines.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled(event.link.clone(), palette.link()),
        ]));
    }

    lines.push(Line::default());
    lines
}
