//! Screen layout rendering.
//!
//! Pure layout logic: splits the terminal into header, overview panel,
//! optional search bar, event list and status bar, then renders each part.

use super::constants::{HEADER_HEIGHT, OVERVIEW_HEIGHT, SEARCH_INPUT_HEIGHT, STATUS_BAR_HEIGHT};
use super::event_list::EventList;
use super::help::render_help_overlay;
use super::overview::OverviewPanel;
use super::search_input::SearchInput;
use super::styles::Palette;
use crate::model::{year_label, Era};
use crate::state::{AppState, SearchState};
use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Areas of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Title line.
    pub header: Rect,
    /// Bordered overview navigator.
    pub overview: Rect,
    /// Search bar, present only while a search is shown.
    pub search: Option<Rect>,
    /// Event list content, inset by one column on each side.
    pub list: Rect,
    /// Bottom status line.
    pub status: Rect,
}

/// Split `area` into the screen regions.
///
/// The search bar only takes space while a search is typed or applied.
pub fn calculate_areas(area: Rect, search_visible: bool) -> ScreenAreas {
    let search_height = if search_visible { SEARCH_INPUT_HEIGHT } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(OVERVIEW_HEIGHT),
            Constraint::Length(search_height),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    ScreenAreas {
        header: chunks[0],
        overview: chunks[1],
        search: search_visible.then_some(chunks[2]),
        list: chunks[3].inner(Margin {
            horizontal: 1,
            vertical: 0,
        }),
        status: chunks[4],
    }
}

/// Render the whole screen.
pub fn render_layout(frame: &mut Frame, state: &AppState, palette: Palette) {
    let search_visible = !matches!(state.search(), SearchState::Inactive);
    let areas = calculate_areas(frame.area(), search_visible);

    render_header(frame, areas.header, state, palette);
    frame.render_widget(OverviewPanel::new(state, palette), areas.overview);

    if let Some(search_area) = areas.search {
        let search = SearchInput::new(state.search(), state.active_ids().len(), palette);
        frame.render_widget(search, search_area);
    }

    frame.render_widget(EventList::new(state, palette), areas.list);
    render_status_bar(frame, areas.status, state, palette);

    if state.help_visible {
        let offset = u16::try_from(state.help_scroll_offset).unwrap_or(u16::MAX);
        render_help_overlay(frame, offset, &palette);
    }
}

/// Header: application name, filtered count, dataset bounds and the year
/// at the top of the list.
fn render_header(frame: &mut Frame, area: Rect, state: &AppState, palette: Palette) {
    let bounds = state.dataset().bounds();
    let mut text = format!(
        "│ {} of {} events │ {} – {}",
        state.active_ids().len(),
        state.dataset().len(),
        year_label(bounds.min_year()),
        year_label(bounds.max_year()),
    );
    if let Some(event) = state.top_event() {
        text.push_str(&format!(" │ at {}", year_label(event.year)));
    }

    let line = Line::from(vec![
        Span::styled(" epochline ", palette.header()),
        Span::styled(text, palette.muted()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Status bar: era filter chips and the help hint.
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, palette: Palette) {
    let mut spans = vec![Span::raw(" ")];
    for era in Era::ALL {
        let enabled = state.era_filter().is_enabled(era);
        spans.push(Span::styled(
            format!("{} {}", era.index() + 1, era.short_label()),
            palette.era_chip(era, enabled),
        ));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled("│ ? help", palette.muted()));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

// ===== Tests =====

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
