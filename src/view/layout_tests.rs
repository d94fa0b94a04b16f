//! Tests for screen layout rendering.

use super::*;
use crate::model::event::test_event;
use crate::model::{Dataset, DatasetBounds};
use crate::state::{NavigatorSettings, SearchQuery};
use crate::view::styles::ColorConfig;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

// ===== Test Helpers =====

fn create_state() -> AppState {
    let events = vec![
        test_event(1, -9000, Era::Ancient),
        test_event(2, -500, Era::Classical),
        test_event(3, 1200, Era::PostClassical),
        test_event(4, 1990, Era::Contemporary),
    ];
    let dataset = Dataset::new(events, DatasetBounds::default()).unwrap();
    AppState::new(dataset, NavigatorSettings::default()).unwrap()
}

fn render(state: &mut AppState) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let search_visible = !matches!(state.search(), SearchState::Inactive);
    let areas = calculate_areas(Rect::new(0, 0, 80, 24), search_visible);
    state.set_viewport(areas.list.width, usize::from(areas.list.height));

    let palette = Palette::new(ColorConfig::with_colors(false));
    terminal
        .draw(|frame| render_layout(frame, state, palette))
        .unwrap();

    let buffer = terminal.backend().buffer();
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ===== calculate_areas =====

#[test]
fn areas_without_search() {
    let areas = calculate_areas(Rect::new(0, 0, 80, 24), false);

    assert_eq!(areas.header, Rect::new(0, 0, 80, 1));
    assert_eq!(areas.overview, Rect::new(0, 1, 80, 7));
    assert_eq!(areas.search, None);
    assert_eq!(areas.list, Rect::new(1, 8, 78, 15));
    assert_eq!(areas.status, Rect::new(0, 23, 80, 1));
}

#[test]
fn search_bar_takes_space_from_list() {
    let areas = calculate_areas(Rect::new(0, 0, 80, 24), true);

    assert_eq!(areas.search, Some(Rect::new(0, 8, 80, 3)));
    assert_eq!(areas.list, Rect::new(1, 11, 78, 12));
}

// ===== render_layout =====

#[test]
fn header_shows_counts_and_bounds() {
    let mut state = create_state();

    let screen = render(&mut state);
    let header = screen.lines().next().unwrap();

    assert!(header.contains("epochline"));
    assert!(header.contains("4 of 4 events"));
    assert!(header.contains("10000 BCE"));
    assert!(header.contains("2024 CE"));
    assert!(header.contains("at 9000 BCE"));
}

#[test]
fn status_bar_lists_eras() {
    let mut state = create_state();

    let screen = render(&mut state);
    let status = screen.lines().last().unwrap();

    assert!(status.contains("1 Ancient"));
    assert!(status.contains("5 Contemporary"));
    assert!(status.contains("? help"));
}

#[test]
fn list_shows_first_card() {
    let mut state = create_state();

    let screen = render(&mut state);

    assert!(screen.contains("Event 1"));
    assert!(screen.contains("Overview"));
}

#[test]
fn active_search_shows_search_bar() {
    let mut state = create_state();
    state.set_search(SearchState::Active {
        query: SearchQuery::new("Event 3").unwrap(),
    });

    let screen = render(&mut state);

    assert!(screen.contains("Search (active)"));
    assert!(screen.contains("1 of 4 events"));
}

#[test]
fn help_overlay_drawn_on_top() {
    let mut state = create_state();
    state.help_visible = true;

    let screen = render(&mut state);

    assert!(screen.contains("Keyboard Shortcuts"));
}
