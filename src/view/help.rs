//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with all keyboard shortcuts grouped by category.
//! Triggered by '?' key, dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::styles::Palette;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Shortcut groups: category title, then `(keys, description)` pairs.
const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Event List",
        &[
            ("j/↓", "Scroll down"),
            ("k/↑", "Scroll up"),
            ("Ctrl+d/PgDn", "Page down"),
            ("Ctrl+u/PgUp", "Page up"),
            ("g/Home", "Go to top"),
            ("G/End", "Go to bottom"),
            ("n", "Select next event"),
            ("N", "Select previous event"),
        ],
    ),
    (
        "Overview",
        &[
            ("+/=", "Zoom in"),
            ("-", "Zoom out"),
            ("h/←", "Pan to earlier years"),
            ("l/→", "Pan to later years"),
            ("0", "Show full timeline"),
            ("c", "Center on selected event"),
            ("e", "Zoom to selected event's era"),
            ("Click", "Select marker and jump to its card"),
            ("Wheel", "Zoom (over overview) / scroll (over list)"),
        ],
    ),
    (
        "Eras",
        &[("1-5", "Toggle era filter"), ("a", "Show all eras")],
    ),
    (
        "Search",
        &[
            ("//Ctrl+f", "Start search"),
            ("Enter", "Keep query and close input"),
            ("Esc", "Clear search"),
        ],
    ),
    (
        "Application",
        &[("?", "Toggle this help"), ("q/Ctrl+c", "Quit")],
    ),
];

/// Column width reserved for key names.
const KEY_COLUMN_WIDTH: usize = 14;

/// Render the help overlay centered on the screen.
///
/// `scroll_offset` is the first content line shown.
pub fn render_help_overlay(frame: &mut Frame, scroll_offset: u16, palette: &Palette) {
    let area = frame.area();
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(palette))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(palette.header()),
        )
        .alignment(Alignment::Left)
        .scroll((scroll_offset, 0));

    frame.render_widget(help_paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };
    let hint = Paragraph::new(Line::from(Span::styled(
        " Press Esc or ? to close ",
        palette.muted(),
    )))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Largest useful scroll offset for a terminal of `terminal_height` rows.
pub fn max_help_scroll(terminal_height: u16) -> usize {
    let visible = (terminal_height * HELP_POPUP_HEIGHT_PERCENT / 100).saturating_sub(2);
    help_line_count().saturating_sub(usize::from(visible))
}

fn help_line_count() -> usize {
    let entries: usize = HELP_SECTIONS.iter().map(|(_, keys)| keys.len() + 1).sum();
    // Blank line between sections.
    entries + HELP_SECTIONS.len().saturating_sub(1)
}

/// Calculate the centered rect for the help overlay.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    Rect {
        x: area.x + (area.width.saturating_sub(popup_width)) / 2,
        y: area.y + (area.height.saturating_sub(popup_height)) / 2,
        width: popup_width,
        height: popup_height,
    }
}

fn build_help_content(palette: &Palette) -> Vec<Line<'static>> {
    let category_style = palette.header();
    let key_style = Style::default().add_modifier(Modifier::BOLD);
    let desc_style = Style::default();

    let mut lines = Vec::with_capacity(help_line_count());
    for (index, (category, keys)) in HELP_SECTIONS.iter().enumerate() {
        if index > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(*category, category_style)));
        for (key, description) in keys.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<KEY_COLUMN_WIDTH$}"), key_style),
                Span::styled(*description, desc_style),
            ]));
        }
    }
    lines
}

// ===== Tests =====

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
