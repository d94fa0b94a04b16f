//! Event-list rows and their text layout.
//!
//! The list interleaves event cards with millennium marker rows. Heights
//! are computed here from the same wrapping the renderer uses, so the
//! [`CardIndex`](super::card_index::CardIndex) offsets match what is drawn.

use crate::model::{DatasetBounds, Event, EventId};
use unicode_width::UnicodeWidthChar;

/// Spacing between millennium markers, in years.
pub const MARKER_INTERVAL: i64 = 1000;

/// Columns taken by card indentation.
pub const CARD_INDENT: u16 = 2;

/// One row of the event list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListRow {
    /// Millennium marker at the given year.
    Marker(i64),
    /// Event card.
    Event(EventId),
}

/// Interleave `events` (already in year order) with millennium markers
/// spanning the dataset bounds.
///
/// A marker precedes the events of its own year.
pub fn build_rows<'a>(
    events: impl IntoIterator<Item = &'a Event>,
    bounds: DatasetBounds,
) -> Vec<ListRow> {
    let first_marker = {
        let m = bounds.min_year().div_euclid(MARKER_INTERVAL) * MARKER_INTERVAL;
        if m < bounds.min_year() {
            m + MARKER_INTERVAL
        } else {
            m
        }
    };
    let mut markers = (0..)
        .map(|i| first_marker + i * MARKER_INTERVAL)
        .take_while(|year| *year <= bounds.max_year())
        .peekable();

    let mut rows = Vec::new();
    for event in events {
        while let Some(year) = markers.next_if(|year| *year <= event.year) {
            rows.push(ListRow::Marker(year));
        }
        rows.push(ListRow::Event(event.id));
    }
    rows.extend(markers.map(ListRow::Marker));
    rows
}

/// Height of a marker row: the label line plus one blank line.
pub const MARKER_ROW_HEIGHT: usize = 2;

/// Lines of a card's body text for a given content width.
///
/// Layout: title, `date | location`, wrapped description, optional link,
/// blank separator.
pub fn card_height(event: &Event, content_width: u16) -> usize {
    let description = wrap_text(&event.description, body_width(content_width)).len();
    let link = usize::from(!event.link.is_empty());
    2 + description + link + 1
}

/// Width available to indented card body text.
pub fn body_width(content_width: u16) -> u16 {
    content_width.saturating_sub(CARD_INDENT).max(1)
}

/// Greedy word wrap by display width.
///
/// Words wider than `width` are broken at character boundaries. Empty
/// input yields no lines.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width.max(1));
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width: usize = word.chars().map(|c| c.width().unwrap_or(0)).sum();

        if current_width > 0 && current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
            continue;
        }

        if current_width > 0 {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= width {
            current.push_str(word);
            current_width = word_width;
            continue;
        }

        for ch in word.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if current_width + ch_width > width && current_width > 0 {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(ch);
            current_width += ch_width;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
