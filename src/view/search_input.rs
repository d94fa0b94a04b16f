//! Search input widget for rendering the search bar.

use super::styles::Palette;
use crate::state::SearchState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search input widget.
/// Renders the search bar while typing or with a submitted query.
pub struct SearchInput<'a> {
    search_state: &'a SearchState,
    match_count: usize,
    palette: Palette,
}

impl<'a> SearchInput<'a> {
    /// Create new SearchInput widget.
    pub fn new(search_state: &'a SearchState, match_count: usize, palette: Palette) -> Self {
        Self {
            search_state,
            match_count,
            palette,
        }
    }

    fn block(&self, title: String) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_style(self.palette.border())
            .title(title)
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.search_state {
            SearchState::Typing { query, cursor } => {
                // Split query around the cursor; a cursor at the end shows a block.
                let before: String = query.chars().take(*cursor).collect();
                let mut after = query.chars().skip(*cursor);
                let cursor_char = after.next().map_or(" ".to_string(), String::from);
                let after_text: String = after.collect();

                let line = Line::from(vec![
                    Span::raw(before),
                    Span::styled(cursor_char, Style::default().add_modifier(Modifier::REVERSED)),
                    Span::raw(after_text),
                ]);
                let title = format!(" Search · {} matches · Enter to keep, Esc to clear ", self.match_count);
                Paragraph::new(line).block(self.block(title)).render(area, buf);
            }
            SearchState::Active { query } => {
                let title = format!(" Search (active) · {} matches ", self.match_count);
                Paragraph::new(Line::from(query.as_str().to_string()))
                    .block(self.block(title))
                    .render(area, buf);
            }
            SearchState::Inactive => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SearchQuery;
    use crate::view::styles::ColorConfig;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(state: &SearchState, matches: usize) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 3)).unwrap();
        terminal
            .draw(|frame| {
                let widget =
                    SearchInput::new(state, matches, Palette::new(ColorConfig::with_colors(false)));
                frame.render_widget(widget, frame.area());
            })
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

    #[test]
    fn typing_state_shows_query_and_match_count() {
        let state = SearchState::Typing {
            query: "rome".to_string(),
            cursor: 4,
        };

        let rendered = render(&state, 3);

        assert!(rendered.contains("rome"));
        assert!(rendered.contains("3 matches"));
    }

    #[test]
    fn active_state_shows_submitted_query() {
        let state = SearchState::Active {
            query: SearchQuery::new("active query").unwrap(),
        };

        let rendered = render(&state, 0);

        assert!(rendered.contains("active query"));
        assert!(rendered.contains("Search (active)"));
    }

    #[test]
    fn inactive_state_renders_nothing() {
        let rendered = render(&SearchState::Inactive, 0);
        assert!(rendered.chars().all(|c| c == ' ' || c == '\n'));
    }
}
