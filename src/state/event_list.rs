//! Event list scroll state.
//!
//! Tracks the list rows, their line offsets and the scroll position in
//! lines. The offset is always clamped so the last line of content never
//! scrolls above the bottom of the viewport.

use crate::model::EventId;
use crate::view_state::{CardIndex, ListRow};

/// Rows of the event list with their heights and scroll position.
#[derive(Debug, Clone, Default)]
pub struct EventListState {
    rows: Vec<ListRow>,
    index: CardIndex,
    scroll_offset: usize,
    viewport_height: usize,
    content_width: u16,
}

impl EventListState {
    /// Rows in display order.
    pub fn rows(&self) -> &[ListRow] {
        &self.rows
    }

    /// Line offsets of the rows.
    pub fn index(&self) -> &CardIndex {
        &self.index
    }

    /// First visible line.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Visible lines.
    pub fn viewport_height(&self) -> usize {
        self.viewport_height
    }

    /// Width the rows were measured at.
    pub fn content_width(&self) -> u16 {
        self.content_width
    }

    /// Replace rows and heights. The scroll offset is re-clamped.
    pub fn rebuild(&mut self, rows: Vec<ListRow>, heights: impl IntoIterator<Item = usize>) {
        self.index = CardIndex::from_heights(heights);
        self.rows = rows;
        self.clamp();
    }

    /// Record the width rows are measured at. Call [`Self::rebuild`] afterwards.
    pub fn set_content_width(&mut self, width: u16) {
        self.content_width = width;
    }

    /// Set the visible line count. The scroll offset is re-clamped.
    pub fn set_viewport_height(&mut self, height: usize) {
        self.viewport_height = height;
        self.clamp();
    }

    /// Largest valid scroll offset.
    pub fn max_offset(&self) -> usize {
        self.index.total().saturating_sub(self.viewport_height)
    }

    /// Scroll up by `lines`, stopping at the top.
    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    /// Scroll down by `lines`, stopping at the last full page.
    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_add(lines).min(self.max_offset());
    }

    /// Scroll up one viewport.
    pub fn page_up(&mut self) {
        self.scroll_up(self.page_size());
    }

    /// Scroll down one viewport.
    pub fn page_down(&mut self) {
        self.scroll_down(self.page_size());
    }

    /// Jump to the first line.
    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    /// Jump to the last full page.
    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = self.max_offset();
    }

    /// Put `row` at the top of the viewport, as far as content allows.
    pub fn scroll_to_row(&mut self, row: usize) {
        self.scroll_offset = self.index.offset_of(row).min(self.max_offset());
    }

    /// Row index of an event card.
    pub fn row_of(&self, id: EventId) -> Option<usize> {
        self.rows.iter().position(|row| *row == ListRow::Event(id))
    }

    /// Row covering the first visible line.
    pub fn top_row(&self) -> Option<usize> {
        self.index.row_at(self.scroll_offset)
    }

    /// Event ids in list order.
    pub fn event_ids(&self) -> impl Iterator<Item = EventId> + '_ {
        self.rows.iter().filter_map(|row| match row {
            ListRow::Event(id) => Some(*id),
            ListRow::Marker(_) => None,
        })
    }

    fn page_size(&self) -> usize {
        self.viewport_height.max(1)
    }

    fn clamp(&mut self) {
        self.scroll_offset = self.scroll_offset.min(self.max_offset());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(heights: &[usize], viewport: usize) -> EventListState {
        let rows = (0..heights.len())
            .map(|i| ListRow::Event(EventId::new(i as u32 + 1)))
            .collect();
        let mut state = EventListState::default();
        state.set_viewport_height(viewport);
        state.rebuild(rows, heights.iter().copied());
        state
    }

    #[test]
    fn scroll_down_clamps_to_content() {
        let mut state = list(&[4, 4, 4], 5);
        state.scroll_down(100);
        assert_eq!(state.scroll_offset(), 7);
    }

    #[test]
    fn scroll_up_saturates_at_zero() {
        let mut state = list(&[4, 4, 4], 5);
        state.scroll_down(3);
        state.scroll_up(10);
        assert_eq!(state.scroll_offset(), 0);
    }

    #[test]
    fn short_content_never_scrolls() {
        let mut state = list(&[2, 2], 10);
        state.scroll_down(1);
        state.page_down();
        state.scroll_to_bottom();
        assert_eq!(state.scroll_offset(), 0);
    }

    #[test]
    fn page_moves_by_viewport_height() {
        let mut state = list(&[10, 10, 10], 6);
        state.page_down();
        assert_eq!(state.scroll_offset(), 6);
        state.page_up();
        assert_eq!(state.scroll_offset(), 0);
    }

    #[test]
    fn scroll_to_row_places_card_at_top() {
        let mut state = list(&[3, 5, 2, 6], 4);
        state.scroll_to_row(2);
        assert_eq!(state.scroll_offset(), 8);
        assert_eq!(state.top_row(), Some(2));
    }

    #[test]
    fn scroll_to_last_row_is_clamped() {
        let mut state = list(&[3, 5, 2, 6], 10);
        state.scroll_to_row(3);
        assert_eq!(state.scroll_offset(), 6);
    }

    #[test]
    fn rebuild_with_fewer_rows_reclamps_offset() {
        let mut state = list(&[10, 10, 10], 5);
        state.scroll_to_bottom();
        state.rebuild(vec![ListRow::Marker(0)], [2]);
        assert_eq!(state.scroll_offset(), 0);
    }

    #[test]
    fn row_of_finds_event_cards_only() {
        let mut state = EventListState::default();
        state.rebuild(
            vec![ListRow::Marker(0), ListRow::Event(EventId::new(7))],
            [2, 4],
        );
        assert_eq!(state.row_of(EventId::new(7)), Some(1));
        assert_eq!(state.row_of(EventId::new(8)), None);
        assert_eq!(state.event_ids().collect::<Vec<_>>(), vec![EventId::new(7)]);
    }
}
