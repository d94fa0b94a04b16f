//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Event list scrolling
    /// Scroll the event list up by one line. Default: k/↑
    ScrollUp,
    /// Scroll the event list down by one line. Default: j/↓
    ScrollDown,
    /// Scroll up by one page. Default: Ctrl+u/Page Up
    PageUp,
    /// Scroll down by one page. Default: Ctrl+d/Page Down
    PageDown,
    /// Jump to the first row. Default: g/Home
    ScrollToTop,
    /// Jump to the last row. Default: G/End
    ScrollToBottom,

    // Selection
    /// Select the next event in the filtered list. Default: n
    NextEvent,
    /// Select the previous event in the filtered list. Default: N
    PrevEvent,

    // Overview navigator
    /// Shrink the visible year range. Default: +/=
    ZoomIn,
    /// Grow the visible year range. Default: -
    ZoomOut,
    /// Shift the visible range towards earlier years. Default: h/←
    PanLeft,
    /// Shift the visible range towards later years. Default: l/→
    PanRight,
    /// Show the full dataset range. Default: 0
    ResetView,
    /// Center the visible range on the selected event. Default: c
    CenterOnSelection,
    /// Fit the visible range to the selected event's era. Default: e
    ZoomToEra,

    // Filters
    /// Toggle one era in the filter. Field: era index (0-4). Default: 1-5
    ToggleEra(usize),
    /// Enable every era. Default: a
    ShowAllEras,

    // Search
    /// Activate search input. Default: / or Ctrl+f
    StartSearch,
    /// Clear the search. Default: Esc
    CancelSearch,

    // Application
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}

impl KeyAction {
    /// Whether the action changes the overview's visible range.
    pub fn moves_view(self) -> bool {
        matches!(
            self,
            KeyAction::ZoomIn
                | KeyAction::ZoomOut
                | KeyAction::PanLeft
                | KeyAction::PanRight
                | KeyAction::ResetView
                | KeyAction::CenterOnSelection
                | KeyAction::ZoomToEra
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_actions_are_classified() {
        assert!(KeyAction::ZoomIn.moves_view());
        assert!(KeyAction::PanRight.moves_view());
        assert!(KeyAction::ResetView.moves_view());
        assert!(!KeyAction::ScrollDown.moves_view());
        assert!(!KeyAction::ToggleEra(0).moves_view());
    }

    #[test]
    fn toggle_era_carries_index() {
        let action = KeyAction::ToggleEra(3);
        match action {
            KeyAction::ToggleEra(index) => assert_eq!(index, 3),
            _ => panic!("ToggleEra should match ToggleEra variant"),
        }
    }
}
