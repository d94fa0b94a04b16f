//! Event list scrolling and selection action handler.
//!
//! Pure functions that transform AppState in response to list actions.

use crate::model::KeyAction;
use crate::state::AppState;

/// Handle a list scroll or selection action.
///
/// Actions that do not concern the list leave the state unchanged.
pub fn handle_scroll_action(state: &mut AppState, action: KeyAction) {
    match action {
        KeyAction::ScrollUp => state.scroll_up(1),
        KeyAction::ScrollDown => state.scroll_down(1),
        KeyAction::PageUp => state.page_up(),
        KeyAction::PageDown => state.page_down(),
        KeyAction::ScrollToTop => state.scroll_to_top(),
        KeyAction::ScrollToBottom => state.scroll_to_bottom(),
        KeyAction::NextEvent => state.select_next(),
        KeyAction::PrevEvent => state.select_prev(),
        _ => {}
    }
}
