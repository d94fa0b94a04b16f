//! Search input handling (pure state transitions).
//!
//! Handles text input for the SearchState::Typing variant.
//! All functions are pure - no side effects, testable without TUI.
//! Cursor positions count characters so multi-byte input edits cleanly.

use crate::state::{SearchQuery, SearchState};

/// Handle character input when in Typing state.
/// Inserts the character at cursor position and advances cursor.
///
/// Returns updated SearchState. No-op if not in Typing state.
pub fn handle_char_input(state: SearchState, ch: char) -> SearchState {
    match state {
        SearchState::Typing { mut query, cursor } => {
            let at = byte_offset(&query, cursor);
            query.insert(at, ch);
            SearchState::Typing {
                query,
                cursor: cursor + 1,
            }
        }
        other => other,
    }
}

/// Handle backspace when in Typing state.
/// Deletes character before cursor if cursor > 0.
///
/// Returns updated SearchState. No-op if not in Typing state.
pub fn handle_backspace(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { mut query, cursor } if cursor > 0 => {
            let at = byte_offset(&query, cursor - 1);
            query.remove(at);
            SearchState::Typing {
                query,
                cursor: cursor - 1,
            }
        }
        other => other,
    }
}

/// Move cursor left by one position.
/// Saturates at 0 (does not wrap).
pub fn handle_cursor_left(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { query, cursor } => SearchState::Typing {
            query,
            cursor: cursor.saturating_sub(1),
        },
        other => other,
    }
}

/// Move cursor right by one position.
/// Saturates at query length (does not wrap).
pub fn handle_cursor_right(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { query, cursor } => {
            let max_cursor = query.chars().count();
            SearchState::Typing {
                query,
                cursor: (cursor + 1).min(max_cursor),
            }
        }
        other => other,
    }
}

/// Submit the typed query.
///
/// A blank query ends the search (Inactive); otherwise the search becomes
/// Active. No-op outside the Typing state.
pub fn submit_search(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { query, .. } => match SearchQuery::new(query) {
            Some(query) => SearchState::Active { query },
            None => SearchState::Inactive,
        },
        other => other,
    }
}

/// Byte index of the `cursor`-th character, or the end of the string.
fn byte_offset(query: &str, cursor: usize) -> usize {
    query
        .char_indices()
        .nth(cursor)
        .map_or(query.len(), |(index, _)| index)
}
