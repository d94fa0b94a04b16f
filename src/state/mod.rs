//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod app_state;
pub mod event_list;
pub mod filter;
pub mod navigator_handler;
pub mod scroll_handler;
pub mod search;
pub mod search_input_handler;

// Re-export for convenience
pub use app_state::{AppState, NavigatorSettings};
pub use event_list::EventListState;
pub use filter::EraFilter;
pub use navigator_handler::handle_navigator_action;
pub use scroll_handler::handle_scroll_action;
pub use search::{SearchQuery, SearchState};
