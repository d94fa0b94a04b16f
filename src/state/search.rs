//! Search state machine.
//!
//! SearchState is a sum type representing the three possible search states:
//! - Inactive: No search active
//! - Typing: User is entering a query (filters live)
//! - Active: Query submitted, input closed, filter still applied

use crate::model::Event;

// ===== SearchState =====

/// Search state machine.
/// Sum type enforces exactly one state at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchState {
    /// No active search.
    #[default]
    Inactive,
    /// User is typing query.
    Typing {
        /// Text entered so far, possibly blank.
        query: String,
        /// Cursor position in characters, not bytes.
        cursor: usize,
    },
    /// Search submitted.
    Active {
        /// Query applied to the list.
        query: SearchQuery,
    },
}

impl SearchState {
    /// Start typing with an empty query.
    pub fn start_typing() -> Self {
        SearchState::Typing {
            query: String::new(),
            cursor: 0,
        }
    }

    /// The query currently filtering the list, if any.
    ///
    /// A blank query while typing filters nothing.
    pub fn effective_query(&self) -> Option<SearchQuery> {
        match self {
            SearchState::Inactive => None,
            SearchState::Typing { query, .. } => SearchQuery::new(query.as_str()),
            SearchState::Active { query } => Some(query.clone()),
        }
    }

    /// Whether the search bar is accepting input.
    pub fn is_typing(&self) -> bool {
        matches!(self, SearchState::Typing { .. })
    }
}

// ===== SearchQuery =====

/// Validated search query. Never empty.
/// Smart constructor enforces non-empty invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Smart constructor: validates query is non-empty.
    /// Returns None if query is empty or whitespace-only.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let s = raw.into();
        if s.trim().is_empty() {
            None
        } else {
            Some(Self(s))
        }
    }

    /// The query text as entered.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive substring match over the event's text fields.
    ///
    /// Searches title, description, location and date label.
    pub fn matches(&self, event: &Event) -> bool {
        let needle = self.0.trim().to_lowercase();
        [
            event.title.as_str(),
            event.description.as_str(),
            event.location.as_str(),
            event.date.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}
