//! Historical event records.

use super::era::Era;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier of an event within a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(u32);

impl EventId {
    /// Wrap a raw identifier.
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw identifier.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "event-{}", self.0)
    }
}

/// A dated historical event.
///
/// Immutable once loaded. `year` is negative for BCE dates.
/// `image`, `link` and `icon` are opaque references passed through to
/// the presentation layer and may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Unique within the dataset.
    pub id: EventId,
    /// Calendar year used for placement.
    pub year: i64,
    /// Period the event belongs to.
    pub era: Era,
    /// Card heading.
    pub title: String,
    /// Human-readable date label (e.g. "c. 3200 BCE").
    pub date: String,
    /// Place name shown next to the date.
    pub location: String,
    /// Card body text.
    pub description: String,
    /// Image reference.
    #[serde(default)]
    pub image: String,
    /// Further-reading URL, shown under the description when present.
    #[serde(default)]
    pub link: String,
    /// Icon reference.
    #[serde(default)]
    pub icon: String,
}

#[cfg(test)]
pub(crate) fn test_event(id: u32, year: i64, era: Era) -> Event {
    Event {
        id: EventId::new(id),
        year,
        era,
        title: format!("Event {id}"),
        date: year.to_string(),
        location: "Somewhere".to_string(),
        description: format!("Description of event {id}"),
        image: String::new(),
        link: String::new(),
        icon: String::new(),
    }
}
