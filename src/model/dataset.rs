//! Validated, immutable event collection.

use super::era::{era_spans, EraSpan};
use super::error::DatasetError;
use super::event::{Event, EventId};
use super::year::DatasetBounds;
use std::collections::{HashMap, HashSet};

/// The full event list, validated against its bounds and sorted by year.
///
/// # Invariants
/// - At least one event
/// - Event ids are unique
/// - Every event year lies within `bounds`
/// - Events are ordered by year (ties keep input order)
#[derive(Debug, Clone)]
pub struct Dataset {
    events: Vec<Event>,
    bounds: DatasetBounds,
    /// Position of each event in `events`
    index: HashMap<EventId, usize>,
}

impl Dataset {
    /// Smart constructor: validates and sorts the events.
    ///
    /// Stops at the first violation found in input order.
    ///
    /// # Errors
    ///
    /// - [`DatasetError::Empty`] for an empty list
    /// - [`DatasetError::DuplicateId`] when an id repeats
    /// - [`DatasetError::YearOutOfBounds`] when a year lies outside `bounds`
    pub fn new(mut events: Vec<Event>, bounds: DatasetBounds) -> Result<Self, DatasetError> {
        if events.is_empty() {
            return Err(DatasetError::Empty);
        }

        let mut seen = HashSet::with_capacity(events.len());
        for event in &events {
            if !seen.insert(event.id) {
                return Err(DatasetError::DuplicateId { id: event.id });
            }
            if !bounds.contains(event.year) {
                return Err(DatasetError::YearOutOfBounds {
                    id: event.id,
                    year: event.year,
                    min_year: bounds.min_year(),
                    max_year: bounds.max_year(),
                });
            }
        }

        events.sort_by_key(|event| event.year);
        let index = events
            .iter()
            .enumerate()
            .map(|(position, event)| (event.id, position))
            .collect();
        Ok(Self {
            events,
            bounds,
            index,
        })
    }

    /// Events in year order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Year interval the events were validated against.
    pub fn bounds(&self) -> DatasetBounds {
        self.bounds
    }

    /// Number of events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Always false for a constructed dataset.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Event with the given id, in constant time.
    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.index.get(&id).and_then(|&position| self.events.get(position))
    }

    /// Era spans derived from the events.
    pub fn era_spans(&self) -> Vec<EraSpan> {
        era_spans(&self.events)
    }
}
