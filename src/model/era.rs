//! Historical eras.
//!
//! The era set is closed: every event belongs to exactly one of five
//! periods. Spans are derived from the events, never stored.

use super::event::Event;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One of the five historical periods used to group and color events.
///
/// Serialized as its display label (e.g. `"Classical Antiquity"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Era {
    /// Prehistory to the end of the Bronze Age.
    #[serde(rename = "Ancient History")]
    Ancient,
    /// Greece, Rome and their contemporaries.
    #[serde(rename = "Classical Antiquity")]
    Classical,
    /// Late antiquity to the early modern period.
    #[serde(rename = "Post-Classical History")]
    PostClassical,
    /// Renaissance to the early twentieth century.
    #[serde(rename = "Modern History")]
    Modern,
    /// Twentieth century onward.
    #[serde(rename = "Contemporary History")]
    Contemporary,
}

impl Era {
    /// All eras in chronological order.
    pub const ALL: [Era; 5] = [
        Era::Ancient,
        Era::Classical,
        Era::PostClassical,
        Era::Modern,
        Era::Contemporary,
    ];

    /// Display label, identical to the JSON representation.
    pub fn label(self) -> &'static str {
        match self {
            Era::Ancient => "Ancient History",
            Era::Classical => "Classical Antiquity",
            Era::PostClassical => "Post-Classical History",
            Era::Modern => "Modern History",
            Era::Contemporary => "Contemporary History",
        }
    }

    /// First word of the label, for narrow places such as the status bar.
    pub fn short_label(self) -> &'static str {
        match self {
            Era::Ancient => "Ancient",
            Era::Classical => "Classical",
            Era::PostClassical => "Post-Classical",
            Era::Modern => "Modern",
            Era::Contemporary => "Contemporary",
        }
    }

    /// Parse a display label or its short form. Case-insensitive;
    /// surrounding whitespace ignored.
    pub fn from_label(label: &str) -> Option<Era> {
        let wanted = label.trim();
        Era::ALL.into_iter().find(|era| {
            era.label().eq_ignore_ascii_case(wanted)
                || era.short_label().eq_ignore_ascii_case(wanted)
        })
    }

    /// Zero-based position in [`Era::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Era at the given position in [`Era::ALL`].
    pub fn from_index(index: usize) -> Option<Era> {
        Era::ALL.get(index).copied()
    }

    /// Display color as an RGB triple.
    ///
    /// Amber, lime, cyan, fuchsia and rose, in era order.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Era::Ancient => (251, 191, 36),
            Era::Classical => (163, 230, 53),
            Era::PostClassical => (34, 211, 238),
            Era::Modern => (232, 121, 249),
            Era::Contemporary => (251, 113, 133),
        }
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Year interval covered by the events of one era.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EraSpan {
    /// The era this span covers.
    pub era: Era,
    /// Earliest event year in this era.
    pub start: i64,
    /// Latest event year in this era.
    pub end: i64,
}

/// Group events by era and track the min/max year of each group.
///
/// Eras without events are absent. Result is ordered by start year.
pub fn era_spans(events: &[Event]) -> Vec<EraSpan> {
    let mut by_era: BTreeMap<Era, EraSpan> = BTreeMap::new();

    for event in events {
        by_era
            .entry(event.era)
            .and_modify(|span| {
                span.start = span.start.min(event.year);
                span.end = span.end.max(event.year);
            })
            .or_insert(EraSpan {
                era: event.era,
                start: event.year,
                end: event.year,
            });
    }

    let mut spans: Vec<EraSpan> = by_era.into_values().collect();
    spans.sort_by_key(|span| (span.start, span.era));
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::event::test_event;

    #[test]
    fn labels_round_trip_through_from_label() {
        for era in Era::ALL {
            assert_eq!(Era::from_label(era.label()), Some(era));
        }
    }

    #[test]
    fn from_label_ignores_case_and_whitespace() {
        assert_eq!(Era::from_label("  modern history "), Some(Era::Modern));
    }

    #[test]
    fn from_label_accepts_short_form() {
        assert_eq!(Era::from_label("post-classical"), Some(Era::PostClassical));
        assert_eq!(Era::from_label("Modern"), Some(Era::Modern));
    }

    #[test]
    fn from_label_rejects_unknown() {
        assert_eq!(Era::from_label("Stone Age"), None);
    }

    #[test]
    fn deserializes_from_display_label() {
        let era: Era = serde_json::from_str("\"Post-Classical History\"").unwrap();
        assert_eq!(era, Era::PostClassical);
    }

    #[test]
    fn unknown_label_fails_to_deserialize() {
        let result: Result<Era, _> = serde_json::from_str("\"Bronze Age\"");
        assert!(result.is_err());
    }

    #[test]
    fn index_and_from_index_agree() {
        for (i, era) in Era::ALL.into_iter().enumerate() {
            assert_eq!(era.index(), i);
            assert_eq!(Era::from_index(i), Some(era));
        }
        assert_eq!(Era::from_index(5), None);
    }

    #[test]
    fn era_spans_track_min_and_max_per_era() {
        let events = vec![
            test_event(1, -3000, Era::Ancient),
            test_event(2, -8000, Era::Ancient),
            test_event(3, 1500, Era::Modern),
            test_event(4, 1800, Era::Modern),
            test_event(5, -500, Era::Classical),
        ];

        let spans = era_spans(&events);

        assert_eq!(
            spans,
            vec![
                EraSpan {
                    era: Era::Ancient,
                    start: -8000,
                    end: -3000
                },
                EraSpan {
                    era: Era::Classical,
                    start: -500,
                    end: -500
                },
                EraSpan {
                    era: Era::Modern,
                    start: 1500,
                    end: 1800
                },
            ]
        );
    }

    #[test]
    fn era_spans_empty_for_no_events() {
        assert!(era_spans(&[]).is_empty());
    }
}
