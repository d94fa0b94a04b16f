//! Property-based tests for card text wrapping.
//!
//! Tests validate wrap-related invariants:
//! 1. Wrapped lines never exceed the width
//! 2. Wrapping keeps every non-whitespace character in order
//! 3. Zero width handles gracefully (no panic)
//! 4. Card height agrees with the rendered card lines

use epochline::model::{Era, Event, EventId};
use epochline::view::{card_lines, ColorConfig, Palette};
use epochline::view_state::{card_height, wrap_text};
use proptest::prelude::*;
use unicode_width::UnicodeWidthStr;

// ===== Helper Functions =====

fn make_event(description: String, link: String) -> Event {
    Event {
        id: EventId::new(1),
        year: 0,
        era: Era::Classical,
        title: "Title".to_string(),
        date: "0".to_string(),
        location: "Place".to_string(),
        description,
        image: String::new(),
        link,
        icon: String::new(),
    }
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-zA-Zé]{1,15}", 0..30).prop_map(|words| words.join(" "))
}

// ===== Properties =====

proptest! {
    #[test]
    fn wrapped_lines_fit_width(text in text_strategy(), width in 1u16..80) {
        for line in wrap_text(&text, width) {
            prop_assert!(line.width() <= usize::from(width), "line {:?} wider than {}", line, width);
        }
    }

    #[test]
    fn wrapping_preserves_characters(text in text_strategy(), width in 1u16..80) {
        let original: String = text.split_whitespace().collect();
        let wrapped: String = wrap_text(&text, width)
            .iter()
            .flat_map(|line| line.split_whitespace())
            .collect();

        prop_assert_eq!(original, wrapped);
    }

    #[test]
    fn zero_width_does_not_panic(text in text_strategy()) {
        let lines = wrap_text(&text, 0);
        prop_assert!(lines.iter().all(|line| line.width() <= 1));
    }

    #[test]
    fn card_height_matches_rendered_lines(
        description in text_strategy(),
        has_link in any::<bool>(),
        width in 0u16..120,
    ) {
        let link = if has_link { "https://example.org".to_string() } else { String::new() };
        let event = make_event(description, link);
        let palette = Palette::new(ColorConfig::with_colors(false));

        let lines = card_lines(&event, width, false, &palette);

        prop_assert_eq!(lines.len(), card_height(&event, width));
    }
}
