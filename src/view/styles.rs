//! Color and style configuration.
//!
//! Eras get their own colors; everything else uses a small fixed palette.

use crate::model::Era;
use ratatui::style::{Color, Modifier, Style};

/// Secondary text such as hints and marker rows.
pub const MUTED_TEXT: Style = Style::new().fg(Color::DarkGray);

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag (or `no_color` in the config file)
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Explicit setting, ignoring the environment.
    pub fn with_colors(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Palette =====

/// Styles used by every widget.
///
/// With colors disabled only modifiers (bold, dim, reversed) remain, so
/// active and selected markers stay distinguishable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    colors: bool,
}

impl Palette {
    /// Palette honoring the color setting.
    pub fn new(config: ColorConfig) -> Self {
        Self {
            colors: config.colors_enabled(),
        }
    }

    fn fg(&self, color: Color) -> Style {
        if self.colors {
            Style::default().fg(color)
        } else {
            Style::default()
        }
    }

    /// Base style of an era.
    pub fn era(&self, era: Era) -> Style {
        let (r, g, b) = era.rgb();
        self.fg(Color::Rgb(r, g, b))
    }

    /// Overview marker for an event in the filtered set.
    pub fn active_marker(&self, era: Era) -> Style {
        self.era(era).add_modifier(Modifier::BOLD)
    }

    /// Overview marker for an event outside the filtered set.
    pub fn inactive_marker(&self, era: Era) -> Style {
        self.era(era).add_modifier(Modifier::DIM)
    }

    /// Overview marker of the selected event.
    pub fn selected_marker(&self) -> Style {
        self.fg(Color::White)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    /// Axis line and tick marks.
    pub fn axis(&self) -> Style {
        self.fg(Color::Gray)
    }

    /// Year labels above the axis.
    pub fn tick_label(&self) -> Style {
        self.fg(Color::Gray)
    }

    /// Secondary text: dates, hints, empty-list message.
    pub fn muted(&self) -> Style {
        if self.colors {
            MUTED_TEXT
        } else {
            Style::default().add_modifier(Modifier::DIM)
        }
    }

    /// Header line and help categories.
    pub fn header(&self) -> Style {
        self.fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    /// Card title, reversed when the card is selected.
    pub fn title(&self, era: Era, selected: bool) -> Style {
        let style = self.era(era).add_modifier(Modifier::BOLD);
        if selected {
            style.add_modifier(Modifier::REVERSED)
        } else {
            style
        }
    }

    /// Further-reading link on a card.
    pub fn link(&self) -> Style {
        self.fg(Color::Blue).add_modifier(Modifier::UNDERLINED)
    }

    /// Panel borders.
    pub fn border(&self) -> Style {
        self.fg(Color::DarkGray)
    }

    /// Era filter chip in the status bar.
    pub fn era_chip(&self, era: Era, enabled: bool) -> Style {
        if enabled {
            self.era(era).add_modifier(Modifier::BOLD)
        } else {
            self.muted().add_modifier(Modifier::CROSSED_OUT)
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(ColorConfig::from_env_and_args(false))
    }
}

// ===== Tests =====
