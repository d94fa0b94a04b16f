//! epochline
//!
//! Terminal timeline of world history: a zoomable overview axis of event
//! markers above a scrolling list of event cards.
//!
//! Pure Core / Impure Shell: `model`, `view_state` and `state` are pure and
//! testable without a terminal; `view` owns the terminal and the event loop.

pub mod config;
pub mod logging;
pub mod model;
pub mod parser;
pub mod source;
pub mod state;
pub mod view;
pub mod view_state;
