//! JSON parser for event datasets.
//!
//! Pure functions converting dataset text into a validated [`Dataset`].
//! The input is a JSON array of event objects:
//!
//! ```json
//! [
//!   {
//!     "id": 6,
//!     "year": -3200,
//!     "era": "Ancient History",
//!     "title": "Invention of Writing",
//!     "date": "c. 3200 BCE",
//!     "location": "Sumer, Mesopotamia",
//!     "description": "Cuneiform script appears on clay tablets.",
//!     "image": "images/cuneiform.jpg",
//!     "link": "https://en.wikipedia.org/wiki/Cuneiform",
//!     "icon": "fa-pen-nib"
//!   }
//! ]
//! ```
//!
//! `image`, `link` and `icon` are optional. An era label outside the five
//! known eras is a parse error.

use crate::model::{Dataset, DatasetBounds, DatasetError, Event};
use tracing::debug;

/// Decode and validate a dataset.
///
/// # Errors
///
/// Returns [`DatasetError::Parse`] for malformed JSON, missing fields and
/// unknown eras, and the validation errors of [`Dataset::new`].
pub fn parse_dataset(json: &str, bounds: DatasetBounds) -> Result<Dataset, DatasetError> {
    let events: Vec<Event> = serde_json::from_str(json).map_err(|e| DatasetError::Parse {
        reason: e.to_string(),
    })?;

    debug!(count = events.len(), "Decoded dataset records");

    Dataset::new(events, bounds)
}
