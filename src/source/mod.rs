//! Dataset sources.
//!
//! The dataset is read once at startup, either from the copy compiled into
//! the binary or from a JSON file supplied by the user.

use crate::model::{Dataset, DatasetBounds, DatasetError};
use crate::parser::parse_dataset;
use std::path::{Path, PathBuf};
use tracing::info;

/// Dataset shipped with the binary.
pub const BUNDLED_DATASET: &str = include_str!("../../data/events.json");

/// Where the event dataset comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    /// The dataset compiled into the binary.
    Bundled,
    /// A JSON file on disk.
    File(PathBuf),
}

impl DatasetSource {
    /// Read, decode and validate the dataset.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::FileNotFound`] or [`DatasetError::Io`] when a
    /// file cannot be read, and any parse or validation error.
    pub fn load(&self, bounds: DatasetBounds) -> Result<Dataset, DatasetError> {
        let dataset = match self {
            DatasetSource::Bundled => parse_dataset(BUNDLED_DATASET, bounds)?,
            DatasetSource::File(path) => parse_dataset(&read_dataset_file(path)?, bounds)?,
        };

        info!(
            source = %self.describe(),
            events = dataset.len(),
            "Dataset loaded"
        );

        Ok(dataset)
    }

    /// Short description for logs and the header bar.
    pub fn describe(&self) -> String {
        match self {
            DatasetSource::Bundled => "bundled dataset".to_string(),
            DatasetSource::File(path) => path.display().to_string(),
        }
    }
}

/// Choose the dataset source.
///
/// A path selects [`DatasetSource::File`]; otherwise the bundled dataset is used.
pub fn detect_dataset_source(path: Option<PathBuf>) -> DatasetSource {
    match path {
        Some(path) => DatasetSource::File(path),
        None => DatasetSource::Bundled,
    }
}

fn read_dataset_file(path: &Path) -> Result<String, DatasetError> {
    std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            DatasetError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            DatasetError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}
