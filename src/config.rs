//! Configuration for parsing and rendering previews.
//!
//! Settings are assembled from defaults and builder methods; the CLI maps
//! its flags onto them in `Args::to_config`.

use crate::constants::{CSV_EXTENSION, DEFAULT_NULL_MARKER, PREVIEW_ROW_LIMIT};
use crate::error::{PreviewError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Runtime settings for the preview workflow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// Number of data rows to materialize (1..=PREVIEW_ROW_LIMIT)
    pub preview_rows: usize,

    /// Required suffix of uploaded file names
    pub accepted_extension: String,

    /// Text shown in place of null cells
    pub null_marker: String,

    /// Style null markers and headers with terminal colours
    pub color: bool,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            preview_rows: PREVIEW_ROW_LIMIT,
            accepted_extension: CSV_EXTENSION.to_string(),
            null_marker: DEFAULT_NULL_MARKER.to_string(),
            color: true,
        }
    }
}

impl PreviewConfig {
    /// Lower the number of preview rows
    pub fn with_preview_rows(mut self, rows: usize) -> Self {
        self.preview_rows = rows;
        self
    }

    /// Set the marker rendered for null cells
    pub fn with_null_marker(mut self, marker: impl Into<String>) -> Self {
        self.null_marker = marker.into();
        self
    }

    /// Disable terminal colours
    pub fn without_color(mut self) -> Self {
        self.color = false;
        self
    }

    /// Check that the settings can be used
    pub fn validate(&self) -> Result<()> {
        if self.preview_rows == 0 || self.preview_rows > PREVIEW_ROW_LIMIT {
            return Err(PreviewError::configuration(format!(
                "preview rows must be between 1 and {}, got {}",
                PREVIEW_ROW_LIMIT, self.preview_rows
            )));
        }

        if self.accepted_extension.is_empty() {
            return Err(PreviewError::configuration(
                "accepted extension must not be empty",
            ));
        }

        debug!(
            "Configuration valid: preview_rows={}, extension={}",
            self.preview_rows, self.accepted_extension
        );
        Ok(())
    }
}
