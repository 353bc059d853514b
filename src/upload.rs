//! Upload handling around the parser.
//!
//! Covers the decode step (file to text) and the caller-owned
//! [`UploadSession`] that holds the dataset currently shown. The session
//! only replaces its dataset on a successful parse of the newest upload.

use crate::config::PreviewConfig;
use crate::constants::UTF8_BOM;
use crate::csv_parser::CsvParser;
use crate::error::{PreviewError, Result};
use crate::models::Dataset;
use std::path::Path;
use tracing::{debug, info, warn};

/// Decoded upload ready for parsing
#[derive(Debug, Clone, PartialEq)]
pub struct Upload {
    /// Display name of the file (final path component)
    pub name: String,

    /// Decoded text content
    pub text: String,
}

/// Display name for an uploaded path
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Reject names that do not carry the accepted extension
pub fn check_extension(name: &str, config: &PreviewConfig) -> Result<()> {
    if name.ends_with(&config.accepted_extension) {
        Ok(())
    } else {
        Err(PreviewError::unsupported_file_type(name))
    }
}

/// Decode bytes as UTF-8, replacing malformed sequences and dropping a BOM
pub fn decode_text(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    match text.strip_prefix(UTF8_BOM) {
        Some(stripped) => stripped.to_string(),
        None => text.into_owned(),
    }
}

/// Read and decode an uploaded file
pub async fn decode_upload(path: &Path, config: &PreviewConfig) -> Result<Upload> {
    let name = display_name(path);
    check_extension(&name, config)?;
    read_upload(path, name).await
}

/// Read and decode a file whose name has already been accepted
async fn read_upload(path: &Path, name: String) -> Result<Upload> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| PreviewError::read_failure(&name, e))?;

    debug!("Read {} bytes from {}", bytes.len(), path.display());

    Ok(Upload {
        name,
        text: decode_text(&bytes),
    })
}

/// Handle for one started upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTicket {
    generation: u64,
    name: String,
}

impl UploadTicket {
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Result of completing, failing or clearing an upload
#[derive(Debug)]
pub enum UploadOutcome {
    /// The dataset was replaced by a new parse
    Loaded {
        name: String,
        rows: usize,
        columns: usize,
    },

    /// The upload failed; the previous dataset is unchanged
    Failed { name: String, error: PreviewError },

    /// The session was reset to the empty dataset
    Cleared,

    /// A newer upload started before this one finished; result discarded
    Superseded { name: String },
}

impl UploadOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, UploadOutcome::Loaded { .. })
    }
}

/// Caller-owned state of the preview: the dataset currently shown
///
/// Each [`begin`](UploadSession::begin) supersedes earlier in-flight uploads,
/// so a slow decode can never overwrite a newer dataset.
#[derive(Debug)]
pub struct UploadSession {
    dataset: Dataset,
    parser: CsvParser,
    config: PreviewConfig,
    generation: u64,
}

impl Default for UploadSession {
    fn default() -> Self {
        Self::new(PreviewConfig::default())
    }
}

impl UploadSession {
    pub fn new(config: PreviewConfig) -> Self {
        Self {
            dataset: Dataset::empty(),
            parser: CsvParser::from_config(&config),
            config,
            generation: 0,
        }
    }

    /// Dataset currently shown
    pub fn current(&self) -> &Dataset {
        &self.dataset
    }

    /// True once a dataset with at least one column is loaded
    pub fn has_dataset(&self) -> bool {
        !self.dataset.headers.is_empty()
    }

    pub fn config(&self) -> &PreviewConfig {
        &self.config
    }

    /// Start an upload, superseding any upload still in flight
    pub fn begin(&mut self, name: impl Into<String>) -> UploadTicket {
        self.generation += 1;
        let ticket = UploadTicket {
            generation: self.generation,
            name: name.into(),
        };
        debug!("Upload {} started: {}", ticket.generation, ticket.name);
        ticket
    }

    /// Whether the ticket belongs to the newest upload
    pub fn is_current(&self, ticket: &UploadTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Parse a decoded upload with this session's parser
    pub fn parse_upload(&self, upload: &Upload) -> Result<Dataset> {
        self.parser.parse(&upload.text, &upload.name)
    }

    /// Finish an upload, replacing the dataset only on success
    pub fn complete(&mut self, ticket: UploadTicket, result: Result<Dataset>) -> UploadOutcome {
        if !self.is_current(&ticket) {
            debug!(
                "Discarding superseded upload {} ({})",
                ticket.generation, ticket.name
            );
            return UploadOutcome::Superseded { name: ticket.name };
        }

        match result {
            Ok(dataset) => {
                let outcome = UploadOutcome::Loaded {
                    name: ticket.name,
                    rows: dataset.row_count(),
                    columns: dataset.column_count(),
                };
                info!(
                    "Loaded {} rows and {} columns from '{}'",
                    dataset.row_count(),
                    dataset.column_count(),
                    dataset.source_name
                );
                self.dataset = dataset;
                outcome
            }
            Err(error) => {
                warn!("Upload of '{}' failed: {}", ticket.name, error);
                UploadOutcome::Failed {
                    name: ticket.name,
                    error,
                }
            }
        }
    }

    /// Return to the empty dataset; uploads still in flight are superseded
    pub fn reset(&mut self) -> UploadOutcome {
        self.generation += 1;
        self.dataset = Dataset::empty();
        info!("Dataset removed");
        UploadOutcome::Cleared
    }

    /// Decode, parse and apply a file in one step
    pub async fn load(&mut self, path: &Path) -> UploadOutcome {
        let name = display_name(path);
        if let Err(error) = check_extension(&name, &self.config) {
            warn!("Rejected upload '{}': {}", name, error);
            return UploadOutcome::Failed { name, error };
        }

        let ticket = self.begin(name.clone());
        let result = match read_upload(path, name).await {
            Ok(upload) => self.parse_upload(&upload),
            Err(error) => Err(error),
        };
        self.complete(ticket, result)
    }
}
