//! Core CSV preview parser
//!
//! Converts decoded text into a [`Dataset`]: blank-line filtering, header
//! extraction, row capping and per-cell inference.

use tracing::{debug, trace};

use super::inference::{infer_cell, trim_field};
use crate::config::PreviewConfig;
use crate::constants::{FIELD_DELIMITER, PREVIEW_ROW_LIMIT};
use crate::error::{PreviewError, Result};
use crate::models::{Cell, Dataset, Row};

/// Parser for comma-separated preview uploads
///
/// The parser is stateless apart from its row cap: the same text always
/// yields the same dataset. Quoted fields are not recognised, so every comma
/// is a delimiter.
#[derive(Debug, Clone)]
pub struct CsvParser {
    row_limit: usize,
}

impl Default for CsvParser {
    fn default() -> Self {
        Self {
            row_limit: PREVIEW_ROW_LIMIT,
        }
    }
}

impl CsvParser {
    /// Create a parser with the standard preview cap
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser honouring the configured preview rows, never above the cap
    pub fn from_config(config: &PreviewConfig) -> Self {
        Self {
            row_limit: config.preview_rows.min(PREVIEW_ROW_LIMIT),
        }
    }

    /// Maximum number of data rows this parser materializes
    pub fn row_limit(&self) -> usize {
        self.row_limit
    }

    /// Parse decoded CSV text into a preview dataset
    pub fn parse(&self, text: &str, source_name: &str) -> Result<Dataset> {
        let lines: Vec<&str> = split_lines(text)
            .filter(|line| !trim_field(line).is_empty())
            .collect();

        let Some((header_line, data_lines)) = lines.split_first() else {
            debug!("No non-blank lines in '{}'", source_name);
            return Err(PreviewError::empty_file(source_name));
        };

        let headers: Vec<String> = header_line
            .split(FIELD_DELIMITER)
            .map(|field| trim_field(field).to_string())
            .collect();

        let row_count = data_lines.len().min(self.row_limit);
        debug!(
            "Parsing '{}': {} columns, {} data lines, materializing {}",
            source_name,
            headers.len(),
            data_lines.len(),
            row_count
        );

        let rows = data_lines[..row_count]
            .iter()
            .enumerate()
            .map(|(index, line)| {
                let row = parse_row(line, &headers);
                trace!(
                    "Row {}: {} -> [{}]",
                    index + 1,
                    line,
                    row_kinds(&row, &headers).join(", ")
                );
                row
            })
            .collect();

        Ok(Dataset::new(headers, rows, source_name))
    }
}

/// Parse text with the default preview cap
pub fn parse_csv(text: &str, source_name: &str) -> Result<Dataset> {
    CsvParser::new().parse(text, source_name)
}

/// Split on `\n`, dropping the `\r` of a `\r\n` ending
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Build one row aligned to the headers
///
/// Missing trailing values become null, extra values are dropped, and a
/// repeated header name keeps the value of its last position.
fn parse_row(line: &str, headers: &[String]) -> Row {
    let values: Vec<&str> = line.split(FIELD_DELIMITER).collect();

    let mut row = Row::new();
    for (index, header) in headers.iter().enumerate() {
        let value = values.get(index).copied().map_or("", trim_field);
        row.insert(header.as_str(), infer_cell(value));
    }
    row
}

/// Inferred kind of each column's cell, in header order
fn row_kinds(row: &Row, headers: &[String]) -> Vec<&'static str> {
    headers
        .iter()
        .map(|header| row.get(header).map_or("missing", Cell::kind))
        .collect()
}
