//! Text rendering of preview datasets and upload status.

use crate::config::PreviewConfig;
use crate::constants::{EMPTY_PREVIEW_MESSAGE, TABLE_COLUMN_SEPARATOR};
use crate::error::PreviewError;
use crate::models::{Cell, Dataset};
use crate::upload::UploadOutcome;
use colored::Colorize;

/// Human-readable message for an upload outcome
pub fn status_message(outcome: &UploadOutcome) -> String {
    match outcome {
        UploadOutcome::Loaded { name, rows, .. } => {
            format!("Successfully loaded {} rows from \"{}\"", rows, name)
        }
        UploadOutcome::Failed {
            error: PreviewError::UnsupportedFileType { .. },
            ..
        } => "Invalid file format: Please upload a CSV file".to_string(),
        UploadOutcome::Failed { error, .. } => format!("Error parsing CSV: {}", error),
        UploadOutcome::Cleared => "The dataset has been removed".to_string(),
        UploadOutcome::Superseded { name } => {
            format!("Upload of \"{}\" was superseded by a newer file", name)
        }
    }
}

/// Column and row counts of the loaded dataset
pub fn summary_line(dataset: &Dataset) -> String {
    format!(
        "{} columns · {} rows (preview)",
        dataset.column_count(),
        dataset.row_count()
    )
}

/// Render the dataset as an aligned text grid
///
/// Null cells show the configured marker, italicised when colour is on.
pub fn render_table(dataset: &Dataset, config: &PreviewConfig) -> String {
    if dataset.headers.is_empty() || dataset.rows.is_empty() {
        return EMPTY_PREVIEW_MESSAGE.to_string();
    }

    // Plain text first so widths ignore escape codes
    let grid: Vec<Vec<(String, bool)>> = dataset
        .rows
        .iter()
        .map(|row| {
            dataset
                .headers
                .iter()
                .map(|header| match row.get(header) {
                    Some(Cell::Null) | None => (config.null_marker.clone(), true),
                    Some(cell) => (cell.to_string(), false),
                })
                .collect()
        })
        .collect();

    let widths: Vec<usize> = dataset
        .headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            grid.iter()
                .map(|cells| cells[col].0.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut lines = Vec::with_capacity(grid.len() + 3);

    let header_line = dataset
        .headers
        .iter()
        .zip(&widths)
        .map(|(header, &width)| {
            let padded = pad(header, width);
            if config.color {
                padded.bold().to_string()
            } else {
                padded
            }
        })
        .collect::<Vec<_>>()
        .join(TABLE_COLUMN_SEPARATOR);
    lines.push(header_line.trim_end().to_string());

    lines.push(
        widths
            .iter()
            .map(|&width| "-".repeat(width))
            .collect::<Vec<_>>()
            .join("-+-"),
    );

    for cells in &grid {
        let line = cells
            .iter()
            .zip(&widths)
            .map(|((text, is_null), &width)| {
                let padded = pad(text, width);
                if *is_null && config.color {
                    padded.italic().dimmed().to_string()
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join(TABLE_COLUMN_SEPARATOR);
        lines.push(line.trim_end().to_string());
    }

    lines.push(String::new());
    lines.push(format!("Showing first {} rows", dataset.row_count()));
    lines.join("\n")
}

/// Render the dataset as pretty-printed JSON
///
/// Infinite numbers have no JSON form and are written as `null`.
pub fn render_json(dataset: &Dataset) -> serde_json::Result<String> {
    serde_json::to_string_pretty(dataset)
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}
