//! Application constants for the CSV preview
//!
//! Fixed limits and markers shared by the parser, the upload workflow and
//! the preview renderer.

// =============================================================================
// Parsing
// =============================================================================

/// Maximum number of data rows materialized for a preview
pub const PREVIEW_ROW_LIMIT: usize = 10;

/// Field delimiter; no quoting or escaping is recognised
pub const FIELD_DELIMITER: char = ',';

/// Lowercased literal inferred as boolean `true`
pub const TRUE_LITERAL: &str = "true";

/// Lowercased literal inferred as boolean `false`
pub const FALSE_LITERAL: &str = "false";

// =============================================================================
// Uploads
// =============================================================================

/// Required suffix of an uploaded file name (case-sensitive)
pub const CSV_EXTENSION: &str = ".csv";

/// UTF-8 byte-order mark stripped from decoded uploads
pub const UTF8_BOM: char = '\u{feff}';

// =============================================================================
// Rendering
// =============================================================================

/// Default marker shown in place of null cells
pub const DEFAULT_NULL_MARKER: &str = "null";

/// Message shown when there is nothing to preview
pub const EMPTY_PREVIEW_MESSAGE: &str = "Upload a dataset to see a preview";

/// Column separator used by the text table
pub const TABLE_COLUMN_SEPARATOR: &str = " | ";
