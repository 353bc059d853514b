//! Core data structures for parsed CSV previews.
//!
//! Defines the dataset produced by the parser, its rows and the inferred
//! cell values stored in them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single inferred-typed value within a row
///
/// Serializes as the bare JSON value (`42`, `true`, `null`, `"text"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Boolean(bool),
    Text(String),
    Null,
}

impl Cell {
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Cell::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Short name of the inferred kind, as written in parser trace logs
    pub fn kind(&self) -> &'static str {
        match self {
            Cell::Number(_) => "number",
            Cell::Boolean(_) => "boolean",
            Cell::Text(_) => "string",
            Cell::Null => "null",
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Number(n) if n.is_infinite() => {
                f.write_str(if *n > 0.0 { "Infinity" } else { "-Infinity" })
            }
            // -0 prints as 0
            Cell::Number(n) if *n == 0.0 => f.write_str("0"),
            Cell::Number(n) if n.abs() >= 1e21 || n.abs() < 1e-6 => write_exponent(f, *n),
            Cell::Number(n) => write!(f, "{}", n),
            Cell::Boolean(b) => write!(f, "{}", b),
            Cell::Text(s) => f.write_str(s),
            Cell::Null => f.write_str("null"),
        }
    }
}

/// Exponent form with an explicit sign on positive exponents (`1e+21`, `1.5e-7`)
fn write_exponent(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    let formatted = format!("{:e}", n);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            write!(f, "{}e+{}", mantissa, exponent)
        }
        _ => f.write_str(&formatted),
    }
}

/// One preview row, keyed by header name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    cells: BTreeMap<String, Cell>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a cell under a header name, replacing any earlier value
    pub fn insert(&mut self, header: impl Into<String>, cell: Cell) {
        self.cells.insert(header.into(), cell);
    }

    /// Look up the cell for a header name
    pub fn get(&self, header: &str) -> Option<&Cell> {
        self.cells.get(header)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Cell)> {
        self.cells.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>> FromIterator<(K, Cell)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, Cell)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (header, cell) in iter {
            row.insert(header, cell);
        }
        row
    }
}

/// Structured result of parsing an uploaded CSV file
///
/// A dataset with no headers and no rows is the "nothing loaded" state
/// returned by [`Dataset::empty`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Column names in file order; duplicates are kept
    pub headers: Vec<String>,

    /// Preview rows, at most the preview cap
    pub rows: Vec<Row>,

    /// Display name of the originating file
    pub source_name: String,
}

impl Dataset {
    pub fn new(headers: Vec<String>, rows: Vec<Row>, source_name: impl Into<String>) -> Self {
        Self {
            headers,
            rows,
            source_name: source_name.into(),
        }
    }

    /// The reset state: no headers, no rows, no source name
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Cell at a row index under a header name
    pub fn cell(&self, row: usize, header: &str) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(header))
    }
}
