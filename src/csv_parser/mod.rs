//! CSV preview parser
//!
//! Turns the text of an uploaded CSV file into a typed [`Dataset`] holding
//! the header row and the first rows of data.
//!
//! ## Architecture
//!
//! - [`parser`] - line filtering, header extraction and row capping
//! - [`inference`] - per-cell type inference and the numeric grammar
//!
//! ## Usage
//!
//! ```rust
//! use csv_preview::csv_parser::CsvParser;
//! use csv_preview::models::Cell;
//!
//! let dataset = CsvParser::new()
//!     .parse("a,b,c\n1,true,\n2,false,x\n", "sales.csv")
//!     .unwrap();
//!
//! assert_eq!(dataset.headers, vec!["a", "b", "c"]);
//! assert_eq!(dataset.cell(0, "a"), Some(&Cell::Number(1.0)));
//! assert_eq!(dataset.cell(0, "c"), Some(&Cell::Null));
//! ```
//!
//! [`Dataset`]: crate::models::Dataset

pub mod inference;
pub mod parser;

#[cfg(test)]
mod tests;

pub use inference::{infer_cell, parse_numeric, trim_field};
pub use parser::{CsvParser, parse_csv};
