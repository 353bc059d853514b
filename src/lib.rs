//! CSV Preview Library
//!
//! Turns uploaded CSV files into small typed previews: the header row plus
//! the first rows of data, with every cell inferred as a number, boolean,
//! null or string.
//!
//! This library provides tools for:
//! - Parsing decoded CSV text into a [`Dataset`] capped at ten rows
//! - Inferring cell types with a fixed number, boolean, null, string order
//! - Decoding uploaded files and tracking the dataset currently shown
//! - Rendering previews as text tables or JSON

pub mod cli;
pub mod config;
pub mod constants;
pub mod csv_parser;
pub mod error;
pub mod models;
pub mod preview;
pub mod upload;

// Re-export commonly used types
pub use config::PreviewConfig;
pub use csv_parser::CsvParser;
pub use error::{PreviewError, Result};
pub use models::{Cell, Dataset, Row};
pub use upload::{UploadOutcome, UploadSession};
