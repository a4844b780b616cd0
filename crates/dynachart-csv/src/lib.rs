//! # dynachart-csv
//!
//! Loads a [`DataTable`](dynachart_core::DataTable) from CSV. The first
//! column holds category names, every other column is numeric data and
//! its header becomes the chart title while that column is shown.

mod error;
mod options;
mod reader;

pub use error::{CsvError, CsvResult};
pub use options::CsvReadOptions;
pub use reader::CsvTableReader;
