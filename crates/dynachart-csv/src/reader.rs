//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{CsvError, CsvResult};
use crate::options::CsvReadOptions;
use dynachart_core::DataTable;
use lazy_regex::regex_is_match;

/// Reads a category column plus numeric data columns
pub struct CsvTableReader;

impl CsvTableReader {
    /// Read a CSV file into a data table
    pub fn read_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<DataTable> {
        let file = File::open(path)?;
        Self::read(file, options)
    }

    /// Read CSV from a reader into a data table
    pub fn read<R: Read>(reader: R, options: &CsvReadOptions) -> CsvResult<DataTable> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        if headers.len() < 2 {
            return Err(CsvError::Layout(format!(
                "expected a category column and at least one data column, found {} column(s)",
                headers.len()
            )));
        }

        let width = headers.len() - 1;
        let mut categories = Vec::new();
        let mut columns: Vec<Vec<f64>> = vec![Vec::new(); width];

        for (row_idx, result) in csv_reader.records().enumerate() {
            let record = result?;
            let row = row_idx + 1;

            let mut fields = record.iter();
            let category = fields.next().unwrap_or_default();
            categories.push(category.to_string());

            for (col, column) in columns.iter_mut().enumerate() {
                let field = fields.next().unwrap_or_default();
                column.push(Self::parse_number(field, row, col + 1, options)?);
            }
        }

        let mut table = DataTable::new(&headers[0], categories);
        for (label, values) in headers.iter().skip(1).zip(columns) {
            table.push_column(label, values)?;
        }

        tracing::debug!(
            rows = table.row_count(),
            columns = table.column_count(),
            "loaded table from CSV"
        );
        Ok(table)
    }

    /// Parse one data cell
    fn parse_number(
        field: &str,
        row: usize,
        column: usize,
        options: &CsvReadOptions,
    ) -> CsvResult<f64> {
        if field.is_empty() {
            if options.blank_as_zero {
                return Ok(0.0);
            }
            return Err(CsvError::Parse {
                row,
                column,
                message: "empty cell".to_string(),
            });
        }

        let cleaned = if field.contains(',') {
            let grouped = regex_is_match!(r"^[-+]?\d{1,3}(,\d{3})+(\.\d+)?$", field);
            if !options.thousands_separators || !grouped {
                return Err(CsvError::Parse {
                    row,
                    column,
                    message: format!("'{}' has a misplaced ','", field),
                });
            }
            field.replace(',', "")
        } else {
            field.to_string()
        };

        cleaned.parse::<f64>().map_err(|e| CsvError::Parse {
            row,
            column,
            message: format!("'{}' is not a number ({})", field, e),
        })
    }
}
