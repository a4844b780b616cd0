//! CSV options

/// Options for reading CSV files
#[derive(Debug, Clone)]
pub struct CsvReadOptions {
    /// Field delimiter (default: comma)
    pub delimiter: u8,
    /// Quote character (default: double quote)
    pub quote: u8,
    /// Read empty data cells as zero instead of failing
    pub blank_as_zero: bool,
    /// Accept `,` thousands groups such as `1,500` or `-12,345.5`
    ///
    /// Any other comma in a data cell is a parse error.
    pub thousands_separators: bool,
}

impl Default for CsvReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            blank_as_zero: true,
            thousands_separators: true,
        }
    }
}

impl CsvReadOptions {
    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Accept or reject `,` thousands groups in data cells
    pub fn with_thousands_separators(mut self, enabled: bool) -> Self {
        self.thousands_separators = enabled;
        self
    }

    /// Fail on empty data cells
    pub fn strict(mut self) -> Self {
        self.blank_as_zero = false;
        self
    }
}
