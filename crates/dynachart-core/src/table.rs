//! Data table type
//!
//! A [`DataTable`] is the source data of an animated chart: one category
//! column naming the rows (countries, teams, ...) and an ordered list of
//! numeric data columns, each with a header label (usually a date).

use crate::error::{Error, Result};
use crate::snapshot::ColumnSnapshot;

/// Row and column counts of a [`DataTable`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableShape {
    /// Number of rows (categories)
    pub rows: usize,
    /// Number of data columns, excluding the category column
    pub columns: usize,
}

/// A labelled numeric data column
#[derive(Debug, Clone, PartialEq)]
struct DataColumn {
    label: String,
    values: Vec<f64>,
}

/// Category names plus labelled numeric columns of equal length
#[derive(Debug, Clone, PartialEq)]
pub struct DataTable {
    /// Header of the category column
    category_header: String,
    /// Row names
    categories: Vec<String>,
    /// Data columns in animation order
    columns: Vec<DataColumn>,
}

impl DataTable {
    /// Create an empty table with the given row names
    pub fn new<S: Into<String>>(category_header: S, categories: Vec<String>) -> Self {
        Self {
            category_header: category_header.into(),
            categories,
            columns: Vec::new(),
        }
    }

    /// Append a data column
    ///
    /// Fails with [`Error::RaggedTable`] when the column length differs
    /// from the number of categories.
    pub fn push_column<S: Into<String>>(&mut self, label: S, values: Vec<f64>) -> Result<()> {
        let label = label.into();
        if values.len() != self.categories.len() {
            return Err(Error::RaggedTable {
                column: label,
                expected: self.categories.len(),
                actual: values.len(),
            });
        }
        self.columns.push(DataColumn { label, values });
        Ok(())
    }

    /// Builder-style variant of [`push_column`](Self::push_column)
    pub fn with_column<S: Into<String>>(mut self, label: S, values: Vec<f64>) -> Result<Self> {
        self.push_column(label, values)?;
        Ok(self)
    }

    /// Row and column counts
    pub fn shape(&self) -> TableShape {
        TableShape {
            rows: self.categories.len(),
            columns: self.columns.len(),
        }
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.categories.len()
    }

    /// Number of data columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Header of the category column
    pub fn category_header(&self) -> &str {
        &self.category_header
    }

    /// Row names
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Labels of all data columns, in order
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.iter().map(|c| c.label.as_str())
    }

    /// Label of a data column
    pub fn label(&self, index: usize) -> Result<&str> {
        self.column(index).map(|c| c.label.as_str())
    }

    /// Values of a data column
    pub fn values(&self, index: usize) -> Result<&[f64]> {
        self.column(index).map(|c| c.values.as_slice())
    }

    /// Capture a snapshot of a data column
    pub fn snapshot(&self, index: usize) -> Result<ColumnSnapshot> {
        let column = self.column(index)?;
        Ok(ColumnSnapshot::new(
            index,
            column.label.clone(),
            column.values.clone(),
        ))
    }

    fn column(&self, index: usize) -> Result<&DataColumn> {
        self.columns.get(index).ok_or(Error::ColumnNotFound {
            index,
            count: self.columns.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> DataTable {
        DataTable::new("Country", vec!["A".into(), "B".into()])
            .with_column("Mon", vec![1.0, 2.0])
            .unwrap()
            .with_column("Tue", vec![3.0, 1.0])
            .unwrap()
    }

    #[test]
    fn test_shape_and_labels() {
        let table = sample();
        assert_eq!(table.shape(), TableShape { rows: 2, columns: 2 });
        assert_eq!(table.labels().collect::<Vec<_>>(), vec!["Mon", "Tue"]);
        assert_eq!(table.category_header(), "Country");
    }

    #[test]
    fn test_snapshot() {
        let snapshot = sample().snapshot(1).unwrap();
        assert_eq!(snapshot.index(), 1);
        assert_eq!(snapshot.label(), "Tue");
        assert_eq!(snapshot.values(), &[3.0, 1.0]);
    }

    #[test]
    fn test_column_not_found() {
        let err = sample().snapshot(2).unwrap_err();
        assert!(matches!(err, Error::ColumnNotFound { index: 2, count: 2 }));
    }

    #[test]
    fn test_ragged_column_rejected() {
        let err = sample().with_column("Wed", vec![1.0]).unwrap_err();
        match err {
            Error::RaggedTable {
                column,
                expected,
                actual,
            } => {
                assert_eq!(column, "Wed");
                assert_eq!((expected, actual), (2, 1));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
