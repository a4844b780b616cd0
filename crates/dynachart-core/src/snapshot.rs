//! Column snapshots and animation frames

use std::ops::Index;

/// Values of one table column, captured at a point in time
///
/// Snapshots are immutable. A new one is read for every transition.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSnapshot {
    /// Column index within the data table
    index: usize,
    /// Header text of the column
    label: String,
    /// One value per row
    values: Vec<f64>,
}

impl ColumnSnapshot {
    /// Create a snapshot
    pub fn new<S: Into<String>>(index: usize, label: S, values: Vec<f64>) -> Self {
        Self {
            index,
            label: label.into(),
            values,
        }
    }

    /// Column index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Header label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Row values
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the column has no rows
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Exact copy of the values as a frame
    pub fn to_frame(&self) -> Frame {
        Frame::new(self.values.clone())
    }
}

/// The chart state at one animation tick, one value per row
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frame {
    values: Vec<f64>,
}

impl Frame {
    /// Create a frame from row values
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Row values
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the frame has no rows
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over row values
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    /// Consume the frame, returning its values
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

impl From<Vec<f64>> for Frame {
    fn from(values: Vec<f64>) -> Self {
        Frame::new(values)
    }
}

impl Index<usize> for Frame {
    type Output = f64;

    fn index(&self, row: usize) -> &f64 {
        &self.values[row]
    }
}
