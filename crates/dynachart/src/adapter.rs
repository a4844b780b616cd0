//! The host seam
//!
//! A [`DataTableAdapter`] stands for the spreadsheet host: it reads data
//! columns, stages writes to the column the chart draws from, and makes
//! staged writes visible on [`commit`](DataTableAdapter::commit).

use dynachart_core::{Color, ColumnSnapshot, Frame, Result};

/// Operations the sequencer needs from a table and chart host
///
/// Writes may be staged until `commit`. Implementations report host
/// failures during commit as [`Error::AdapterCommit`](dynachart_core::Error::AdapterCommit).
pub trait DataTableAdapter {
    /// Number of data columns currently in the table
    fn column_count(&mut self) -> Result<usize>;

    /// Capture the values of a data column
    ///
    /// Fails with [`Error::ColumnNotFound`](dynachart_core::Error::ColumnNotFound)
    /// when `index` is out of range.
    fn read_column(&mut self, index: usize) -> Result<ColumnSnapshot>;

    /// Overwrite the working column, row by row
    fn write_frame(&mut self, frame: &Frame) -> Result<()>;

    /// Fill the point of a row with a solid color
    fn set_point_color(&mut self, row: usize, color: Color) -> Result<()>;

    /// Set the chart title
    fn set_label(&mut self, text: &str) -> Result<()>;

    /// Flush staged mutations and make them visible
    fn commit(&mut self) -> Result<()>;
}

impl<A: DataTableAdapter + ?Sized> DataTableAdapter for &mut A {
    fn column_count(&mut self) -> Result<usize> {
        (**self).column_count()
    }

    fn read_column(&mut self, index: usize) -> Result<ColumnSnapshot> {
        (**self).read_column(index)
    }

    fn write_frame(&mut self, frame: &Frame) -> Result<()> {
        (**self).write_frame(frame)
    }

    fn set_point_color(&mut self, row: usize, color: Color) -> Result<()> {
        (**self).set_point_color(row, color)
    }

    fn set_label(&mut self, text: &str) -> Result<()> {
        (**self).set_label(text)
    }

    fn commit(&mut self) -> Result<()> {
        (**self).commit()
    }
}
