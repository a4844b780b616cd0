//! In-memory table and chart host
//!
//! [`MemoryAdapter`] behaves like a spreadsheet task pane host: writes are
//! batched until `commit`, the table can be kept sorted by the animated
//! value, and sorting wipes point formatting.

use dynachart_chart::{Axis, Chart};
use dynachart_core::{Color, ColumnSnapshot, DataTable, Error, Frame, Result};

use crate::adapter::DataTableAdapter;

/// Name given to the chart created by [`MemoryAdapter::new`]
pub const CHART_NAME: &str = "DynamicChart";

/// Visible state after one commit
#[derive(Debug, Clone, PartialEq)]
pub struct CommitRecord {
    /// 1-based commit number
    pub index: usize,
    /// Working values, by row
    pub values: Vec<f64>,
    /// Display position to row
    pub order: Vec<usize>,
    /// Point fill, by row
    pub fills: Vec<Option<Color>>,
    /// Chart title
    pub title: String,
}

impl CommitRecord {
    /// Check that every row is filled with the color `expected` gives it
    pub fn all_filled_with<F: Fn(usize) -> Color>(&self, expected: F) -> bool {
        self.fills
            .iter()
            .enumerate()
            .all(|(row, fill)| *fill == Some(expected(row)))
    }
}

/// A data table plus the bar chart drawn from its working column
#[derive(Debug, Clone)]
pub struct MemoryAdapter {
    table: DataTable,
    chart: Chart,
    /// Committed working column, by row
    working: Vec<f64>,
    /// Display position to row
    order: Vec<usize>,
    sort_by_value: bool,
    staged_frame: Option<Frame>,
    staged_colors: Vec<(usize, Color)>,
    staged_label: Option<String>,
    commits: Vec<CommitRecord>,
    fail_commit_on: Option<usize>,
}

impl MemoryAdapter {
    /// Create a host for `table` with an empty animated bar chart
    pub fn new(table: DataTable) -> Self {
        let rows = table.row_count();
        let mut chart = Chart::animated_bar(CHART_NAME, table.categories().to_vec());
        chart.category_axis = Axis::new().with_title(table.category_header());

        Self {
            table,
            chart,
            working: vec![0.0; rows],
            order: (0..rows).collect(),
            sort_by_value: false,
            staged_frame: None,
            staged_colors: Vec::new(),
            staged_label: None,
            commits: Vec::new(),
            fail_commit_on: None,
        }
    }

    /// Re-sort rows ascending by working value on every commit that writes values
    pub fn with_sort_by_value(mut self, sort: bool) -> Self {
        self.sort_by_value = sort;
        self
    }

    /// Make the `n`-th commit (1-based) fail
    pub fn fail_commit_on(mut self, n: usize) -> Self {
        self.fail_commit_on = Some(n);
        self
    }

    /// Source table
    pub fn table(&self) -> &DataTable {
        &self.table
    }

    /// Chart as currently displayed
    pub fn chart(&self) -> &Chart {
        &self.chart
    }

    /// Committed working column, by row
    pub fn working_values(&self) -> &[f64] {
        &self.working
    }

    /// Display position to row
    pub fn display_order(&self) -> &[usize] {
        &self.order
    }

    /// Committed fill of a row's point
    pub fn point_color(&self, row: usize) -> Option<Color> {
        let position = self.position_of(row)?;
        self.chart
            .primary_series()
            .and_then(|s| s.fills().get(position).copied().flatten())
    }

    /// Every successful commit, oldest first
    pub fn commits(&self) -> &[CommitRecord] {
        &self.commits
    }

    fn position_of(&self, row: usize) -> Option<usize> {
        self.order.iter().position(|&r| r == row)
    }

    fn clear_staged(&mut self) {
        self.staged_frame = None;
        self.staged_colors.clear();
        self.staged_label = None;
    }

    fn apply_values(&mut self, frame: Frame) {
        self.working = frame.into_values();
        let Some(series) = self.chart.series.first_mut() else {
            return;
        };

        for (position, &row) in self.order.iter().enumerate() {
            series.set_value(position, self.working[row]);
        }

        if self.sort_by_value {
            // Stable, so equal values keep their current order
            let mut permutation: Vec<usize> = (0..self.order.len()).collect();
            let working = &self.working;
            let order = &self.order;
            permutation.sort_by(|&a, &b| working[order[a]].total_cmp(&working[order[b]]));

            series.reorder(&permutation);
            self.order = permutation.iter().map(|&p| self.order[p]).collect();
        }
    }

    fn record(&mut self, index: usize) {
        let fills = (0..self.order.len())
            .map(|row| self.point_color(row))
            .collect();
        self.commits.push(CommitRecord {
            index,
            values: self.working.clone(),
            order: self.order.clone(),
            fills,
            title: self.chart.title.text.clone(),
        });
    }
}

impl DataTableAdapter for MemoryAdapter {
    fn column_count(&mut self) -> Result<usize> {
        Ok(self.table.column_count())
    }

    fn read_column(&mut self, index: usize) -> Result<ColumnSnapshot> {
        self.table.snapshot(index)
    }

    fn write_frame(&mut self, frame: &Frame) -> Result<()> {
        if frame.len() != self.working.len() {
            return Err(Error::LengthMismatch {
                current: self.working.len(),
                next: frame.len(),
            });
        }
        self.staged_frame = Some(frame.clone());
        Ok(())
    }

    fn set_point_color(&mut self, row: usize, color: Color) -> Result<()> {
        if row >= self.working.len() {
            return Err(Error::commit(format!(
                "point {} out of range ({} points)",
                row,
                self.working.len()
            )));
        }
        self.staged_colors.push((row, color));
        Ok(())
    }

    fn set_label(&mut self, text: &str) -> Result<()> {
        self.staged_label = Some(text.to_string());
        Ok(())
    }

    fn commit(&mut self) -> Result<()> {
        let index = self.commits.len() + 1;
        if self.fail_commit_on == Some(index) {
            self.clear_staged();
            self.fail_commit_on = None;
            return Err(Error::commit(format!("commit {} rejected by host", index)));
        }

        if let Some(frame) = self.staged_frame.take() {
            self.apply_values(frame);
        }

        let colors = std::mem::take(&mut self.staged_colors);
        for (row, color) in colors {
            if let Some(position) = self.position_of(row) {
                if let Some(series) = self.chart.series.first_mut() {
                    series.set_point_fill(position, color);
                }
            }
        }

        if let Some(label) = self.staged_label.take() {
            self.chart.title.text = label;
        }

        self.record(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn table() -> DataTable {
        DataTable::new("Country", vec!["A".into(), "B".into(), "C".into()])
            .with_column("d1", vec![3.0, 1.0, 2.0])
            .unwrap()
    }

    #[test]
    fn test_writes_are_staged_until_commit() {
        let mut host = MemoryAdapter::new(table());
        host.write_frame(&Frame::new(vec![1.0, 2.0, 3.0])).unwrap();
        host.set_label("d1").unwrap();
        assert_eq!(host.working_values(), &[0.0, 0.0, 0.0]);
        assert_eq!(host.chart().title.text, "");

        host.commit().unwrap();
        assert_eq!(host.working_values(), &[1.0, 2.0, 3.0]);
        assert_eq!(host.chart().title.text, "d1");
        assert_eq!(host.commits().len(), 1);
    }

    #[test]
    fn test_sort_resets_fills() {
        let mut host = MemoryAdapter::new(table()).with_sort_by_value(true);
        host.write_frame(&Frame::new(vec![3.0, 1.0, 2.0])).unwrap();
        host.set_point_color(0, Color::RED).unwrap();
        host.commit().unwrap();
        assert_eq!(host.display_order(), &[1, 2, 0]);
        assert_eq!(host.point_color(0), Some(Color::RED));

        // A later sort drops the fill unless it is set again
        host.write_frame(&Frame::new(vec![0.0, 1.0, 2.0])).unwrap();
        host.commit().unwrap();
        assert_eq!(host.display_order(), &[0, 1, 2]);
        assert_eq!(host.point_color(0), None);

        let series = host.chart().primary_series().unwrap();
        assert_eq!(series.categories(), &["A", "B", "C"]);
        assert_eq!(series.values(), &[0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_failing_commit_discards_staged_writes() {
        let mut host = MemoryAdapter::new(table()).fail_commit_on(1);
        host.write_frame(&Frame::new(vec![1.0, 1.0, 1.0])).unwrap();
        assert!(matches!(host.commit(), Err(Error::AdapterCommit(_))));
        assert_eq!(host.working_values(), &[0.0, 0.0, 0.0]);

        // Only the configured commit fails
        host.commit().unwrap();
        assert_eq!(host.commits()[0].index, 1);
    }

    #[test]
    fn test_bad_writes_rejected() {
        let mut host = MemoryAdapter::new(table());
        assert!(matches!(
            host.write_frame(&Frame::new(vec![1.0])),
            Err(Error::LengthMismatch { current: 3, next: 1 })
        ));
        assert!(host.set_point_color(3, Color::BLUE).is_err());
        assert!(matches!(
            host.read_column(1),
            Err(Error::ColumnNotFound { index: 1, count: 1 })
        ));
    }
}
