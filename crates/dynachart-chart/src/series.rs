//! Data series types

use dynachart_core::Color;

/// A value series with one fill per point
///
/// Points are addressed by display position. Sorting the series moves
/// values and categories together and clears every fill, the way a
/// spreadsheet host drops point formatting when its source range is
/// re-sorted.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSeries {
    /// Values (bar lengths), by display position
    values: Vec<f64>,
    /// Category names, by display position
    categories: Vec<String>,
    /// Solid fill per point, `None` for the host default
    fills: Vec<Option<Color>>,
    /// Show the value next to each bar
    pub has_data_labels: bool,
    /// Gap between bars, percent of bar width
    pub gap_width: u16,
}

impl DataSeries {
    /// Create a series with one point per category, all values zero
    pub fn new(categories: Vec<String>) -> Self {
        let len = categories.len();
        Self {
            values: vec![0.0; len],
            categories,
            fills: vec![None; len],
            has_data_labels: false,
            gap_width: 150,
        }
    }

    /// Number of points
    pub fn point_count(&self) -> usize {
        self.values.len()
    }

    /// Values by display position
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Categories by display position
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Fills by display position
    pub fn fills(&self) -> &[Option<Color>] {
        &self.fills
    }

    /// Set the value of one point, ignoring out of range positions
    pub fn set_value(&mut self, position: usize, value: f64) -> bool {
        match self.values.get_mut(position) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Set a solid fill on one point, ignoring out of range positions
    pub fn set_point_fill(&mut self, position: usize, color: Color) -> bool {
        match self.fills.get_mut(position) {
            Some(slot) => {
                *slot = Some(color);
                true
            }
            None => false,
        }
    }

    /// Drop every point fill
    pub fn clear_fills(&mut self) {
        self.fills.iter_mut().for_each(|fill| *fill = None);
    }

    /// Reorder points so that position `i` shows old position `order[i]`
    ///
    /// Fills are cleared. `order` must be a permutation of the positions.
    pub fn reorder(&mut self, order: &[usize]) {
        debug_assert_eq!(order.len(), self.values.len());
        self.values = order.iter().map(|&i| self.values[i]).collect();
        self.categories = order.iter().map(|&i| self.categories[i].clone()).collect();
        self.clear_fills();
    }
}
