//! Chart types

use crate::axis::Axis;
use crate::series::DataSeries;

/// Chart title
#[derive(Debug, Clone, PartialEq)]
pub struct Title {
    /// Title text
    pub text: String,
    /// Font size in points
    pub font_size: f64,
}

impl Default for Title {
    fn default() -> Self {
        Self {
            text: String::new(),
            font_size: 20.0,
        }
    }
}

/// Chart size in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartSize {
    pub width: f64,
    pub height: f64,
}

impl Default for ChartSize {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 400.0,
        }
    }
}

/// Chart definition
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    /// Chart name, unique within a sheet
    pub name: String,
    /// Chart title
    pub title: Title,
    /// Data series
    pub series: Vec<DataSeries>,
    /// Category axis (row names)
    pub category_axis: Axis,
    /// Whether the legend is shown
    pub legend_visible: bool,
    /// Size
    pub size: ChartSize,
}

impl Chart {
    /// Create a new horizontal bar chart with no series
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            title: Title::default(),
            series: Vec::new(),
            category_axis: Axis::new(),
            legend_visible: false,
            size: ChartSize::default(),
        }
    }

    /// A clustered bar chart over one series, styled for animation
    ///
    /// Data labels on, gap width 30, legend hidden.
    pub fn animated_bar<S: Into<String>>(name: S, categories: Vec<String>) -> Self {
        let mut series = DataSeries::new(categories);
        series.has_data_labels = true;
        series.gap_width = 30;

        let mut chart = Self::new(name);
        chart.add_series(series);
        chart
    }

    /// Set chart title
    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title.text = title.into();
        self
    }

    /// Add a data series
    pub fn add_series(&mut self, series: DataSeries) {
        self.series.push(series);
    }

    /// The first series, which animated charts draw from
    pub fn primary_series(&self) -> Option<&DataSeries> {
        self.series.first()
    }

    /// Mutable access to the first series
    pub fn primary_series_mut(&mut self) -> Option<&mut DataSeries> {
        self.series.first_mut()
    }
}
