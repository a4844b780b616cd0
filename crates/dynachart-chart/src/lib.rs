//! # dynachart-chart
//!
//! In-memory bar chart model for dynachart. It keeps what an animated bar
//! chart host shows: a title, one value series with per-point fills, a
//! category axis and a legend flag.

mod axis;
mod chart;
mod series;

pub use axis::Axis;
pub use chart::{Chart, ChartSize, Title};
pub use series::DataSeries;
