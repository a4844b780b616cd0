//! # dynachart-core
//!
//! Core data structures for the dynachart animated bar chart library.
//!
//! This crate provides the fundamental types used throughout dynachart:
//! - [`ColumnSnapshot`] and [`Frame`] - Column values captured from a table and chart states
//! - [`compute_steps`] and [`AnimationPlan`] - Linear interpolation between two columns
//! - [`Color`] and [`Palette`] - Point colors, assigned per row
//! - [`DataTable`] - A category column plus labelled numeric data columns
//!
//! ## Example
//!
//! ```rust
//! use dynachart_core::compute_steps;
//!
//! let frames = compute_steps(&[0.0, 10.0], &[10.0, 0.0], 2).unwrap();
//! assert_eq!(frames[0].values(), &[5.0, 5.0]);
//! assert_eq!(frames[1].values(), &[10.0, 0.0]);
//! ```

pub mod color;
pub mod error;
pub mod interpolate;
pub mod palette;
pub mod snapshot;
pub mod table;

// Re-exports for convenience
pub use color::Color;
pub use error::{Error, Result};
pub use interpolate::{compute_steps, step_increments, AnimationPlan};
pub use palette::Palette;
pub use snapshot::{ColumnSnapshot, Frame};
pub use table::{DataTable, TableShape};

/// Default number of frames per column-to-column transition
pub const DEFAULT_STEPS: u32 = 3;
