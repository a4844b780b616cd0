//! # dynachart
//!
//! Animated bar charts that step through the columns of a data table.
//!
//! Each column-to-column transition is split into linearly interpolated
//! frames. A [`Sequencer`] pushes the frames, one at a time, through a
//! [`DataTableAdapter`] that stands for the spreadsheet host.
//!
//! ## Features
//!
//! - Exact-copy terminal frames, so long runs never drift
//! - Point colors reasserted every frame, surviving host re-sorts
//! - Pluggable pacing with cooperative cancellation
//! - In-memory host ([`MemoryAdapter`]) with optional sort-by-value
//! - CSV loading (`csv` feature, on by default)
//!
//! ## Example
//!
//! ```rust
//! use dynachart::prelude::*;
//!
//! let table = DataTable::new("Country", vec!["A".into(), "B".into()])
//!     .with_column("Jan", vec![0.0, 10.0]).unwrap()
//!     .with_column("Feb", vec![10.0, 0.0]).unwrap();
//! let mut host = MemoryAdapter::new(table).with_sort_by_value(true);
//!
//! let config = AnimationConfig::default().with_steps(2).with_delay_ms(0);
//! let mut sequencer = Sequencer::with_pacer(config, NoPacer).unwrap();
//! sequencer.prepare(&mut host).unwrap();
//! sequencer.run(&mut host).unwrap();
//!
//! assert_eq!(host.chart().title.text, "Feb");
//! assert_eq!(host.display_order(), &[1, 0]);
//! ```

pub mod adapter;
pub mod config;
pub mod memory;
pub mod pacing;
pub mod prelude;
pub mod sequencer;

pub use adapter::DataTableAdapter;
pub use config::{AnimationConfig, DEFAULT_DELAY_MS};
pub use memory::{CommitRecord, MemoryAdapter, CHART_NAME};
pub use pacing::{CancelToken, NoPacer, Pacer, ThreadPacer};
pub use sequencer::{RunSummary, Sequencer, SequencerState};

// Re-export core types
pub use dynachart_core::{
    compute_steps, step_increments, AnimationPlan, Color, ColumnSnapshot, DataTable, Error,
    Frame, Palette, Result, TableShape, DEFAULT_STEPS,
};

// Re-export chart types
pub use dynachart_chart::{Axis, Chart, ChartSize, DataSeries, Title};

// Re-export I/O types
#[cfg(feature = "csv")]
pub use dynachart_csv::{CsvError, CsvReadOptions, CsvTableReader};
