//! Prelude module - common imports for dynachart users
//!
//! ```rust
//! use dynachart::prelude::*;
//! ```

pub use crate::{
    // Animation
    AnimationConfig,
    AnimationPlan,
    CancelToken,
    // Chart types
    Chart,
    Color,
    ColumnSnapshot,
    // Host seam
    DataTableAdapter,
    DataTable,
    // Error types
    Error,
    Frame,
    MemoryAdapter,
    NoPacer,
    Pacer,
    Palette,
    Result,
    RunSummary,
    Sequencer,
    SequencerState,
    ThreadPacer,
};

#[cfg(feature = "csv")]
pub use crate::{CsvReadOptions, CsvTableReader};
