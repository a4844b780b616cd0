//! Error types for dynachart-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while planning or playing an animation
#[derive(Debug, Error)]
pub enum Error {
    /// Current and next snapshots have different row counts
    #[error("Length mismatch: current column has {current} rows, next column has {next}")]
    LengthMismatch { current: usize, next: usize },

    /// Step count below one
    #[error("Invalid step count: {0} (must be at least 1)")]
    InvalidStepCount(u32),

    /// Column index out of range
    #[error("Column index {index} out of bounds (count: {count})")]
    ColumnNotFound { index: usize, count: usize },

    /// Failure reported by the host while flushing mutations
    #[error("Adapter commit failed: {0}")]
    AdapterCommit(String),

    /// Palette has no colors
    #[error("Palette must contain at least one color")]
    EmptyPalette,

    /// Color string could not be parsed
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Data column length differs from the category count
    #[error("Column '{column}' has {actual} values, expected {expected}")]
    RaggedTable {
        column: String,
        expected: usize,
        actual: usize,
    },

    /// Table has no data columns
    #[error("Table has no data columns")]
    EmptyTable,

    /// Run stopped through a cancel token
    #[error("Animation cancelled")]
    Cancelled,

    /// Failure while applying a transition
    #[error("Transition {from} -> {to} failed{}: {source}", frame_suffix(.frame))]
    Transition {
        from: usize,
        to: usize,
        /// 1-based frame index, `None` outside frame application
        frame: Option<usize>,
        source: Box<Error>,
    },
}

fn frame_suffix(frame: &Option<usize>) -> String {
    match frame {
        Some(frame) => format!(" at frame {}", frame),
        None => String::new(),
    }
}

impl Error {
    /// Create an adapter commit error with a message
    pub fn commit<S: Into<String>>(msg: S) -> Self {
        Error::AdapterCommit(msg.into())
    }

    /// Wrap an error with the transition it happened in
    pub fn in_transition(self, from: usize, to: usize, frame: Option<usize>) -> Self {
        Error::Transition {
            from,
            to,
            frame,
            source: Box::new(self),
        }
    }

    /// The innermost error, skipping transition context
    pub fn root_cause(&self) -> &Error {
        match self {
            Error::Transition { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Whether retrying the whole transition may succeed
    ///
    /// Only host commit failures qualify. Everything else is a data or
    /// configuration problem that a retry cannot fix.
    pub fn is_retryable(&self) -> bool {
        matches!(self.root_cause(), Error::AdapterCommit(_))
    }
}
