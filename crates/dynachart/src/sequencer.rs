//! Animation sequencer
//!
//! Replays the columns of a data table as a bar chart animation. Every
//! column-to-column transition is split into interpolated frames, and each
//! frame goes through the adapter as write, recolor, commit, pause.
//!
//! # Example
//!
//! ```rust
//! use dynachart::prelude::*;
//!
//! let table = DataTable::new("Team", vec!["A".into(), "B".into()])
//!     .with_column("Week 1", vec![1.0, 4.0]).unwrap()
//!     .with_column("Week 2", vec![5.0, 2.0]).unwrap();
//! let mut host = MemoryAdapter::new(table);
//!
//! let config = AnimationConfig::default().with_delay_ms(0);
//! let mut sequencer = Sequencer::with_pacer(config, NoPacer).unwrap();
//! sequencer.prepare(&mut host).unwrap();
//! let summary = sequencer.run(&mut host).unwrap();
//!
//! assert_eq!(summary.frames_applied, 3);
//! assert_eq!(host.working_values(), &[5.0, 2.0]);
//! ```

use dynachart_core::{AnimationPlan, ColumnSnapshot, Error, Frame, Result};

use crate::adapter::DataTableAdapter;
use crate::config::AnimationConfig;
use crate::pacing::{CancelToken, Pacer, ThreadPacer};

/// Where the sequencer is in a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerState {
    /// Not running; the last run (if any) succeeded
    Idle,
    /// Reading the table shape and the first column
    Preparing,
    /// Applying frame `frame` (1-based) of the transition `from -> to`
    Transitioning { from: usize, to: usize, frame: usize },
    /// The last run stopped on an error
    Failed,
}

/// Statistics from an animation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Column-to-column transitions completed
    pub transitions: usize,
    /// Frames written and committed
    pub frames_applied: usize,
    /// Title shown when the run ended
    pub final_label: Option<String>,
}

/// Drives an animation through a [`DataTableAdapter`]
///
/// The sequencer owns the pacing and the color policy. It keeps at most one
/// frame in flight: the next frame is not computed or written until the
/// previous commit returned.
#[derive(Debug)]
pub struct Sequencer<P = ThreadPacer> {
    config: AnimationConfig,
    pacer: P,
    cancel: Option<CancelToken>,
    state: SequencerState,
    frames_applied: usize,
}

impl Sequencer<ThreadPacer> {
    /// Create a sequencer that paces frames by sleeping the current thread
    pub fn new(config: AnimationConfig) -> Result<Self> {
        Self::with_pacer(config, ThreadPacer::new())
    }

    /// Create a thread-paced sequencer that stops when `token` is cancelled
    ///
    /// Cancellation also cuts short a pause in progress.
    pub fn cancellable(config: AnimationConfig, token: CancelToken) -> Result<Self> {
        Ok(Self::with_pacer(config, ThreadPacer::cancellable(token.clone()))?
            .with_cancel_token(token))
    }
}

impl<P: Pacer> Sequencer<P> {
    /// Create a sequencer with a custom pacer
    ///
    /// Fails with [`Error::InvalidStepCount`] or [`Error::EmptyPalette`]
    /// when the configuration is unusable.
    pub fn with_pacer(config: AnimationConfig, pacer: P) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            pacer,
            cancel: None,
            state: SequencerState::Idle,
            frames_applied: 0,
        })
    }

    /// Check `token` before every transition and frame
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Current state
    pub fn state(&self) -> SequencerState {
        self.state
    }

    /// The configuration in use
    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// Show the first data column: values, point colors and title
    pub fn prepare<A: DataTableAdapter>(&mut self, adapter: &mut A) -> Result<()> {
        self.state = SequencerState::Preparing;
        let result = self.prepare_inner(adapter);
        self.finish(result)
    }

    fn prepare_inner<A: DataTableAdapter>(&mut self, adapter: &mut A) -> Result<()> {
        self.check_cancelled()?;
        let count = adapter.column_count()?;
        if count == 0 {
            return Err(Error::EmptyTable);
        }

        let first = adapter.read_column(0)?;
        tracing::debug!(label = first.label(), rows = first.len(), "preparing chart");

        adapter.write_frame(&first.to_frame())?;
        self.reassert_point_colors(adapter, first.len())?;
        adapter.set_label(first.label())?;
        adapter.commit()
    }

    /// Animate from the first data column to the last
    ///
    /// The table shape is read again on every run. Column 0 is the starting
    /// state; each later column is read just before its transition.
    pub fn run<A: DataTableAdapter>(&mut self, adapter: &mut A) -> Result<RunSummary> {
        self.state = SequencerState::Preparing;
        self.frames_applied = 0;
        let result = self.run_inner(adapter);
        self.finish(result)
    }

    fn run_inner<A: DataTableAdapter>(&mut self, adapter: &mut A) -> Result<RunSummary> {
        self.check_cancelled()?;
        let count = adapter.column_count()?;
        if count == 0 {
            return Err(Error::EmptyTable);
        }

        let span = tracing::info_span!("animation", columns = count);
        let _guard = span.enter();
        tracing::info!(
            steps = self.config.steps_per_transition,
            delay_ms = self.config.delay_ms,
            "starting animation"
        );

        let mut current = adapter.read_column(0)?;
        let mut summary = RunSummary::default();

        for to in 1..count {
            self.check_cancelled()?;
            let next = adapter
                .read_column(to)
                .map_err(|e| Error::in_transition(e, to - 1, to, None))?;
            self.advance_inner(&current, &next, adapter)?;
            current = next;
            summary.transitions += 1;
        }

        // Sorting during the last frame may have dropped the fills
        self.reassert_point_colors(adapter, current.len())?;
        adapter.commit()?;

        summary.frames_applied = self.frames_applied;
        summary.final_label = Some(current.label().to_string());
        tracing::info!(
            transitions = summary.transitions,
            frames = summary.frames_applied,
            "animation finished"
        );
        Ok(summary)
    }

    /// Play one transition from `current` to `next`
    ///
    /// Each frame is written, recolored, committed and followed by the
    /// configured pause. After the terminal frame the title changes to
    /// `next`'s label. Returns the terminal frame, which equals `next`.
    ///
    /// Errors are wrapped in [`Error::Transition`] naming the failed frame.
    /// Cancellation is returned as a bare [`Error::Cancelled`]. The state is
    /// `Idle` afterwards, or `Failed` on error; the whole call can be retried.
    pub fn advance<A: DataTableAdapter>(
        &mut self,
        current: &ColumnSnapshot,
        next: &ColumnSnapshot,
        adapter: &mut A,
    ) -> Result<Frame> {
        let result = self.advance_inner(current, next, adapter);
        self.finish(result)
    }

    fn advance_inner<A: DataTableAdapter>(
        &mut self,
        current: &ColumnSnapshot,
        next: &ColumnSnapshot,
        adapter: &mut A,
    ) -> Result<Frame> {
        let (from, to) = (current.index(), next.index());
        let plan = AnimationPlan::between(current, next, self.config.steps_per_transition)
            .map_err(|e| self.transition_error(e, from, to, None))?;

        tracing::debug!(from, to, frames = plan.len(), label = next.label(), "transition");

        for (index, frame) in plan.iter() {
            self.state = SequencerState::Transitioning {
                from,
                to,
                frame: index,
            };
            self.apply_frame(frame, adapter)
                .map_err(|e| self.transition_error(e, from, to, Some(index)))?;
        }

        adapter
            .set_label(next.label())
            .and_then(|()| adapter.commit())
            .map_err(|e| self.transition_error(e, from, to, None))?;

        Ok(plan.terminal().clone())
    }

    fn apply_frame<A: DataTableAdapter>(&mut self, frame: &Frame, adapter: &mut A) -> Result<()> {
        self.check_cancelled()?;
        adapter.write_frame(frame)?;
        self.reassert_point_colors(adapter, frame.len())?;
        adapter.commit()?;
        self.frames_applied += 1;
        tracing::trace!(frame = ?frame.values(), "frame committed");
        self.pacer.pause(self.config.delay())
    }

    /// Set every row's point to its palette color
    ///
    /// Hosts may drop point formatting when they re-sort or refresh the
    /// series, so this runs for every frame, not once per chart.
    fn reassert_point_colors<A: DataTableAdapter>(&self, adapter: &mut A, rows: usize) -> Result<()> {
        for row in 0..rows {
            adapter.set_point_color(row, self.config.palette.color_for_row(row))?;
        }
        Ok(())
    }

    fn check_cancelled(&self) -> Result<()> {
        match &self.cancel {
            Some(token) if token.is_cancelled() => Err(Error::Cancelled),
            _ => Ok(()),
        }
    }

    fn transition_error(&self, err: Error, from: usize, to: usize, frame: Option<usize>) -> Error {
        match err {
            Error::Cancelled | Error::Transition { .. } => err,
            err => err.in_transition(from, to, frame),
        }
    }

    fn finish<T>(&mut self, result: Result<T>) -> Result<T> {
        match &result {
            Ok(_) => self.state = SequencerState::Idle,
            Err(Error::Cancelled) => {
                tracing::info!("animation cancelled");
                self.state = SequencerState::Idle;
            }
            Err(err) => {
                tracing::warn!(error = %err, "animation failed");
                self.state = SequencerState::Failed;
            }
        }
        result
    }
}
