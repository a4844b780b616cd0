//! Linear interpolation between two columns
//!
//! A transition from `current` to `next` is split into `steps` frames.
//! Intermediate frame `j` holds `current[i] + j * (next[i] - current[i]) / steps`
//! for every row `i`. The last frame is a copy of `next`, never the computed
//! value, so chained transitions do not accumulate floating point drift.

use crate::error::{Error, Result};
use crate::snapshot::{ColumnSnapshot, Frame};

fn check_inputs(current: &[f64], next: &[f64], steps: u32) -> Result<()> {
    if steps < 1 {
        return Err(Error::InvalidStepCount(steps));
    }
    if current.len() != next.len() {
        return Err(Error::LengthMismatch {
            current: current.len(),
            next: next.len(),
        });
    }
    Ok(())
}

/// Compute the frames of a transition from `current` to `next`
///
/// Returns exactly `steps` frames. The last one equals `next`.
///
/// # Errors
///
/// [`Error::InvalidStepCount`] when `steps` is zero and
/// [`Error::LengthMismatch`] when the inputs differ in length.
pub fn compute_steps(current: &[f64], next: &[f64], steps: u32) -> Result<Vec<Frame>> {
    check_inputs(current, next, steps)?;

    let divisor = f64::from(steps);
    let mut frames = Vec::with_capacity(steps as usize);
    for j in 1..steps {
        let j = f64::from(j);
        let values = current
            .iter()
            .zip(next)
            .map(|(&from, &to)| from + j * (to - from) / divisor)
            .collect();
        frames.push(Frame::new(values));
    }
    frames.push(Frame::new(next.to_vec()));

    Ok(frames)
}

/// Per-row increment of one step, `(next[i] - current[i]) / steps`
pub fn step_increments(current: &[f64], next: &[f64], steps: u32) -> Result<Vec<f64>> {
    check_inputs(current, next, steps)?;

    let divisor = f64::from(steps);
    Ok(current
        .iter()
        .zip(next)
        .map(|(&from, &to)| (to - from) / divisor)
        .collect())
}

/// The frames of one column-to-column transition
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationPlan {
    from: usize,
    to: usize,
    frames: Vec<Frame>,
}

impl AnimationPlan {
    /// Plan a transition between two raw value sequences
    pub fn new(current: &[f64], next: &[f64], steps: u32) -> Result<Self> {
        Ok(Self {
            from: 0,
            to: 0,
            frames: compute_steps(current, next, steps)?,
        })
    }

    /// Plan a transition between two snapshots, keeping their column indices
    pub fn between(current: &ColumnSnapshot, next: &ColumnSnapshot, steps: u32) -> Result<Self> {
        Ok(Self {
            from: current.index(),
            to: next.index(),
            frames: compute_steps(current.values(), next.values(), steps)?,
        })
    }

    /// Source column index
    pub fn from(&self) -> usize {
        self.from
    }

    /// Target column index
    pub fn to(&self) -> usize {
        self.to
    }

    /// All frames in order
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Number of frames
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Never true; a plan has at least one frame
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// The last frame, an exact copy of the target column
    pub fn terminal(&self) -> &Frame {
        // compute_steps always yields at least one frame
        &self.frames[self.frames.len() - 1]
    }

    /// Iterate over frames with their 1-based index
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Frame)> + '_ {
        self.frames.iter().enumerate().map(|(i, frame)| (i + 1, frame))
    }
}

impl IntoIterator for AnimationPlan {
    type Item = Frame;
    type IntoIter = std::vec::IntoIter<Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.into_iter()
    }
}
