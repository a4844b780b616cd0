//! Axis types

/// Chart axis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Axis {
    /// Axis title
    pub title: Option<String>,
    /// Whether the axis is drawn
    pub visible: bool,
}

impl Default for Axis {
    fn default() -> Self {
        Self {
            title: None,
            visible: true,
        }
    }
}

impl Axis {
    /// Create a new axis
    pub fn new() -> Self {
        Self::default()
    }

    /// Set axis title
    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }
}
