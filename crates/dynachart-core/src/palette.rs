//! Point color palette

use crate::color::Color;
use crate::error::{Error, Result};

/// Default point colors, cycled by row
const DEFAULT_COLORS: [Color; 15] = [
    Color::rgb(0xaf, 0xc9, 0x7a),
    Color::rgb(0xcd, 0x73, 0x71),
    Color::rgb(0x72, 0x9a, 0xca),
    Color::rgb(0xb6, 0x57, 0x08),
    Color::rgb(0x27, 0x6a, 0x7c),
    Color::rgb(0x4d, 0x3b, 0x62),
    Color::rgb(0x5f, 0x75, 0x30),
    Color::rgb(0x77, 0x2c, 0x2a),
    Color::rgb(0x2c, 0x4d, 0x75),
    Color::rgb(0xf7, 0x96, 0x46),
    Color::rgb(0x4b, 0xac, 0xc6),
    Color::rgb(0x80, 0x64, 0xa2),
    Color::rgb(0x9b, 0xbb, 0x59),
    Color::rgb(0xc0, 0x50, 0x4d),
    Color::rgb(0x4f, 0x81, 0xbd),
];

/// Ordered, non-empty list of point colors
///
/// Row `i` is always drawn in `colors[i % len]`, whatever its current
/// display position.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Color>", into = "Vec<Color>"))]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Create a palette, rejecting an empty color list
    pub fn new(colors: Vec<Color>) -> Result<Self> {
        if colors.is_empty() {
            return Err(Error::EmptyPalette);
        }
        Ok(Self { colors })
    }

    /// Parse a comma separated list of hex colors or color names
    pub fn parse_list(list: &str) -> Result<Self> {
        let colors = list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<Color>())
            .collect::<Result<Vec<_>>>()?;
        Self::new(colors)
    }

    /// Color assigned to a row
    pub fn color_for_row(&self, row: usize) -> Color {
        self.colors[row % self.colors.len()]
    }

    /// Number of colors
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Never true for a constructed palette
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// All colors in order
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.to_vec(),
        }
    }
}

impl TryFrom<Vec<Color>> for Palette {
    type Error = Error;

    fn try_from(colors: Vec<Color>) -> Result<Self> {
        Self::new(colors)
    }
}

impl From<Palette> for Vec<Color> {
    fn from(palette: Palette) -> Self {
        palette.colors
    }
}
