use std::fmt;

use crate::term::MAX_ROWS;

/// Invalid ring styling.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleError {
    /// `size` is zero, negative or not finite.
    Size(f32),
    /// `stroke_width` is zero, negative or not finite.
    StrokeWidth(f32),
    /// The stroke leaves no room for the ring.
    StrokeTooWide { stroke_width: f32, size: f32 },
    /// Terminal raster row count outside `1..=MAX_ROWS`.
    Rows(u16),
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleError::Size(v) => write!(f, "ring size must be a positive number, got {v}"),
            StyleError::StrokeWidth(v) => {
                write!(f, "stroke width must be a positive number, got {v}")
            }
            StyleError::StrokeTooWide { stroke_width, size } => write!(
                f,
                "stroke width {stroke_width} must be smaller than ring size {size}"
            ),
            StyleError::Rows(v) => write!(f, "terminal ring needs 1 to {MAX_ROWS} rows, got {v}"),
        }
    }
}

impl std::error::Error for StyleError {}
