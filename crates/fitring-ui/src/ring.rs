use fitring_engine::anim::ProgressFrame;
use fitring_engine::paint::{Color, Hsl};

use crate::error::StyleError;
use crate::geometry::RingGeometry;

/// Circular fit-score indicator.
///
/// Holds styling only; the displayed value and its colour arrive per frame
/// from the animation.
///
/// # Example
/// ```rust,ignore
/// let ring = ProgressRing::new().size(120.0).stroke_width(8.0).show_label(true);
/// let svg = ring.to_svg(&frame);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressRing {
    size: f32,
    stroke_width: f32,
    track_color: Color,
    label_color: Color,
    show_label: bool,
}

impl ProgressRing {
    pub fn new() -> Self {
        Self {
            size: 200.0,
            stroke_width: 10.0,
            track_color: Color::from_srgb_u8(0xee, 0xee, 0xee),
            label_color: Color::from_srgb_u8(0x33, 0x33, 0x33),
            show_label: false,
        }
    }

    pub fn size(mut self, v: f32) -> Self { self.size = v; self }
    pub fn stroke_width(mut self, v: f32) -> Self { self.stroke_width = v; self }
    pub fn track_color(mut self, v: Color) -> Self { self.track_color = v; self }
    pub fn label_color(mut self, v: Color) -> Self { self.label_color = v; self }
    pub fn show_label(mut self, v: bool) -> Self { self.show_label = v; self }

    #[inline] pub fn get_track_color(&self) -> Color { self.track_color }
    #[inline] pub fn get_label_color(&self) -> Color { self.label_color }
    #[inline] pub fn has_label(&self) -> bool { self.show_label }

    /// Checks that the ring can be laid out.
    pub fn validate(&self) -> Result<(), StyleError> {
        if !(self.size.is_finite() && self.size > 0.0) {
            return Err(StyleError::Size(self.size));
        }
        if !(self.stroke_width.is_finite() && self.stroke_width > 0.0) {
            return Err(StyleError::StrokeWidth(self.stroke_width));
        }
        if self.stroke_width >= self.size {
            return Err(StyleError::StrokeTooWide {
                stroke_width: self.stroke_width,
                size: self.size,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn geometry(&self) -> RingGeometry {
        RingGeometry::new(self.size, self.stroke_width)
    }

    /// Percentage label for `value`, rounded to the nearest whole percent.
    pub fn label_text(value: f32) -> String {
        format!("{}%", (RingGeometry::fraction(value) * 100.0).round() as u32)
    }

    /// Renders `frame` as a standalone SVG document.
    pub fn to_svg(&self, frame: &ProgressFrame) -> String {
        crate::svg::render(self, frame.value, frame.color)
    }

    /// Renders an arbitrary value/colour pair as SVG.
    pub fn svg_for(&self, value: f32, color: Hsl) -> String {
        crate::svg::render(self, value, color)
    }
}

impl Default for ProgressRing {
    fn default() -> Self {
        Self::new()
    }
}
