use core::f32::consts::TAU;

use fitring_engine::anim::MAX_PROGRESS;
use fitring_engine::coords::Vec2;

/// Ring layout inside a `size × size` box.
///
/// The arc starts at 12 o'clock and runs clockwise; its length is the value's
/// share of the full circumference.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RingGeometry {
    pub size: f32,
    pub center: Vec2,
    /// Radius of the stroke's centre line.
    pub radius: f32,
    pub stroke_width: f32,
}

impl RingGeometry {
    pub fn new(size: f32, stroke_width: f32) -> Self {
        let c = size / 2.0;
        Self {
            size,
            center: Vec2::new(c, c),
            radius: c - stroke_width / 2.0,
            stroke_width,
        }
    }

    #[inline]
    pub fn circumference(&self) -> f32 {
        TAU * self.radius
    }

    /// Fraction of the circle covered at `value`, in `[0, 1]`.
    #[inline]
    pub fn fraction(value: f32) -> f32 {
        if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, MAX_PROGRESS) / MAX_PROGRESS
        }
    }

    /// Dash offset that reveals `value` percent of a circle stroked with a
    /// dash array of one circumference.
    #[inline]
    pub fn dash_offset(&self, value: f32) -> f32 {
        let c = self.circumference();
        c - Self::fraction(value) * c
    }

    /// Arc angle in radians.
    #[inline]
    pub fn sweep(&self, value: f32) -> f32 {
        TAU * Self::fraction(value)
    }

    /// End point of the arc's centre line.
    #[inline]
    pub fn arc_end(&self, value: f32) -> Vec2 {
        Vec2::on_circle(self.center, self.radius, self.sweep(value))
    }

    /// True if `p` lies within the stroke band, widened to at least
    /// `min_half_width` on each side of the centre line.
    pub fn in_band(&self, p: Vec2, min_half_width: f32) -> bool {
        let half = (self.stroke_width / 2.0).max(min_half_width);
        ((p - self.center).length() - self.radius).abs() <= half
    }

    /// True if `p` is inside the band and within the filled arc.
    pub fn on_filled_arc(&self, p: Vec2, value: f32, min_half_width: f32) -> bool {
        Self::fraction(value) > 0.0
            && self.in_band(p, min_half_width)
            && (p - self.center).clock_angle() <= self.sweep(value)
    }
}
