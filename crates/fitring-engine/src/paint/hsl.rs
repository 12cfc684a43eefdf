use std::fmt;

/// Hue/saturation/lightness triple.
///
/// Units follow CSS: `hue` in degrees, `sat` and `light` in percent.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Hsl {
    pub hue: f32,
    pub sat: f32,
    pub light: f32,
}

impl Hsl {
    #[inline]
    pub const fn new(hue: f32, sat: f32, light: f32) -> Self {
        Self { hue, sat, light }
    }

    /// Channel-wise linear interpolation; `t` is not clamped.
    #[inline]
    pub fn lerp(self, to: Hsl, t: f32) -> Self {
        Self {
            hue: self.hue + t * (to.hue - self.hue),
            sat: self.sat + t * (to.sat - self.sat),
            light: self.light + t * (to.light - self.light),
        }
    }

    /// Converts to RGB channels in [0, 1].
    ///
    /// Hue wraps modulo 360; saturation and lightness are clamped to [0, 100].
    pub fn to_rgb(self) -> (f32, f32, f32) {
        let h = self.hue.rem_euclid(360.0) / 60.0;
        let s = (self.sat / 100.0).clamp(0.0, 1.0);
        let l = (self.light / 100.0).clamp(0.0, 1.0);

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        (r + m, g + m, b + m)
    }
}

/// Formats as a CSS colour, e.g. `hsl(55, 85%, 50%)`.
///
/// Channels print with at most two decimals and without trailing zeros.
impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            Trimmed(self.hue),
            Trimmed(self.sat),
            Trimmed(self.light)
        )
    }
}

struct Trimmed(f32);

impl fmt::Display for Trimmed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = format!("{:.2}", self.0);
        let s = s.trim_end_matches('0').trim_end_matches('.');
        f.write_str(if s == "-0" { "0" } else { s })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    // ── lerp ──────────────────────────────────────────────────────────────

    #[test]
    fn lerp_endpoints() {
        let a = Hsl::new(0.0, 85.0, 35.0);
        let b = Hsl::new(10.0, 85.0, 45.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn lerp_midpoint() {
        let mid = Hsl::new(0.0, 80.0, 30.0).lerp(Hsl::new(20.0, 90.0, 50.0), 0.5);
        assert_eq!(mid, Hsl::new(10.0, 85.0, 40.0));
    }

    // ── to_rgb ────────────────────────────────────────────────────────────

    #[test]
    fn primaries() {
        let (r, g, b) = Hsl::new(0.0, 100.0, 50.0).to_rgb();
        assert!(close(r, 1.0) && close(g, 0.0) && close(b, 0.0));
        let (r, g, b) = Hsl::new(120.0, 100.0, 50.0).to_rgb();
        assert!(close(r, 0.0) && close(g, 1.0) && close(b, 0.0));
        let (r, g, b) = Hsl::new(240.0, 100.0, 50.0).to_rgb();
        assert!(close(r, 0.0) && close(g, 0.0) && close(b, 1.0));
    }

    #[test]
    fn zero_saturation_is_grey() {
        let (r, g, b) = Hsl::new(200.0, 0.0, 40.0).to_rgb();
        assert!(close(r, 0.4) && close(g, 0.4) && close(b, 0.4));
    }

    #[test]
    fn hue_wraps() {
        assert_eq!(Hsl::new(360.0, 100.0, 50.0).to_rgb(), Hsl::new(0.0, 100.0, 50.0).to_rgb());
        assert_eq!(Hsl::new(-120.0, 100.0, 50.0).to_rgb(), Hsl::new(240.0, 100.0, 50.0).to_rgb());
    }

    #[test]
    fn fit_red() {
        // hsl(0, 85%, 35%): c = 0.595, m = 0.0525
        let (r, g, b) = Hsl::new(0.0, 85.0, 35.0).to_rgb();
        assert!(close(r, 0.6475));
        assert!(close(g, 0.0525));
        assert!(close(b, 0.0525));
    }

    // ── Display ───────────────────────────────────────────────────────────

    #[test]
    fn css_integer_channels() {
        assert_eq!(Hsl::new(55.0, 85.0, 50.0).to_string(), "hsl(55, 85%, 50%)");
    }

    #[test]
    fn css_fractional_channels() {
        assert_eq!(Hsl::new(5.0, 85.0, 37.5).to_string(), "hsl(5, 85%, 37.5%)");
        assert_eq!(Hsl::new(1.0 / 3.0, 85.0, 35.0).to_string(), "hsl(0.33, 85%, 35%)");
    }
}
