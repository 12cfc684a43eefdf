use super::Hsl;

/// A single gradient control point.
///
/// `progress` is on the same 0–100 scale as the values being coloured.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub progress: f32,
    pub color: Hsl,
}

impl ColorStop {
    #[inline]
    pub const fn new(progress: f32, hue: f32, sat: f32, light: f32) -> Self {
        Self { progress, color: Hsl::new(hue, sat, light) }
    }
}

/// Fit-score palette: red (poor fit) through yellow to green (good fit).
///
/// Strictly increasing in `progress`, spanning [0, 100] at 12.5 intervals.
pub static FIT_STOPS: [ColorStop; 9] = [
    ColorStop::new(0.0, 0.0, 85.0, 35.0),
    ColorStop::new(12.5, 10.0, 85.0, 35.0),
    ColorStop::new(25.0, 20.0, 85.0, 40.0),
    ColorStop::new(37.5, 40.0, 85.0, 45.0),
    ColorStop::new(50.0, 55.0, 85.0, 50.0),
    ColorStop::new(62.5, 65.0, 85.0, 50.0),
    ColorStop::new(75.0, 85.0, 85.0, 45.0),
    ColorStop::new(87.5, 100.0, 85.0, 40.0),
    ColorStop::new(100.0, 120.0, 85.0, 35.0),
];

/// Piecewise-linear gradient over an ordered slice of stops.
///
/// Invariant: `stops` is non-empty and sorted by strictly increasing
/// `progress`. Sampling clamps its input to the first/last stop's range.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Gradient<'a> {
    stops: &'a [ColorStop],
}

impl<'a> Gradient<'a> {
    /// Wraps `stops`, returning `None` if the slice is empty or unordered.
    pub fn new(stops: &'a [ColorStop]) -> Option<Self> {
        let ordered = stops
            .windows(2)
            .all(|w| w[0].progress.is_finite() && w[0].progress < w[1].progress);
        let finite_tail = stops.last().is_some_and(|s| s.progress.is_finite());

        (ordered && finite_tail).then_some(Self { stops })
    }

    /// The fit-score palette.
    #[inline]
    pub fn fit() -> Gradient<'static> {
        Gradient { stops: &FIT_STOPS }
    }

    /// Colour at `value`.
    ///
    /// The first segment with `start <= value <= end` wins, so a value sitting
    /// exactly on an interior stop interpolates at `t = 1` of the lower segment
    /// (which equals that stop). NaN samples as the lowest stop.
    pub fn sample(&self, value: f32) -> Hsl {
        let first = self.stops[0];
        let last = self.stops[self.stops.len() - 1];

        let v = if value.is_nan() {
            first.progress
        } else {
            value.clamp(first.progress, last.progress)
        };

        if self.stops.len() == 1 {
            return first.color;
        }

        for pair in self.stops.windows(2) {
            let (start, end) = (pair[0], pair[1]);
            if v >= start.progress && v <= end.progress {
                let t = (v - start.progress) / (end.progress - start.progress);
                return start.color.lerp(end.color, t);
            }
        }

        // Unreachable for a well-formed table.
        first.color
    }
}

/// Fit-score colour for a value on the 0–100 scale.
///
/// Out-of-range input is clamped; the function is pure and cheap enough to
/// call every frame.
#[inline]
pub fn color_for(value: f32) -> Hsl {
    Gradient::fit().sample(value)
}
