use super::Hsl;

/// Straight-alpha sRGB colour with channels in [0, 1].
///
/// Renderers that cannot consume `Hsl` directly (terminals, JSON consumers)
/// convert through this type.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Creates a colour from straight components, clamping each to [0, 1].
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Creates an opaque colour from sRGB bytes.
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_straight(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }

    /// Converts an HSL colour to opaque RGB.
    #[inline]
    pub fn from_hsl(hsl: Hsl) -> Self {
        let (r, g, b) = hsl.to_rgb();
        Self::from_straight(r, g, b, 1.0)
    }

    /// Rounds each channel to an sRGB byte.
    #[inline]
    pub fn to_srgb_u8(self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// `#rrggbb` hex string; alpha is dropped.
    pub fn to_hex(self) -> String {
        let [r, g, b, _] = self.to_srgb_u8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        Self::from_hsl(hsl)
    }
}
