//! Paint model shared between the animation core and renderers.
//!
//! Scope:
//! - `Hsl`: the colour space the fit gradient is authored in
//! - `Color`: straight-alpha sRGB for renderers that need RGB
//! - `gradient`: the fixed fit-score colour stops and their interpolation

pub mod color;
pub mod gradient;
pub mod hsl;

pub use color::Color;
pub use gradient::{color_for, ColorStop, Gradient, FIT_STOPS};
pub use hsl::Hsl;
