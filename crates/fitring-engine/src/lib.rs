//! fitring engine crate.
//!
//! Platform-independent core of the fit-score progress ring: the colour
//! gradient, the ease-out timeline, frame scheduling and frame timing.
//! Renderers live in `fitring-ui`.

pub mod anim;
pub mod coords;
pub mod logging;
pub mod paint;
pub mod time;
