//! Progress animation.
//!
//! Layers, bottom-up:
//! - [`ProgressAnimator`]: pure ease-out timeline, advanced with explicit timestamps
//! - [`FrameScheduler`] / [`FrameQueue`]: "run again before the next frame" callbacks
//! - [`ProgressAnimation`]: handle that drives an animator over a scheduler and
//!   presents each frame to a [`FrameSink`]

mod handle;
mod progress;
mod scheduler;

pub use handle::{AnimationConfig, FrameSink, ProgressAnimation, ProgressFrame};
pub use progress::{ease_out, AnimationPhase, ProgressAnimator, EASE_EXPONENT, MAX_PROGRESS};
pub use scheduler::{FrameQueue, FrameScheduler, TickCallback, TickId};
