//! fitring UI: the progress ring widget on top of `fitring-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use fitring_ui::prelude::*;
//!
//! let queue = Rc::new(FrameQueue::new());
//! let ring = ProgressRing::new().size(120.0).show_label(true);
//!
//! let anim = ProgressAnimation::start(&queue, 87.0, AnimationConfig::default(), move |frame| {
//!     print!("{}", term::render(&ring, &TermStyle::default(), frame.value, frame.color));
//! });
//!
//! // Host loop:
//! queue.run_frame(clock.tick().now);
//! ```

pub mod error;
pub mod geometry;
pub mod ring;
pub mod svg;
pub mod term;

pub use error::StyleError;
pub use geometry::RingGeometry;
pub use ring::ProgressRing;
pub use term::TermStyle;

/// Everything needed to animate and draw a ring.
pub mod prelude {
    pub use crate::error::StyleError;
    pub use crate::geometry::RingGeometry;
    pub use crate::ring::ProgressRing;
    pub use crate::term::{self, TermStyle};

    pub use fitring_engine::anim::{
        AnimationConfig, FrameQueue, FrameScheduler, FrameSink, ProgressAnimation, ProgressFrame,
    };
    pub use fitring_engine::paint::{color_for, Color, Hsl};
    pub use fitring_engine::time::{FrameClock, FrameTime};
}
