//! Time subsystem.
//!
//! Provides frame timing for host loops without coupling to any runtime:
//! - one `FrameClock` per render loop
//! - call `tick()` once per presented frame and hand `FrameTime::now`
//!   to the frame scheduler

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
