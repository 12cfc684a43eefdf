use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::{Duration, Instant};

use crate::paint::{color_for, Hsl};

use super::progress::{AnimationPhase, ProgressAnimator};
use super::scheduler::{FrameScheduler, TickId};

/// Animation settings for a progress ring.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AnimationConfig {
    /// Length of the timeline. Zero completes immediately.
    pub duration: Duration,
    /// When `false` the value is shown at its target with no timeline.
    pub animate_on_load: bool,
}

impl AnimationConfig {
    pub fn duration_ms(mut self, ms: u64) -> Self {
        self.duration = Duration::from_millis(ms);
        self
    }

    pub fn animate_on_load(mut self, v: bool) -> Self {
        self.animate_on_load = v;
        self
    }

    /// True when starting with this config skips the timeline entirely.
    #[inline]
    pub fn is_immediate(&self) -> bool {
        !self.animate_on_load || self.duration.is_zero()
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(1500),
            animate_on_load: true,
        }
    }
}

/// One presented state of the ring.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ProgressFrame {
    /// Displayed value on the 0–100 scale.
    pub value: f32,
    /// Stroke colour for `value`.
    pub color: Hsl,
    /// Time since the timeline started; zero for settled frames.
    pub elapsed: Duration,
    /// True for the last frame of a timeline.
    pub done: bool,
}

impl ProgressFrame {
    pub fn new(value: f32, elapsed: Duration, done: bool) -> Self {
        Self { value, color: color_for(value), elapsed, done }
    }
}

/// Receives frames from a running animation.
///
/// This is the boundary to whatever draws the ring (SVG, terminal, GPU).
/// Implemented for every `FnMut(ProgressFrame)`.
pub trait FrameSink {
    fn present(&mut self, frame: ProgressFrame);
}

impl<F> FrameSink for F
where
    F: FnMut(ProgressFrame),
{
    fn present(&mut self, frame: ProgressFrame) {
        self(frame)
    }
}

struct State {
    animator: ProgressAnimator,
    config: AnimationConfig,
    pending: Option<TickId>,
    cancelled: bool,
    presented: u64,
    /// Frame produced while the sink was busy (re-entrant restart).
    deferred: Option<ProgressFrame>,
}

struct Shared {
    state: RefCell<State>,
    sink: RefCell<Box<dyn FrameSink>>,
    scheduler: Weak<dyn FrameScheduler>,
}

/// Handle to a running progress animation.
///
/// Created with [`start`](Self::start); the animation keeps requesting ticks
/// from its scheduler until it reaches its target or is cancelled. Dropping
/// the handle cancels it, so no tick outlives its owner.
///
/// The handle holds the scheduler weakly. If the host drops its scheduler the
/// animation stalls at its current value.
pub struct ProgressAnimation {
    shared: Rc<Shared>,
}

impl ProgressAnimation {
    /// Starts animating from 0 towards `target` (clamped to `[0, 100]`).
    ///
    /// With [`AnimationConfig::is_immediate`] the settled frame is presented
    /// before this returns and no tick is requested. Otherwise the first tick
    /// fixes the start of the timeline and presents 0.
    pub fn start<S, K>(scheduler: &Rc<S>, target: f32, config: AnimationConfig, sink: K) -> Self
    where
        S: FrameScheduler + 'static,
        K: FrameSink + 'static,
    {
        let scheduler: Rc<dyn FrameScheduler> = scheduler.clone();
        let shared = Rc::new(Shared {
            state: RefCell::new(State {
                animator: ProgressAnimator::settled(0.0),
                config,
                pending: None,
                cancelled: false,
                presented: 0,
                deferred: None,
            }),
            sink: RefCell::new(Box::new(sink)),
            scheduler: Rc::downgrade(&scheduler),
        });

        begin(&shared, target, config);
        Self { shared }
    }

    /// Current displayed value. Readable at any time.
    pub fn current_value(&self) -> f32 {
        self.shared.state.borrow().animator.value()
    }

    /// Target of the current timeline, after clamping.
    pub fn target(&self) -> f32 {
        self.shared.state.borrow().animator.target()
    }

    pub fn config(&self) -> AnimationConfig {
        self.shared.state.borrow().config
    }

    pub fn phase(&self) -> AnimationPhase {
        self.shared.state.borrow().animator.phase()
    }

    /// True while more frames will be presented.
    pub fn is_running(&self) -> bool {
        let st = self.shared.state.borrow();
        !st.cancelled && !st.animator.is_done()
    }

    pub fn is_cancelled(&self) -> bool {
        self.shared.state.borrow().cancelled
    }

    /// Number of frames handed to the sink so far, across restarts.
    pub fn frames_presented(&self) -> u64 {
        self.shared.state.borrow().presented
    }

    /// Stops the animation. No frame is presented afterwards.
    ///
    /// Safe to call repeatedly, before the first tick, after completion and
    /// from inside the sink.
    pub fn cancel(&self) {
        let pending = {
            let mut st = self.shared.state.borrow_mut();
            if !st.cancelled && !st.animator.is_done() {
                log::debug!("progress animation cancelled at {:.2}", st.animator.value());
            }
            st.cancelled = true;
            st.deferred = None;
            st.pending.take()
        };

        cancel_pending(&self.shared, pending);
    }

    /// Switches to a new target, keeping the current config.
    ///
    /// The timeline restarts from 0; the value shown so far is discarded.
    pub fn retarget(&self, target: f32) {
        let config = self.config();
        self.restart(target, config);
    }

    /// Discards the current timeline and starts a fresh one.
    pub fn restart(&self, target: f32, config: AnimationConfig) {
        let pending = {
            let mut st = self.shared.state.borrow_mut();
            log::debug!(
                "progress animation restarted: {:.2} -> {:.2} (shown {:.2})",
                st.animator.target(),
                target,
                st.animator.value()
            );
            st.config = config;
            st.pending.take()
        };

        cancel_pending(&self.shared, pending);

        begin(&self.shared, target, config);
    }
}

impl Drop for ProgressAnimation {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn begin(shared: &Rc<Shared>, target: f32, config: AnimationConfig) {
    let settled = {
        let mut st = shared.state.borrow_mut();
        st.cancelled = false;
        st.deferred = None;

        if config.is_immediate() {
            st.animator = ProgressAnimator::settled(target);
            Some(st.animator.value())
        } else {
            st.animator = ProgressAnimator::new(target, config.duration);
            None
        }
    };

    match settled {
        Some(value) => {
            log::debug!("progress animation settled at {value:.2}");
            present(shared, ProgressFrame::new(value, Duration::ZERO, true));
        }
        None => {
            log::debug!(
                "progress animation started: target {:.2} over {:?}",
                shared.state.borrow().animator.target(),
                config.duration
            );
            request_next(shared);
        }
    }
}

fn cancel_pending(shared: &Shared, pending: Option<TickId>) {
    if let (Some(id), Some(scheduler)) = (pending, shared.scheduler.upgrade()) {
        scheduler.cancel_tick(id);
    }
}

fn request_next(shared: &Rc<Shared>) {
    let Some(scheduler) = shared.scheduler.upgrade() else {
        log::warn!("frame scheduler dropped; progress animation stalled");
        return;
    };

    let weak = Rc::downgrade(shared);
    let id = scheduler.request_tick(Box::new(move |now: Instant| on_tick(&weak, now)));
    shared.state.borrow_mut().pending = Some(id);
}

fn on_tick(weak: &Weak<Shared>, now: Instant) {
    let Some(shared) = weak.upgrade() else {
        return;
    };

    let frame = {
        let mut st = shared.state.borrow_mut();
        st.pending = None;
        if st.cancelled {
            return;
        }

        let value = st.animator.advance(now);
        let elapsed = st
            .animator
            .started_at()
            .map(|start| now.saturating_duration_since(start))
            .unwrap_or_default();

        log::trace!("progress tick: {value:.3} after {elapsed:?}");
        ProgressFrame::new(value, elapsed, st.animator.is_done())
    };

    if frame.done {
        log::debug!("progress animation finished at {:.2}", frame.value);
    }

    present(&shared, frame);

    // The sink may have cancelled or restarted the animation.
    let again = {
        let st = shared.state.borrow();
        !st.cancelled && !st.animator.is_done() && st.pending.is_none()
    };
    if again {
        request_next(&shared);
    }
}

fn present(shared: &Rc<Shared>, frame: ProgressFrame) {
    let Ok(mut sink) = shared.sink.try_borrow_mut() else {
        // Re-entrant: the sink restarted us. Delivered once it returns.
        shared.state.borrow_mut().deferred = Some(frame);
        return;
    };

    let mut next = Some(frame);
    while let Some(frame) = next {
        shared.state.borrow_mut().presented += 1;
        sink.present(frame);
        next = shared.state.borrow_mut().deferred.take();
    }
}
