//! Frame scheduling.
//!
//! Abstracts the host's "run again before the next frame is drawn" mechanism
//! so animations can be driven by a real display loop or by tests with
//! synthetic timestamps. Everything here is single-threaded; callbacks run
//! cooperatively on the thread that calls [`FrameQueue::run_frame`].

use std::cell::RefCell;
use std::collections::VecDeque;
use std::time::Instant;

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle to a requested tick. Stale after the tick fires or is cancelled.
    pub struct TickId;
}

/// Callback run once, with the frame timestamp, before the next frame.
pub type TickCallback = Box<dyn FnOnce(Instant)>;

/// Host-side frame scheduling contract.
///
/// Methods take `&self` so callbacks may request or cancel ticks while the
/// scheduler is dispatching a frame.
pub trait FrameScheduler {
    /// Requests `callback` to run on the next frame.
    fn request_tick(&self, callback: TickCallback) -> TickId;

    /// Cancels a pending tick.
    ///
    /// Unknown, already-fired and already-cancelled ids are ignored.
    fn cancel_tick(&self, id: TickId);
}

#[derive(Default)]
struct QueueInner {
    callbacks: SlotMap<TickId, TickCallback>,
    order: VecDeque<TickId>,
}

/// In-process frame scheduler.
///
/// The host loop calls [`run_frame`](Self::run_frame) once per frame.
/// Callbacks requested while a frame is running are deferred to the next
/// frame, so a self-rescheduling animation advances exactly once per frame.
#[derive(Default)]
pub struct FrameQueue {
    inner: RefCell<QueueInner>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of ticks waiting for the next frame.
    pub fn pending(&self) -> usize {
        self.inner.borrow().callbacks.len()
    }

    /// Returns `true` when no ticks are waiting.
    pub fn is_idle(&self) -> bool {
        self.pending() == 0
    }

    /// Runs every tick requested before this call, in request order.
    ///
    /// Returns the number of callbacks that ran. No internal borrow is held
    /// while a callback runs.
    pub fn run_frame(&self, now: Instant) -> usize {
        let batch: Vec<TickId> = self.inner.borrow_mut().order.drain(..).collect();

        let mut ran = 0;
        for id in batch {
            // Removed lazily so a callback can cancel a later one in the same frame.
            let callback = self.inner.borrow_mut().callbacks.remove(id);
            if let Some(callback) = callback {
                callback(now);
                ran += 1;
            }
        }

        log::trace!("frame ran {ran} tick(s), {} pending", self.pending());
        ran
    }
}

impl FrameScheduler for FrameQueue {
    fn request_tick(&self, callback: TickCallback) -> TickId {
        let mut inner = self.inner.borrow_mut();
        let id = inner.callbacks.insert(callback);
        inner.order.push_back(id);
        id
    }

    fn cancel_tick(&self, id: TickId) {
        let mut inner = self.inner.borrow_mut();
        if inner.callbacks.remove(id).is_some() {
            inner.order.retain(|&queued| queued != id);
        }
    }
}
