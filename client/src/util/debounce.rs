//! Trailing-edge debounce as an explicit state machine.
//!
//! DESIGN
//! ======
//! A debouncer is either `Idle` or `Pending(handle)`. Every trigger cancels
//! the pending timer (if any) and schedules a fresh one, so a burst produces
//! a single call one interval after the last trigger, carrying the most
//! recent value. `cancel` and `detach` move back to `Idle` and discard the
//! pending value; a detached debouncer ignores further triggers.
//!
//! Timers come from a [`TimerHost`] so the machine runs against
//! `gloo_timers` in the browser and a virtual clock in tests.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

/// Source of one-shot timers on the UI thread.
pub trait TimerHost {
    type Handle;

    /// Run `task` once after `delay`.
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle;

    /// Cancel a scheduled task. Cancelling a task that already ran is a no-op.
    fn cancel(&self, handle: Self::Handle);
}

/// Browser timers backed by `setTimeout`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimers;

#[cfg(feature = "hydrate")]
impl TimerHost for BrowserTimers {
    type Handle = gloo_timers::callback::Timeout;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::callback::Timeout::new(millis, task)
    }

    fn cancel(&self, handle: Self::Handle) {
        let _ = handle.cancel();
    }
}

/// Debounce state.
#[derive(Debug)]
pub enum DebounceState<H> {
    Idle,
    Pending(H),
}

impl<H> DebounceState<H> {
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }
}

struct Slot<T, H> {
    state: DebounceState<H>,
    latest: Option<T>,
    detached: bool,
}

type Callback<T> = Rc<RefCell<dyn FnMut(T)>>;

/// Trailing-edge debouncer with a single pending-timer slot.
pub struct Debouncer<T, H: TimerHost> {
    timers: H,
    interval: Duration,
    slot: Rc<RefCell<Slot<T, H::Handle>>>,
    callback: Callback<T>,
}

impl<T: 'static, H> Debouncer<T, H>
where
    H: TimerHost,
    H::Handle: 'static,
{
    pub fn new(timers: H, interval: Duration, callback: impl FnMut(T) + 'static) -> Self {
        let callback: Callback<T> = Rc::new(RefCell::new(callback));
        Self {
            timers,
            interval,
            slot: Rc::new(RefCell::new(Slot { state: DebounceState::Idle, latest: None, detached: false })),
            callback,
        }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.slot.borrow().state.is_pending()
    }

    #[must_use]
    pub fn is_detached(&self) -> bool {
        self.slot.borrow().detached
    }

    /// Record `value` and restart the quiet period.
    pub fn trigger(&self, value: T) {
        {
            let mut slot = self.slot.borrow_mut();
            if slot.detached {
                return;
            }
            slot.latest = Some(value);
            if let DebounceState::Pending(handle) = std::mem::replace(&mut slot.state, DebounceState::Idle) {
                self.timers.cancel(handle);
            }
        }

        let slot = Rc::downgrade(&self.slot);
        let callback = Rc::downgrade(&self.callback);
        let handle = self.timers.schedule(self.interval, Box::new(move || fire(&slot, &callback)));
        self.slot.borrow_mut().state = DebounceState::Pending(handle);
    }

    /// Drop any pending invocation and return to `Idle`.
    pub fn cancel(&self) {
        let pending = {
            let mut slot = self.slot.borrow_mut();
            slot.latest = None;
            std::mem::replace(&mut slot.state, DebounceState::Idle)
        };
        if let DebounceState::Pending(handle) = pending {
            self.timers.cancel(handle);
        }
    }

    /// Cancel and refuse all later triggers.
    pub fn detach(&self) {
        self.cancel();
        self.slot.borrow_mut().detached = true;
    }
}

impl<T, H: TimerHost> Drop for Debouncer<T, H> {
    fn drop(&mut self) {
        let mut slot = self.slot.borrow_mut();
        slot.detached = true;
        slot.latest = None;
        if let DebounceState::Pending(handle) = std::mem::replace(&mut slot.state, DebounceState::Idle) {
            self.timers.cancel(handle);
        }
    }
}

fn fire<T, H>(slot: &Weak<RefCell<Slot<T, H>>>, callback: &Weak<RefCell<dyn FnMut(T)>>) {
    let (Some(slot), Some(callback)) = (slot.upgrade(), callback.upgrade()) else {
        return;
    };
    let value = {
        let mut slot = slot.borrow_mut();
        if slot.detached {
            return;
        }
        slot.state = DebounceState::Idle;
        slot.latest.take()
    };
    if let Some(value) = value {
        (callback.borrow_mut())(value);
    }
}
