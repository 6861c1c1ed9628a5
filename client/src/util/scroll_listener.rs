//! Debounced page-scroll observation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Raw `scroll` events arrive far more often than the UI needs them. The
//! listener forwards each sample into a [`Debouncer`] so consumers see one
//! [`ScrollState`] after motion settles. `use_window_scroll` wires this to the
//! browser window and tears it down with the owning component.

#[cfg(test)]
#[path = "scroll_listener_test.rs"]
mod scroll_listener_test;

use std::time::Duration;

use crate::state::scroll::ScrollState;
use crate::util::debounce::{Debouncer, TimerHost};

/// Quiet period before a scroll callback runs.
pub const DEFAULT_SCROLL_INTERVAL: Duration = Duration::from_millis(100);

/// A detachable, debounced scroll subscription.
pub struct ScrollListener<H: TimerHost> {
    debouncer: Debouncer<ScrollState, H>,
}

impl<H> ScrollListener<H>
where
    H: TimerHost,
    H::Handle: 'static,
{
    /// Subscribe `callback` to debounced scroll samples.
    pub fn on_scroll(timers: H, interval: Duration, callback: impl FnMut(ScrollState) + 'static) -> Self {
        Self { debouncer: Debouncer::new(timers, interval, callback) }
    }

    /// Subscribe and immediately report `initial`, the position at attach
    /// time (a reload can restore the page mid-scroll).
    pub fn seeded(
        timers: H,
        interval: Duration,
        initial: Option<ScrollState>,
        mut callback: impl FnMut(ScrollState) + 'static,
    ) -> Self {
        if let Some(state) = initial {
            callback(state);
        }
        Self::on_scroll(timers, interval, callback)
    }

    /// Feed one raw scroll notification.
    pub fn notify(&self, sample: ScrollState) {
        self.debouncer.trigger(sample);
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        !self.debouncer.is_detached()
    }

    /// Stop listening. A pending callback is cancelled, not merely ignored.
    pub fn detach(&self) {
        self.debouncer.detach();
    }
}

/// Read the window's current scroll metrics.
#[cfg(feature = "hydrate")]
pub fn read_window_scroll() -> Option<ScrollState> {
    let window = web_sys::window()?;
    let offset = window.scroll_y().ok()?;
    let viewport = window.inner_height().ok()?.as_f64()?;
    let document_height = window.document()?.document_element()?.scroll_height();
    Some(ScrollState::from_metrics(offset, f64::from(document_height), viewport))
}

/// Attach a debounced window scroll listener for the current reactive owner.
///
/// `callback` first receives the position at attach time, then debounced
/// samples.
///
/// The DOM listener is removed and any pending callback cancelled when the
/// owner is cleaned up.
#[cfg(feature = "hydrate")]
pub fn use_window_scroll(interval: Duration, callback: impl FnMut(ScrollState) + 'static) {
    use leptos::prelude::*;

    use crate::util::debounce::BrowserTimers;

    let listener =
        StoredValue::new_local(ScrollListener::seeded(BrowserTimers, interval, read_window_scroll(), callback));
    let handle = window_event_listener(leptos::ev::scroll, move |_| {
        if let Some(sample) = read_window_scroll() {
            let _ = listener.try_with_value(|l| l.notify(sample));
        }
    });

    on_cleanup(move || {
        handle.remove();
        let _ = listener.try_with_value(ScrollListener::detach);
        listener.dispose();
    });
}
