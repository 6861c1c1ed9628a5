//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod dark_mode;
pub mod debounce;
#[cfg(test)]
pub(crate) mod manual_timers;
pub mod particles;
pub mod scroll_listener;
pub mod section_scroll;
pub mod ui_persistence;
pub mod worker;
