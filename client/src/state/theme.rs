//! Reactive wrapper around the preference store, provided via context.
//!
//! DESIGN
//! ======
//! The store itself is plain Rust and not reactive. `ThemeContext` pairs it
//! with an `RwSignal` mirror so components re-render on change while every
//! mutation still goes through the store (and therefore through storage and
//! the document root).

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use leptos::prelude::*;

use crate::state::preference::ColorSchemePreference;
use crate::util::dark_mode::{BrowserPreferenceStore, browser_store};

#[derive(Clone, Copy)]
pub struct ThemeContext {
    scheme: RwSignal<ColorSchemePreference>,
    store: StoredValue<BrowserPreferenceStore>,
}

impl ThemeContext {
    pub fn new(store: BrowserPreferenceStore) -> Self {
        let scheme = RwSignal::new(store.get());
        Self { scheme, store: StoredValue::new(store) }
    }

    /// Context backed by `localStorage` and the document root.
    pub fn browser() -> Self {
        Self::new(browser_store())
    }

    /// Resolve the preference. Safe to call more than once.
    pub fn initialize(&self) {
        if let Some(resolved) = self.store.try_update_value(|store| store.initialize()) {
            self.scheme.set(resolved);
        }
    }

    /// Current preference (tracked).
    pub fn get(&self) -> ColorSchemePreference {
        self.scheme.get()
    }

    /// Whether the preference has been resolved (tracked).
    pub fn is_ready(&self) -> bool {
        self.scheme.with(|s| s.is_resolved())
    }

    pub fn is_dark(&self) -> bool {
        self.scheme.with(|s| s.is_dark())
    }

    pub fn set(&self, value: ColorSchemePreference) {
        if let Some(current) = self.store.try_update_value(|store| {
            store.set(value);
            store.get()
        }) {
            self.scheme.set(current);
        }
    }

    pub fn toggle(&self) {
        if let Some(next) = self.store.try_update_value(|store| store.toggle()) {
            self.scheme.set(next);
        }
    }
}
