//! Section navigation bound to Leptos node refs.
//!
//! `SectionRef` is the `NodeRef` each page section binds to; the navigator
//! smooth-scrolls it via `Element::scrollIntoView`.

#[cfg(test)]
#[path = "section_scroll_test.rs"]
mod section_scroll_test;

use leptos::html;
use leptos::prelude::*;

use crate::state::navigator::{ScrollTarget, SectionId, SectionNavigator};

pub type SectionRef = NodeRef<html::Section>;

impl ScrollTarget for SectionRef {
    fn is_mounted(&self) -> bool {
        self.get_untracked().is_some()
    }

    fn scroll_into_view(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = self.get_untracked() {
                let options = web_sys::ScrollIntoViewOptions::new();
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                el.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }
    }
}

/// Navigator shared through context.
#[derive(Clone, Copy)]
pub struct NavigatorContext {
    inner: StoredValue<SectionNavigator<SectionRef>>,
}

impl Default for NavigatorContext {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigatorContext {
    pub fn new() -> Self {
        Self { inner: StoredValue::new(SectionNavigator::new()) }
    }

    pub fn register(&self, id: SectionId, section: SectionRef) {
        let _ = self.inner.try_update_value(|nav| nav.register(id, section));
    }

    pub fn unregister(&self, id: SectionId) {
        let _ = self.inner.try_update_value(|nav| nav.unregister(id));
    }

    /// Smooth-scroll to `id`; silently ignored when the section is absent.
    pub fn scroll_to(&self, id: SectionId) -> bool {
        self.inner.try_with_value(|nav| nav.scroll_to(id)).unwrap_or(false)
    }

    pub fn scroll_to_anchor(&self, anchor: &str) -> bool {
        self.inner.try_with_value(|nav| nav.scroll_to_anchor(anchor)).unwrap_or(false)
    }
}

/// Create a section ref registered under `id` for the current owner's
/// lifetime.
pub fn use_section(id: SectionId) -> SectionRef {
    let section = SectionRef::new();
    if let Some(nav) = use_context::<NavigatorContext>() {
        nav.register(id, section);
        on_cleanup(move || nav.unregister(id));
    }
    section
}

/// Scroll to the section named by `window.location.hash`, if any.
pub fn scroll_to_location_hash(nav: NavigatorContext) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        !hash.is_empty() && nav.scroll_to_anchor(&hash)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = nav;
        false
    }
}
