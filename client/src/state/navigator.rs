//! Section anchors and smooth-scroll navigation.
//!
//! The navigator is generic over the target type so page code registers
//! Leptos `NodeRef`s while tests register plain fakes.

#[cfg(test)]
#[path = "navigator_test.rs"]
mod navigator_test;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Named, scrollable regions of the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    About,
    Skills,
    Projects,
    Contact,
}

impl SectionId {
    /// Header navigation order.
    pub const ALL: [SectionId; 4] = [Self::About, Self::Skills, Self::Projects, Self::Contact];

    /// Lowercase anchor identifier, also used as the DOM `id`.
    #[must_use]
    pub fn anchor(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    /// Navigation button label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section anchor: {0}")]
pub struct UnknownSection(pub String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let anchor = s.trim().trim_start_matches('#');
        Self::ALL
            .into_iter()
            .find(|id| id.anchor().eq_ignore_ascii_case(anchor))
            .ok_or_else(|| UnknownSection(s.to_owned()))
    }
}

/// A live region that can be brought into view.
pub trait ScrollTarget {
    /// Whether the region currently exists in the document.
    fn is_mounted(&self) -> bool;

    /// Smooth-scroll the region into view.
    fn scroll_into_view(&self);
}

/// Maps anchors to their registered targets.
pub struct SectionNavigator<T> {
    targets: HashMap<SectionId, T>,
}

impl<T> Default for SectionNavigator<T> {
    fn default() -> Self {
        Self { targets: HashMap::new() }
    }
}

impl<T: ScrollTarget> SectionNavigator<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate `id` with `target`, replacing any earlier registration.
    pub fn register(&mut self, id: SectionId, target: T) {
        self.targets.insert(id, target);
    }

    pub fn unregister(&mut self, id: SectionId) {
        self.targets.remove(&id);
    }

    #[must_use]
    pub fn is_registered(&self, id: SectionId) -> bool {
        self.targets.contains_key(&id)
    }

    /// Scroll to `id` if it is registered and mounted.
    ///
    /// Returns whether a scroll was started. Missing targets are expected
    /// during initial load and are not an error.
    pub fn scroll_to(&self, id: SectionId) -> bool {
        match self.targets.get(&id) {
            Some(target) if target.is_mounted() => {
                target.scroll_into_view();
                true
            }
            _ => {
                log::debug!("scroll to {id} skipped: target not available");
                false
            }
        }
    }

    /// String entry point for anchors such as `"projects"` or `"#projects"`.
    pub fn scroll_to_anchor(&self, anchor: &str) -> bool {
        anchor.parse().is_ok_and(|id| self.scroll_to(id))
    }
}
