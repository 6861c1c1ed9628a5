//! Derived page scroll position.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Progress at which the indicator reaches full opacity.
const INDICATOR_FADE_END: f64 = 0.01;

/// Snapshot of the page scroll position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    /// Vertical offset in CSS pixels.
    pub offset: f64,
    /// Normalized progress through the scrollable range, in `[0, 1]`.
    pub progress: f64,
}

impl ScrollState {
    /// Build from raw document metrics.
    ///
    /// A document that fits the viewport has zero progress.
    #[must_use]
    pub fn from_metrics(offset: f64, document_height: f64, viewport_height: f64) -> Self {
        let offset = offset.max(0.0);
        let range = document_height - viewport_height;
        let progress = if range > 0.0 { (offset / range).clamp(0.0, 1.0) } else { 0.0 };
        Self { offset, progress }
    }

    /// Horizontal scale for the progress bar.
    #[must_use]
    pub fn indicator_scale(&self) -> f64 {
        self.progress
    }

    /// Bar opacity: fades in over the first percent of progress.
    #[must_use]
    pub fn indicator_opacity(&self) -> f64 {
        (self.progress / INDICATOR_FADE_END).clamp(0.0, 1.0)
    }
}
