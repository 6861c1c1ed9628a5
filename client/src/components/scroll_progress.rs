//! Scroll-progress bar pinned to the top of the viewport.
//!
//! Reads the debounced `ScrollState` from context; the bar stays invisible
//! until the first percent of progress.

use leptos::prelude::*;

use crate::state::scroll::ScrollState;

#[component]
pub fn ScrollProgressBar() -> impl IntoView {
    let scroll = expect_context::<RwSignal<ScrollState>>();

    let style = move || {
        scroll.with(|s| format!("transform:scaleX({:.4});opacity:{:.3}", s.indicator_scale(), s.indicator_opacity()))
    };

    view! { <div class="scroll-progress" style=style role="presentation"></div> }
}
