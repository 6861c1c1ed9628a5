//! Decorative page backgrounds: a fixed gradient wash and the particle field.

use leptos::prelude::*;

use crate::util::particles;

#[component]
pub fn GradientBackground() -> impl IntoView {
    view! {
        <div class="gradient-background" aria-hidden="true">
            <div class="gradient-background__wash"></div>
        </div>
    }
}

/// CSS-animated particles. Layout is deterministic so SSR and hydration match.
#[component]
pub fn ParticleBackground() -> impl IntoView {
    view! {
        <div class="particle-field" aria-hidden="true">
            {particles::layout()
                .into_iter()
                .map(|p| view! { <span class="particle" style=p.style()></span> })
                .collect_view()}
        </div>
    }
}
