//! Standalone projects listing.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::backgrounds::GradientBackground;
use crate::components::sections::ProjectGrid;
use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;
use crate::content::SITE_NAME;
use crate::state::theme::ThemeContext;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let theme = expect_context::<ThemeContext>();

    view! {
        <Title text=format!("Projects - {SITE_NAME}")/>
        <Show when=move || theme.is_ready() fallback=|| view! { <div class="page-loading" aria-busy="true"></div> }>
            <GradientBackground/>
            <div class="page">
                <SiteHeader/>
                <main class="container">
                    <section class="page-section fade-in">
                        <h1 class="page-section__title gradient-text">"Projects"</h1>
                        <ProjectGrid/>
                    </section>
                </main>
                <SiteFooter/>
            </div>
        </Show>
    }
}
