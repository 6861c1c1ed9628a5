//! Single-page portfolio: hero plus the four navigable sections.

use leptos::prelude::*;

use crate::components::backgrounds::{GradientBackground, ParticleBackground};
use crate::components::contact_form::ContactSection;
use crate::components::scroll_progress::ScrollProgressBar;
use crate::components::sections::{AboutSection, Hero, ProjectsSection, SkillsSection};
use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;
use crate::state::theme::ThemeContext;
use crate::util::section_scroll::{NavigatorContext, scroll_to_location_hash};

#[component]
pub fn HomePage() -> impl IntoView {
    let theme = expect_context::<ThemeContext>();
    let nav = expect_context::<NavigatorContext>();

    // Honor `/#section` deep links once the sections exist.
    Effect::new(move |scrolled: Option<bool>| {
        if scrolled == Some(true) {
            return true;
        }
        if !theme.is_ready() {
            return false;
        }
        scroll_to_location_hash(nav);
        true
    });

    view! {
        <Show when=move || theme.is_ready() fallback=|| view! { <div class="page-loading" aria-busy="true"></div> }>
            <GradientBackground/>
            <div class="page">
                <SiteHeader/>
                <main class="container">
                    <Hero/>
                    <AboutSection/>
                    <SkillsSection/>
                    <ProjectsSection/>
                    <ContactSection/>
                </main>
                <SiteFooter/>
            </div>
            <ScrollProgressBar/>
            <ParticleBackground/>
        </Show>
    }
}
