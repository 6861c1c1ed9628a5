//! Sticky header with brand, section navigation, and the theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Navigation buttons go through the shared `NavigatorContext`, so clicks
//! before a section mounts are silently dropped. On routes other than the
//! portfolio page the buttons link back to the matching anchor instead.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::content::SITE_NAME;
use crate::state::navigator::SectionId;
use crate::state::theme::ThemeContext;
use crate::util::section_scroll::NavigatorContext;

#[component]
pub fn SiteHeader() -> impl IntoView {
    let theme = expect_context::<ThemeContext>();
    let nav = expect_context::<NavigatorContext>();
    let location = use_location();
    let on_home = move || location.pathname.get() == "/";

    view! {
        <header class="site-header">
            <div class="site-header__inner">
                <a class="site-header__brand" href="/">
                    <span class="icon icon--zap" aria-hidden="true"></span>
                    <span class="gradient-text">{SITE_NAME}</span>
                </a>
                <nav class="site-header__nav">
                    {SectionId::ALL
                        .into_iter()
                        .map(|id| {
                            view! {
                                <Show
                                    when=on_home
                                    fallback=move || {
                                        view! {
                                            <a class="btn btn--ghost" href=format!("/#{}", id.anchor())>
                                                {id.label()}
                                            </a>
                                        }
                                    }
                                >
                                    <button class="btn btn--ghost" on:click=move |_| {
                                        nav.scroll_to(id);
                                    }>{id.label()}</button>
                                </Show>
                            }
                        })
                        .collect_view()}
                    <button
                        class="btn btn--ghost site-header__theme-toggle"
                        on:click=move |_| theme.toggle()
                        title="Toggle dark mode"
                    >
                        {move || if theme.is_dark() { "☀" } else { "☾" }}
                        <span class="sr-only">
                            {move || if theme.is_dark() { "Light mode" } else { "Dark mode" }}
                        </span>
                    </button>
                </nav>
            </div>
        </header>
    }
}
