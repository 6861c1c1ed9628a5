//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::content::{SITE_DESCRIPTION, SITE_TITLE};
use crate::pages::{home::HomePage, projects::ProjectsPage};
use crate::state::scroll::ScrollState;
use crate::state::theme::ThemeContext;
use crate::util::section_scroll::NavigatorContext;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class="antialiased">
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the theme, navigator and scroll contexts and resolves the color
/// scheme on the first client-side pass.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = ThemeContext::browser();
    let scroll = RwSignal::new(ScrollState::default());

    provide_context(theme);
    provide_context(NavigatorContext::new());
    provide_context(scroll);

    // Effects only run in the browser, so the server always renders the
    // unresolved (loading) state.
    Effect::new(move |_| {
        theme.initialize();
    });

    #[cfg(feature = "hydrate")]
    crate::util::scroll_listener::use_window_scroll(
        crate::util::scroll_listener::DEFAULT_SCROLL_INTERVAL,
        move |state| scroll.set(state),
    );

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text=SITE_TITLE/>
        <Meta name="description" content=SITE_DESCRIPTION/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("projects") view=ProjectsPage/>
            </Routes>
        </Router>
    }
}
