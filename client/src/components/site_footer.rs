//! Footer with copyright and social links.

use leptos::prelude::*;

use crate::content::{COPYRIGHT, SOCIAL_LINKS};

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__inner">
                <p class="site-footer__copyright">{COPYRIGHT}</p>
                <div class="site-footer__links">
                    {SOCIAL_LINKS
                        .into_iter()
                        .map(|link| {
                            let external = link.href.starts_with("http");
                            view! {
                                <a
                                    href=link.href
                                    target=external.then_some("_blank")
                                    rel=external.then_some("noopener noreferrer")
                                    class="site-footer__link"
                                >
                                    <span class=format!("icon icon--{}", link.icon) aria-hidden="true"></span>
                                    <span class="sr-only">{link.label}</span>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}
