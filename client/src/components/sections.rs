//! Static portfolio sections.
//!
//! Every section binds its `<section>` element to the navigator through
//! `use_section`, which also releases the registration on unmount.

use leptos::prelude::*;

use crate::content::{ABOUT, HERO_TAGLINE, PROJECTS, SITE_NAME, SKILLS};
use crate::state::navigator::SectionId;
use crate::util::section_scroll::{NavigatorContext, use_section};

#[component]
pub fn Hero() -> impl IntoView {
    let nav = expect_context::<NavigatorContext>();

    view! {
        <section class="hero fade-in">
            <div class="hero__inner">
                <h1 class="hero__title gradient-text">
                    "Welcome to " <span class="hero__brand">{SITE_NAME}</span>
                </h1>
                <p class="hero__tagline">{HERO_TAGLINE}</p>
                <div class="hero__actions">
                    <a href="/projects" class="btn btn--primary">
                        "View Projects"
                    </a>
                    <button class="btn btn--outline" on:click=move |_| {
                        nav.scroll_to(SectionId::Contact);
                    }>"Contact Me"</button>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn AboutSection() -> impl IntoView {
    let section = use_section(SectionId::About);

    view! {
        <section id=SectionId::About.anchor() node_ref=section class="page-section fade-in">
            <h2 class="page-section__title gradient-text">"About Me"</h2>
            <p class="glass-card about__body">{ABOUT}</p>
        </section>
    }
}

#[component]
pub fn SkillsSection() -> impl IntoView {
    let section = use_section(SectionId::Skills);

    view! {
        <section id=SectionId::Skills.anchor() node_ref=section class="page-section fade-in">
            <h2 class="page-section__title gradient-text">"Skills & Technologies"</h2>
            <div class="skills-grid stagger">
                {SKILLS
                    .into_iter()
                    .map(|skill| {
                        view! {
                            <div class="glass-card skill-card">
                                <span class="icon icon--code" aria-hidden="true"></span>
                                <p class="skill-card__name">{skill}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

/// Project cards, shared by the home page and `/projects`.
#[component]
pub fn ProjectGrid() -> impl IntoView {
    view! {
        <div class="projects-grid stagger">
            {PROJECTS
                .into_iter()
                .map(|project| {
                    view! {
                        <article class="glass-card project-card">
                            <h3 class="project-card__title">{project.title}</h3>
                            <p class="project-card__description">{project.description}</p>
                            <div class="project-card__footer">
                                <button class="btn btn--outline">"View Project"</button>
                            </div>
                        </article>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let section = use_section(SectionId::Projects);

    view! {
        <section id=SectionId::Projects.anchor() node_ref=section class="page-section fade-in">
            <h2 class="page-section__title gradient-text">"Featured Projects"</h2>
            <ProjectGrid/>
        </section>
    }
}
