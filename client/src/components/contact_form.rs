//! Contact section with a locally validated form.
//!
//! The draft is mirrored into `localStorage` on every edit so a reload keeps
//! what the visitor typed; a successful submit clears it.

use leptos::prelude::*;

use crate::state::contact::{ContactDraft, ContactField, ContactState, DraftSync};
use crate::state::navigator::SectionId;
use crate::util::section_scroll::use_section;
use crate::util::ui_persistence::{CONTACT_DRAFT_KEY, load_json, remove, save_json};

#[component]
pub fn ContactSection() -> impl IntoView {
    let section = use_section(SectionId::Contact);
    let state = RwSignal::new(ContactState::default());

    Effect::new(move |_| {
        if let Some(draft) = load_json::<ContactDraft>(CONTACT_DRAFT_KEY) {
            state.set(ContactState::restored(draft));
        }
    });

    let sync = move || {
        state.with_untracked(|s| match s.draft_sync() {
            DraftSync::Save(draft) => save_json(CONTACT_DRAFT_KEY, draft),
            DraftSync::Clear => remove(CONTACT_DRAFT_KEY),
        });
    };

    let edit = move |field: ContactField, value: String| {
        state.update(|s| s.edit(field, value));
        sync();
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        state.update(|s| {
            s.submit();
        });
        sync();
    };

    let error_for = move |field: ContactField| {
        move || state.with(|s| s.error_for(field).map(ToString::to_string))
    };

    view! {
        <section id=SectionId::Contact.anchor() node_ref=section class="page-section fade-in">
            <h2 class="page-section__title gradient-text">"Get in Touch"</h2>
            <form class="glass-card contact-form" on:submit=on_submit novalidate=true>
                <div class="contact-form__row">
                    <div class="contact-form__field">
                        <label for="name">"Name"</label>
                        <input
                            id="name"
                            name="name"
                            class="input"
                            placeholder="Your name"
                            prop:value=move || state.with(|s| s.draft.name.clone())
                            on:input=move |ev| edit(ContactField::Name, event_target_value(&ev))
                        />
                        <p class="contact-form__error">{error_for(ContactField::Name)}</p>
                    </div>
                    <div class="contact-form__field">
                        <label for="email">"Email"</label>
                        <input
                            id="email"
                            name="email"
                            type="email"
                            class="input"
                            placeholder="Your email"
                            prop:value=move || state.with(|s| s.draft.email.clone())
                            on:input=move |ev| edit(ContactField::Email, event_target_value(&ev))
                        />
                        <p class="contact-form__error">{error_for(ContactField::Email)}</p>
                    </div>
                </div>
                <div class="contact-form__field">
                    <label for="message">"Message"</label>
                    <textarea
                        id="message"
                        name="message"
                        class="input"
                        placeholder="Your message"
                        prop:value=move || state.with(|s| s.draft.message.clone())
                        on:input=move |ev| edit(ContactField::Message, event_target_value(&ev))
                    ></textarea>
                    <p class="contact-form__error">{error_for(ContactField::Message)}</p>
                </div>
                <button type="submit" class="btn btn--primary btn--block">
                    "Send Message"
                </button>
                <Show when=move || state.with(|s| s.sent)>
                    <p class="contact-form__sent">"Thanks! I'll be in touch soon."</p>
                </Show>
            </form>
        </section>
    }
}
