//! Contact form - client-side only
//!
//! Holds the field values and the [`SubmissionStatus`]. Submitting never
//! leaves the page: the request goes to [`LocalCapture`], the placeholder
//! lead sink, and the confirmation line appears.
//!
//! The controls start out inside a disabled `<fieldset>` and only become
//! usable once an effect has run, i.e. in the browser app. The static export
//! never runs effects, so its form cannot be submitted, and the fields carry
//! no `name` attributes that a native submit could put into a URL.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use super::{Icon, ICON_ARROW_RIGHT};
use crate::content::CONTACT;
use crate::leads::{submit, LocalCapture};
use crate::types::{ContactRequest, SubmissionStatus};

/// Confirmation shown once the status is `Sent`.
pub const CONFIRMATION: &str = "Thanks! Your message was captured locally for demo purposes.";

/// Shown instead of a working form when no client runtime is present.
pub const OFFLINE_NOTE: &str = "The form needs JavaScript. You can also write to ";

#[component]
pub fn ContactForm(
    /// Submission status; a fresh `Idle` signal when omitted
    #[prop(optional)]
    status: Option<RwSignal<SubmissionStatus>>,
) -> impl IntoView {
    let status = status.unwrap_or_else(|| RwSignal::new(SubmissionStatus::default()));
    let live = RwSignal::new(false);
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (company, set_company) = signal(String::new());
    let (project, set_project) = signal(String::new());

    Effect::new(move |_| live.set(true));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let request = ContactRequest::from_fields(
            name.get_untracked(),
            email.get_untracked(),
            company.get_untracked(),
            project.get_untracked(),
        );
        status.update(|status| *status = submit(*status, &request, &LocalCapture));
    };

    view! {
        <form class="card contact-form" on:submit=on_submit>
            <fieldset class="form-fields" disabled=move || !live.get()>
                <div class="form-row">
                    <input
                        class="field"
                        placeholder="Your name"
                        aria-label="Your name"
                        required=true
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                        prop:value=name
                    />
                    <input
                        class="field"
                        type="email"
                        placeholder="Email"
                        aria-label="Email"
                        required=true
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        prop:value=email
                    />
                </div>
                <input
                    class="field field-wide"
                    placeholder="Brand / Company (optional)"
                    aria-label="Brand or company"
                    on:input=move |ev| set_company.set(event_target_value(&ev))
                    prop:value=company
                />
                <textarea
                    class="field field-wide field-tall"
                    placeholder="Tell me about your project…"
                    aria-label="Project"
                    required=true
                    on:input=move |ev| set_project.set(event_target_value(&ev))
                    prop:value=project
                ></textarea>
                <button class="btn btn-primary form-submit" type="submit">
                    <Icon path=ICON_ARROW_RIGHT size="16" />
                    "Request a quote"
                </button>
            </fieldset>
            <Show when=move || !live.get()>
                <p class="form-note">
                    {OFFLINE_NOTE}
                    <a href=CONTACT.mailto()>{CONTACT.email}</a>
                </p>
            </Show>
            <Show when=move || status.get().is_sent()>
                <p class="form-confirmation" role="status">{CONFIRMATION}</p>
            </Show>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    fn render_with(status: SubmissionStatus) -> String {
        let owner = Owner::new();
        owner.with(|| {
            let status = RwSignal::new(status);
            view! { <ContactForm status=status /> }.to_html()
        })
    }

    #[test]
    fn starts_without_confirmation() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <ContactForm /> }.to_html());
        assert!(!html.contains(CONFIRMATION));
        assert!(html.contains("Request a quote"));
    }

    #[test]
    fn confirmation_follows_status() {
        assert_eq!(render_with(SubmissionStatus::Idle).matches(CONFIRMATION).count(), 0);
        assert_eq!(render_with(SubmissionStatus::Sent).matches(CONFIRMATION).count(), 1);
    }

    #[test]
    fn accepted_submit_shows_confirmation() {
        let owner = Owner::new();
        let html = owner.with(|| {
            let status = RwSignal::new(SubmissionStatus::Idle);
            let request = ContactRequest::from_fields(
                "Mina".into(),
                "mina@label.example".into(),
                String::new(),
                "Capsule collection renders".into(),
            );
            status.update(|s| *s = submit(*s, &request, &LocalCapture));
            view! { <ContactForm status=status /> }.to_html()
        });
        assert_eq!(html.matches(CONFIRMATION).count(), 1);
    }

    #[test]
    fn required_fields_are_marked() {
        let html = render_with(SubmissionStatus::Idle);
        // name, email and project; company stays optional
        assert_eq!(html.matches("required").count(), 3);
        assert!(html.contains(r#"type="email""#));
        assert!(html.contains("Brand / Company (optional)"));
    }

    #[test]
    fn server_render_is_inert() {
        let html = render_with(SubmissionStatus::Idle);

        // nothing a native submit could serialize into a URL
        assert!(!html.contains(" name="));
        assert!(!html.contains(" action="));

        let open = html.find("<fieldset").unwrap();
        let tag_end = open + html[open..].find('>').unwrap();
        assert!(html[open..tag_end].contains("disabled"));

        let button = html.find(r#"type="submit""#).unwrap();
        let close = html.find("</fieldset>").unwrap();
        assert!(open < button && button < close);

        assert!(html.contains(OFFLINE_NOTE));
        assert!(html.contains("mailto:hello@hareshperera.com"));
    }
}
