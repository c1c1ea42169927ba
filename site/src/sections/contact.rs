use leptos::prelude::*;

use crate::components::{ContactForm, Icon, Section, ICON_ENVELOPE, ICON_PHONE};
use crate::content::CONTACT;

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <Section id="contact" eyebrow="Let's Talk" title="Get a Quote or Book a Call">
            <div class="grid grid-2 contact-grid">
                <div class="card contact-details">
                    <a href=CONTACT.mailto() class="contact-line">
                        <Icon path=ICON_ENVELOPE />
                        <span>{CONTACT.email}</span>
                    </a>
                    <a href=CONTACT.tel() class="contact-line">
                        <Icon path=ICON_PHONE />
                        <span>{CONTACT.phone}</span>
                    </a>
                    <p class="contact-note">
                        "Prefer a live walkthrough? Ask for a quick screenshare demo. I can also "
                        "prepare a free 1‑garment sample in Basic tier for qualified brands."
                    </p>
                </div>
                <ContactForm />
            </div>
        </Section>
    }
}
