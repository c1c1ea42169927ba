use leptos::prelude::*;

use crate::components::{Icon, Section, WorkCard, ICON_ARROW_RIGHT};
use crate::content::PORTFOLIO;

#[component]
pub fn WorkSection() -> impl IntoView {
    view! {
        <Section id="work" eyebrow="Selected Work" title="Portfolio">
            <div class="grid grid-3">
                {PORTFOLIO.iter().map(|item| view! { <WorkCard item=*item /> }).collect_view()}
            </div>
            <div class="section-cta">
                <a href="#contact" class="btn btn-primary">
                    "Request a custom sample"
                    <Icon path=ICON_ARROW_RIGHT size="16" />
                </a>
            </div>
        </Section>
    }
}
