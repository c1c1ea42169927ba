use leptos::prelude::*;

use crate::components::{PricingCard, Section};
use crate::content::PRICING;

/// Pricing grid. `on_select` is handed to every card's call-to-action.
#[component]
pub fn ServicesSection(on_select: Option<Callback<&'static str>>) -> impl IntoView {
    view! {
        <Section id="services" eyebrow="Offerings" title="Services & Packages">
            <div class="grid grid-3">
                {PRICING
                    .iter()
                    .map(|tier| view! { <PricingCard tier=*tier on_select=on_select.clone() /> })
                    .collect_view()}
            </div>
        </Section>
    }
}
