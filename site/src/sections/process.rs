use leptos::prelude::*;

use crate::components::Section;
use crate::content::PROCESS;

#[component]
pub fn ProcessSection() -> impl IntoView {
    view! {
        <Section id="process" eyebrow="How It Works" title="A Simple, Transparent Process">
            <ol class="grid grid-4 process-list">
                {PROCESS
                    .iter()
                    .map(|step| {
                        let label = format!("Step {}", step.step);
                        view! {
                            <li class="card process-step">
                                <div class="process-step-number">{label}</div>
                                <div class="process-step-title">{step.title}</div>
                                <p class="process-step-desc">{step.desc}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </Section>
    }
}
