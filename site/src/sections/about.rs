use leptos::prelude::*;

use crate::components::{Icon, Section, Stat, ICON_CHECK_CIRCLE};
use crate::content::{ABOUT_STATS, SKILLS};

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <Section id="about" eyebrow="About" title="Why Work With Me">
            <div class="grid grid-2 about-grid">
                <div class="card">
                    <h3 class="card-title">"Focused on Fashion"</h3>
                    <p class="card-text">
                        "I specialize in digital garments—delivering clean topology, accurate fabric "
                        "behavior, and lighting that flatters real materials. My goal is to help you "
                        "reduce sampling costs and sell the vision earlier."
                    </p>
                    <ul class="skill-list">
                        {SKILLS
                            .iter()
                            .map(|skill| {
                                view! {
                                    <li class="skill">
                                        <Icon path=ICON_CHECK_CIRCLE size="16" class="icon check" />
                                        {*skill}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
                <div class="card">
                    <h3 class="card-title">"Results That Matter"</h3>
                    <p class="card-text">
                        "Clients use my renders for e‑commerce images, lookbooks, and investor decks. "
                        "Interactive models increase time-on-page and help customers explore details "
                        "that photos miss."
                    </p>
                    <div class="stat-grid about-stats">
                        {ABOUT_STATS
                            .iter()
                            .map(|stat| view! { <Stat value=stat.value label=stat.label /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </Section>
    }
}
