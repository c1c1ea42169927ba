use leptos::prelude::*;

use crate::components::{
    Badge, Icon, Stat, WavyCloth, ICON_CUBE, ICON_RULER, ICON_SCISSORS,
};
use crate::content::HERO_STATS;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <div class="container">
                <div class="hero-grid">
                    <div class="hero-content">
                        <h1 class="hero-title">
                            "Photoreal 3D Clothing for "
                            <span class="hero-title-accent">"Forward‑Thinking Brands"</span>
                        </h1>
                        <p class="hero-description">
                            "Reduce sampling costs, preview collections before production, "
                            "and wow customers with interactive product viewers."
                        </p>
                        <div class="badge-row hero-badges">
                            <Badge>
                                <Icon path=ICON_SCISSORS size="16" />
                                "Prototyping Savings"
                            </Badge>
                            <Badge>
                                <Icon path=ICON_RULER size="16" />
                                "True-to-Fabric Details"
                            </Badge>
                            <Badge>
                                <Icon path=ICON_CUBE size="16" />
                                "Interactive 3D"
                            </Badge>
                        </div>
                        <div class="hero-actions">
                            <a href="#work" class="btn btn-primary">"See Work"</a>
                            <a href="#contact" class="btn btn-secondary">"Get a Quote"</a>
                        </div>
                        <div class="stat-grid hero-stats">
                            {HERO_STATS
                                .iter()
                                .map(|stat| view! { <Stat value=stat.value label=stat.label /> })
                                .collect_view()}
                        </div>
                    </div>
                    <ViewerPanel />
                </div>
            </div>
        </section>
    }
}

/// Framed 3D canvas with its usage caption.
#[component]
pub fn ViewerPanel() -> impl IntoView {
    view! {
        <div class="viewer-panel">
            <div class="viewer-frame">
                <WavyCloth />
                <div class="viewer-caption">
                    <span>"Interactive viewer demo"</span>
                    <span>"Drag to orbit • Scroll to zoom"</span>
                </div>
            </div>
        </div>
    }
}
