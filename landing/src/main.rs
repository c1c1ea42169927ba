// Haresh Perera 3D Fashion - browser build
//
// Mounts the portfolio client-side so the contact form and the WebGL cloth
// preview are live. Served by trunk from index.html.

mod console;

use atelier_site::styles::SITE_CSS;
use atelier_site::PortfolioSite;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    // no clock on wasm32-unknown-unknown, hence without_time
    tracing_subscriber::fmt()
        .with_writer(console::ConsoleMakeWriter)
        .with_ansi(false)
        .without_time()
        .with_max_level(tracing::Level::INFO)
        .init();

    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    // Pricing buttons jump to the contact form until a checkout exists.
    let on_tier_select = Callback::new(|tier: &'static str| {
        tracing::info!(tier, "pricing tier selected");
        if let Err(err) = window().location().set_hash("contact") {
            tracing::warn!(?err, "could not scroll to contact");
        }
    });

    view! {
        <style>{SITE_CSS}</style>
        <PortfolioSite on_tier_select=on_tier_select />
    }
}
