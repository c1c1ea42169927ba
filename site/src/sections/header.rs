use leptos::prelude::*;

use crate::content::{CONTACT, HEADER_LINKS};

#[component]
pub fn SiteHeader() -> impl IntoView {
    let brand = format!("{} • {}", CONTACT.owner, CONTACT.brand);
    view! {
        <header class="site-header">
            <div class="container header-inner">
                <a href="#home" class="header-brand">{brand}</a>
                <nav class="header-nav">
                    {HEADER_LINKS
                        .iter()
                        .map(|link| view! { <a href=link.href() class="nav-link">{link.label}</a> })
                        .collect_view()}
                    <a href="#contact" class="btn btn-primary btn-small">"Get a quote"</a>
                </nav>
            </div>
        </header>
    }
}
