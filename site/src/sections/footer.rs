use leptos::prelude::*;

use crate::content::{CONTACT, FOOTER_LINKS};

/// Footer with copyright line and anchor links.
///
/// `year` is computed by the caller at render time.
#[component]
pub fn SiteFooter(year: i32) -> impl IntoView {
    let copyright = format!("© {year} {}. All rights reserved.", CONTACT.owner);
    view! {
        <footer class="site-footer">
            <div class="container footer-inner">
                <p class="footer-copyright">{copyright}</p>
                <div class="footer-links">
                    {FOOTER_LINKS
                        .iter()
                        .map(|link| view! { <a href=link.href() class="footer-link">{link.label}</a> })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}
