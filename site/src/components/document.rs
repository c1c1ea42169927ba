//! Root document component - the complete HTML page of the static export

use leptos::prelude::*;

use crate::app::PortfolioSite;
use crate::content::CONTACT;
use crate::styles::SITE_CSS;

const DESCRIPTION: &str = "Photoreal 3D clothing renders, interactive GLB/USDZ viewers and \
     lookbook CGI for fashion brands.";

/// `<html>` shell around [`PortfolioSite`], with the stylesheet inlined so
/// the exported file works on its own.
#[component]
pub fn SiteDocument(
    /// Footer copyright year
    year: i32,
) -> impl IntoView {
    let title = format!("{} • {}", CONTACT.owner, CONTACT.brand);
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=DESCRIPTION />
                <title>{title}</title>
                <style>{SITE_CSS}</style>
            </head>
            <body>
                <PortfolioSite year=year />
            </body>
        </html>
    }
}
