//! # atelier-site
//!
//! Single-page portfolio for a freelance 3D fashion visualization studio,
//! written as [Leptos](https://leptos.dev/) components.
//!
//! The same component tree ships two ways:
//!
//! - **Static export** (`ssr`, default) - [`render_site`] renders the whole
//!   page to one self-contained HTML file; the `atelier-render` binary writes
//!   it to disk.
//! - **Browser app** (`csr`) - the `atelier-landing` crate mounts
//!   [`app::PortfolioSite`] client-side, where the contact form and the
//!   WebGL cloth preview come alive.
//!
//! ## Quick Start
//!
//! ```rust
//! use atelier_site::{render_site, RenderOptions};
//!
//! let html = render_site(&RenderOptions { year: Some(2025) });
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("2025"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - records behind every section
//! - [`content`] - the fixed page copy
//! - [`components`] - reusable UI pieces (cards, form, 3D viewer)
//! - [`sections`] - the six page sections plus header and footer
//! - [`app`] - composition root
//! - [`leads`] - contact submission and the lead sink seam
//! - [`scene`] - cloth geometry, orbit camera and WebGL renderer
//! - [`styles`] - CSS constant
//!
//! ## Leptos 0.8 SSR
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let html: String = view! { <Hero /> }.to_html();
//! ```
//!
//! Effects never run during server rendering, so the export carries the
//! viewer's poster in place of the live canvas.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod app;
pub mod components;
pub mod content;
pub mod error;
pub mod leads;
pub mod scene;
pub mod sections;
pub mod styles;
pub mod types;

pub use app::{copyright_year, PortfolioSite};
pub use content::SITE_CONTENT;
pub use error::{FormError, LeadError, SceneError};
pub use leads::{submit, LeadSink, LocalCapture};

use components::SiteDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

/// Knobs for [`render_site`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Pin the footer year (reproducible output); `None` uses the current year
    pub year: Option<i32>,
}

/// Render the complete page as a standalone HTML document.
///
/// # Returns
///
/// A complete HTML document as a `String`, including `<!DOCTYPE html>` and
/// the inlined stylesheet.
pub fn render_site(options: &RenderOptions) -> String {
    let year = options.year.unwrap_or_else(copyright_year);
    let owner = Owner::new();
    let html = owner.with(|| view! { <SiteDocument year=year /> }.to_html());

    tracing::debug!(year, bytes = html.len(), "rendered portfolio page");

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render() -> String {
        render_site(&RenderOptions { year: Some(2031) })
    }

    #[test]
    fn renders_full_document() {
        let html = render();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="en""#));
        assert!(html.contains("<style>"));
        assert!(html.contains("Haresh Perera"));
    }

    #[test]
    fn pinned_year_reaches_footer() {
        let html = render();
        assert!(html.contains("© 2031 Haresh Perera. All rights reserved."));
    }

    #[test]
    fn every_header_anchor_has_a_section() {
        let html = render();
        for link in content::HEADER_LINKS {
            let anchor = format!(r#"href="{}""#, link.href());
            let target = format!(r#"id="{}""#, link.target);
            assert!(html.contains(&anchor), "missing link {anchor}");
            assert_eq!(html.matches(&target).count(), 1, "target {target}");
        }
    }

    #[test]
    fn rendering_is_deterministic_with_pinned_year() {
        assert_eq!(render(), render());
    }
}
