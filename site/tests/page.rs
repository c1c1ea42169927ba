//! Whole-page rendering tests
//!
//! Render the page (or single sections) to HTML and check the structure a
//! visitor relies on: anchors, card counts, prices, footer year.

use atelier_site::content::{PORTFOLIO, PRICING, SECTION_IDS};
use atelier_site::components::{CONFIRMATION, OFFLINE_NOTE};
use atelier_site::sections::{Hero, ServicesSection};
use atelier_site::{copyright_year, render_site, RenderOptions};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use pretty_assertions::assert_eq;

fn page() -> String {
    render_site(&RenderOptions::default())
}

fn render<V: RenderHtml>(f: impl FnOnce() -> V) -> String {
    let owner = Owner::new();
    owner.with(|| f().to_html())
}

// ============================================
// Layout
// ============================================

#[test]
fn sections_appear_once_in_document_order() {
    let html = page();
    let mut last = 0;
    for id in SECTION_IDS {
        let needle = format!(r#"id="{id}""#);
        assert_eq!(html.matches(&needle).count(), 1, "section {id}");
        let at = html.find(&needle).unwrap_or_default();
        assert!(at > last, "section {id} out of order");
        last = at;
    }
}

#[test]
fn header_comes_before_main_and_footer_after() {
    let html = page();
    let header = html.find(r#"class="site-header""#).unwrap();
    let main = html.find("<main").unwrap();
    let footer = html.find(r#"class="site-footer""#).unwrap();
    assert!(header < main && main < footer);
}

#[test]
fn card_counts() {
    let html = page();
    assert_eq!(html.matches(r#"class="card work-card""#).count(), 6);
    assert_eq!(html.matches(r#"class="card pricing-card""#).count(), 3);
    assert_eq!(html.matches(r#"class="card process-step""#).count(), 4);
}

// ============================================
// Content
// ============================================

#[test]
fn hero_headline_and_stats() {
    let html = render(|| view! { <Hero /> });

    assert!(html.contains("Photoreal 3D Clothing for"));
    assert!(html.contains("Forward‑Thinking Brands"));
    assert_eq!(html.matches(r#"class="stat""#).count(), 3);
    for value in ["$500+", "2–5 days", "5.0/5"] {
        assert!(html.contains(value), "hero stat {value}");
    }
}

#[test]
fn portfolio_titles_in_order() {
    let html = page();
    let mut last = 0;
    for item in PORTFOLIO {
        let at = html.find(item.title).unwrap_or_default();
        assert!(at > last, "{} out of order", item.title);
        last = at;
    }
}

#[test]
fn pricing_tiers_and_prices() {
    let html = page();
    for (tier, price) in [
        ("Basic", "$199 / garment"),
        ("Standard", "$449 / garment"),
        ("Premium", "Custom quote"),
    ] {
        assert!(html.contains(tier), "tier {tier}");
        assert!(html.contains(price), "price {price}");
    }
}

#[test]
fn pricing_buttons_are_placeholders_without_handler() {
    let html = render(|| view! { <ServicesSection on_select=None /> });
    assert_eq!(html.matches(r#"data-cta="placeholder""#).count(), PRICING.len());
    assert!(!html.contains(r#"data-cta="wired""#));
}

#[test]
fn contact_links() {
    let html = page();
    assert!(html.contains(r#"href="mailto:hello@hareshperera.com""#));
    assert!(html.contains(r#"href="tel:0001234567""#));
}

// ============================================
// Dynamic bits
// ============================================

#[test]
fn footer_shows_current_year() {
    let html = page();
    let expected = format!("© {} Haresh Perera. All rights reserved.", copyright_year());
    assert!(html.contains(&expected));
}

#[test]
fn footer_honours_pinned_year() {
    let html = render_site(&RenderOptions { year: Some(2019) });
    assert!(html.contains("© 2019 Haresh Perera"));
}

#[test]
fn confirmation_hidden_until_submit() {
    assert!(!page().contains(CONFIRMATION));
}

#[test]
fn exported_form_cannot_submit() {
    let html = page();
    let start = html.find(r#"class="card contact-form""#).unwrap();
    let end = start + html[start..].find("</form>").unwrap();
    let form = &html[start..end];

    // no named controls, no target: nothing can leave in a query string
    assert!(!form.contains(" name="));
    assert!(!form.contains(" action="));

    // every control sits inside a disabled fieldset
    let open = form.find("<fieldset").unwrap();
    let tag_end = open + form[open..].find('>').unwrap();
    assert!(form[open..tag_end].contains("disabled"));
    let close = form.find("</fieldset>").unwrap();
    for control in ["<input", "<textarea", r#"type="submit""#] {
        let at = form.find(control).unwrap();
        assert!(open < at && at < close, "{control} outside the fieldset");
    }
    assert!(form.contains(OFFLINE_NOTE));
}

#[test]
fn viewer_falls_back_to_poster() {
    let html = page();
    assert_eq!(html.matches("<canvas").count(), 1);
    assert!(html.contains(r#"class="viewer-poster""#));
    assert!(html.contains("Drag to orbit • Scroll to zoom"));
}
