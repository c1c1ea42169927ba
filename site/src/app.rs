//! Composition root - the whole page in document order

use chrono::Datelike;
use leptos::prelude::*;

use crate::sections::{
    AboutSection, ContactSection, Hero, ProcessSection, ServicesSection, SiteFooter, SiteHeader,
    WorkSection,
};

/// Current calendar year in local time.
pub fn copyright_year() -> i32 {
    chrono::Local::now().year()
}

/// The complete portfolio page.
///
/// Holds no state of its own; the only state on the page lives inside the
/// contact form.
#[component]
pub fn PortfolioSite(
    /// Footer year; the current year when omitted
    #[prop(optional)]
    year: Option<i32>,
    /// Called with the tier name when a pricing call-to-action is clicked
    #[prop(optional)]
    on_tier_select: Option<Callback<&'static str>>,
) -> impl IntoView {
    let year = year.unwrap_or_else(copyright_year);
    view! {
        <div class="site">
            <SiteHeader />
            <main>
                <Hero />
                <WorkSection />
                <ServicesSection on_select=on_tier_select />
                <ProcessSection />
                <AboutSection />
                <ContactSection />
            </main>
            <SiteFooter year=year />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_is_four_digits() {
        let year = copyright_year();
        assert!((1000..=9999).contains(&year));
        assert_eq!(year.to_string().len(), 4);
    }
}
