//! Literal page content.
//!
//! Single source of truth for every string list the page renders. Counts are
//! fixed at compile time: 6 portfolio entries, 3 pricing tiers, 4 process
//! steps.

use crate::types::{
    ContactDetails, NavLink, PortfolioItem, PricingTier, ProcessStep, SiteContent, StatItem,
};

/// Anchor ids of the page blocks, in document order.
pub const SECTION_IDS: [&str; 6] = ["home", "work", "services", "process", "about", "contact"];

pub const CONTACT: ContactDetails = ContactDetails {
    owner: "Haresh Perera",
    brand: "3D Fashion",
    email: "hello@hareshperera.com",
    phone: "(000) 123‑4567",
};

pub const HEADER_LINKS: &[NavLink] = &[
    NavLink { target: "work", label: "Work" },
    NavLink { target: "services", label: "Services" },
    NavLink { target: "process", label: "Process" },
    NavLink { target: "about", label: "About" },
    NavLink { target: "contact", label: "Contact" },
];

pub const FOOTER_LINKS: &[NavLink] = &[
    NavLink { target: "home", label: "Home" },
    NavLink { target: "work", label: "Work" },
    NavLink { target: "services", label: "Services" },
    NavLink { target: "contact", label: "Contact" },
];

pub const HERO_STATS: &[StatItem] = &[
    StatItem { value: "$500+", label: "Avg. sample saves" },
    StatItem { value: "2–5 days", label: "Turnaround" },
    StatItem { value: "5.0/5", label: "Client rating" },
];

pub const PORTFOLIO: &[PortfolioItem] = &[
    PortfolioItem {
        title: "Techwear Shell Jacket",
        subtitle: "Photoreal concept → pre-production",
        tags: &["Nylon Ripstop", "PBR", "4K Renders"],
    },
    PortfolioItem {
        title: "Minimalist Hoodie",
        subtitle: "Shopify 3D viewer asset",
        tags: &["Cotton Fleece", "Turntable", "USDZ/GLB"],
    },
    PortfolioItem {
        title: "Satin Dress",
        subtitle: "High-fashion lookbook CGI",
        tags: &["Silk Shader", "Studio Lighting", "Animation"],
    },
    PortfolioItem {
        title: "Denim Jacket",
        subtitle: "Distressed wash exploration",
        tags: &["Denim", "Displacement", "8K Maps"],
    },
    PortfolioItem {
        title: "Puffer Vest",
        subtitle: "AR try-on prototype",
        tags: &["Quilted", "Normal + AO", "USDZ"],
    },
    PortfolioItem {
        title: "Sneaker",
        subtitle: "Marketing hero renders",
        tags: &["Leather", "Subsurface", "Procedural"],
    },
];

pub const PRICING: &[PricingTier] = &[
    PricingTier {
        tier: "Basic",
        price: "$199 / garment",
        features: &[
            "2–3 photoreal still renders",
            "White / studio background",
            "Social-ready exports (PNG)",
        ],
        cta: "Start with Basic",
    },
    PricingTier {
        tier: "Standard",
        price: "$449 / garment",
        features: &[
            "Interactive 3D (GLB/USDZ)",
            "Turntable video (5–10s)",
            "Optimized for web viewers",
        ],
        cta: "Book Standard",
    },
    PricingTier {
        tier: "Premium",
        price: "Custom quote",
        features: &[
            "Collection previews & animation",
            "AR try-on prototype support",
            "Lighting/lookdev exploration",
        ],
        cta: "Discuss Premium",
    },
];

pub const PROCESS: &[ProcessStep] = &[
    ProcessStep {
        step: "1",
        title: "Brief",
        desc: "Share sketches/refs, fabrics, and goals.",
    },
    ProcessStep {
        step: "2",
        title: "Blockout",
        desc: "Silhouette + proportions for approval.",
    },
    ProcessStep {
        step: "3",
        title: "Lookdev",
        desc: "Fabric shaders, stitching, hardware.",
    },
    ProcessStep {
        step: "4",
        title: "Deliver",
        desc: "Renders, GLB/USDZ, and usage guide.",
    },
];

/// Tool checklist in the about block.
pub const SKILLS: &[&str] = &[
    "CLO3D / Marvelous Designer",
    "Blender / Substance",
    "PBR / UDIM workflow",
    "GLB / USDZ for web",
];

pub const ABOUT_STATS: &[StatItem] = &[
    StatItem { value: "+28%", label: "Avg. time-on-page" },
    StatItem { value: "−1–2", label: "Prototype cuts" },
    StatItem { value: "1.2k+", label: "Assets delivered" },
];

/// All literal lists in one value.
pub const SITE_CONTENT: SiteContent = SiteContent {
    contact: CONTACT,
    header_links: HEADER_LINKS,
    footer_links: FOOTER_LINKS,
    hero_stats: HERO_STATS,
    portfolio: PORTFOLIO,
    pricing: PRICING,
    process: PROCESS,
    about_stats: ABOUT_STATS,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_counts() {
        assert_eq!(PORTFOLIO.len(), 6);
        assert_eq!(PRICING.len(), 3);
        assert_eq!(PROCESS.len(), 4);
        assert_eq!(HERO_STATS.len(), 3);
        assert_eq!(ABOUT_STATS.len(), 3);
    }

    #[test]
    fn nav_targets_are_known_sections() {
        for link in HEADER_LINKS.iter().chain(FOOTER_LINKS) {
            assert!(
                SECTION_IDS.contains(&link.target),
                "{} is not a section id",
                link.target
            );
        }
    }

    #[test]
    fn content_dump_is_json() {
        let json = serde_json::to_value(SITE_CONTENT).unwrap();
        assert_eq!(json["pricing"][2]["price"], "Custom quote");
        assert_eq!(json["portfolio"].as_array().map(Vec::len), Some(6));
        assert_eq!(json["contact"]["email"], "hello@hareshperera.com");
    }
}
