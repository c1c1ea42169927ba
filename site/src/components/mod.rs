//! Leptos UI components for the portfolio page.
//!
//! Leaf components are reusable and stateless except [`ContactForm`].
//! The page blocks that compose them live in [`crate::sections`].
//!
//! # Component Hierarchy
//!
//! ```text
//! SiteDocument (static export only)
//! └── PortfolioSite
//!     ├── SiteHeader
//!     ├── Hero
//!     │   ├── Badge x3, Stat x3
//!     │   └── ViewerPanel
//!     │       └── WavyCloth
//!     ├── WorkSection      → Section + WorkCard x6
//!     ├── ServicesSection  → Section + PricingCard x3
//!     ├── ProcessSection   → Section + 4 steps
//!     ├── AboutSection     → Section + Stat x3
//!     ├── ContactSection   → Section + ContactForm
//!     └── SiteFooter
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use atelier_site::components::{Section, WorkCard};
//! use atelier_site::content::PORTFOLIO;
//!
//! view! {
//!     <Section id="work" title="Portfolio">
//!         <WorkCard item=PORTFOLIO[0] />
//!     </Section>
//! }
//! ```

mod badge;
mod contact_form;
mod document;
mod icons;
mod pricing_card;
mod section;
mod wavy_cloth;
mod work_card;

pub use badge::{Badge, Stat};
pub use contact_form::{ContactForm, CONFIRMATION, OFFLINE_NOTE};
pub use document::SiteDocument;
pub use icons::*;
pub use pricing_card::PricingCard;
pub use section::Section;
pub use wavy_cloth::WavyCloth;
pub use work_card::WorkCard;
