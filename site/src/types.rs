//! Content types for the portfolio page.
//!
//! Everything the page shows is literal data compiled into the binary, so
//! these types hold `&'static str` rather than owned strings. They are:
//!
//! - **Copy-friendly** - components take them by value without cloning
//! - **Serializable** - the whole content set can be dumped as JSON
//!
//! The only mutable value on the page is [`SubmissionStatus`], owned by the
//! contact form. [`ContactRequest`] is the transient snapshot of the form
//! fields taken when the user submits.
//!
//! # Example
//!
//! ```rust
//! use atelier_site::types::{PricingTier, SubmissionStatus};
//!
//! let tier = PricingTier {
//!     tier: "Basic",
//!     price: "$199 / garment",
//!     features: &["2–3 photoreal still renders"],
//!     cta: "Start with Basic",
//! };
//! assert_eq!(tier.features.len(), 1);
//! assert_eq!(SubmissionStatus::default(), SubmissionStatus::Idle);
//! ```

use serde::Serialize;

/// One entry of the portfolio grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PortfolioItem {
    /// Garment name, shown as the card heading
    pub title: &'static str,
    /// What the render was used for
    pub subtitle: &'static str,
    /// Material / deliverable tags, rendered as badges in order
    pub tags: &'static [&'static str],
}

/// One pricing package.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PricingTier {
    /// Tier name ("Basic", "Standard", ...)
    pub tier: &'static str,
    /// Display price, free text ("$199 / garment", "Custom quote")
    pub price: &'static str,
    /// Included deliverables, rendered with a check mark each
    pub features: &'static [&'static str],
    /// Call-to-action button label
    pub cta: &'static str,
}

/// One step of the "how it works" list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ProcessStep {
    /// Step number as displayed ("1".."4")
    pub step: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

/// A headline number with its caption.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StatItem {
    pub value: &'static str,
    pub label: &'static str,
}

/// Same-page navigation link.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Anchor id without the leading `#`
    pub target: &'static str,
    pub label: &'static str,
}

impl NavLink {
    /// `href` value for the anchor (`#work`, `#contact`, ...)
    pub fn href(&self) -> String {
        format!("#{}", self.target)
    }
}

/// Who the site belongs to and how to reach them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ContactDetails {
    pub owner: &'static str,
    /// Short descriptor shown next to the owner name in the header
    pub brand: &'static str,
    pub email: &'static str,
    /// Display form of the phone number
    pub phone: &'static str,
}

impl ContactDetails {
    /// `mailto:` link for the email address
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// `tel:` link built from the digits of the display phone number
    pub fn tel(&self) -> String {
        let digits: String = self.phone.chars().filter(|c| c.is_ascii_digit()).collect();
        format!("tel:{digits}")
    }
}

/// Every literal list on the page, grouped for the JSON content dump.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct SiteContent {
    pub contact: ContactDetails,
    pub header_links: &'static [NavLink],
    pub footer_links: &'static [NavLink],
    pub hero_stats: &'static [StatItem],
    pub portfolio: &'static [PortfolioItem],
    pub pricing: &'static [PricingTier],
    pub process: &'static [ProcessStep],
    pub about_stats: &'static [StatItem],
}

/// Submission state of the contact form.
///
/// Created as [`SubmissionStatus::Idle`] when the form mounts. The only
/// transition is `Idle -> Sent`; submitting again while `Sent` keeps it
/// `Sent`. There is no way back to `Idle` short of remounting the form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sent,
}

impl SubmissionStatus {
    /// Status after a submit that passed validation and was accepted.
    pub fn sent(self) -> Self {
        SubmissionStatus::Sent
    }

    pub fn is_sent(self) -> bool {
        matches!(self, SubmissionStatus::Sent)
    }
}

/// Field values of the contact form at the moment of submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    /// Brand / company, the only optional field
    pub company: Option<String>,
    /// Free-text project description
    pub project: String,
}

impl ContactRequest {
    /// Build a request from raw input values; a blank company becomes `None`.
    pub fn from_fields(name: String, email: String, company: String, project: String) -> Self {
        let company = if company.trim().is_empty() {
            None
        } else {
            Some(company)
        };
        Self {
            name,
            email,
            company,
            project,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_starts_idle_and_only_moves_to_sent() {
        let status = SubmissionStatus::default();
        assert!(!status.is_sent());

        let status = status.sent();
        assert_eq!(status, SubmissionStatus::Sent);
        assert_eq!(status.sent(), SubmissionStatus::Sent);
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&SubmissionStatus::Sent).unwrap();
        assert_eq!(json, "\"sent\"");
    }

    #[test]
    fn contact_links() {
        let details = ContactDetails {
            owner: "Test Owner",
            brand: "3D",
            email: "hi@example.com",
            phone: "(000) 123‑4567",
        };
        assert_eq!(details.mailto(), "mailto:hi@example.com");
        assert_eq!(details.tel(), "tel:0001234567");
    }

    #[test]
    fn blank_company_is_none() {
        let req = ContactRequest::from_fields(
            "Ada".into(),
            "ada@example.com".into(),
            "   ".into(),
            "A jacket".into(),
        );
        assert_eq!(req.company, None);

        let req = ContactRequest::from_fields(
            "Ada".into(),
            "ada@example.com".into(),
            "Acme".into(),
            "A jacket".into(),
        );
        assert_eq!(req.company.as_deref(), Some("Acme"));
    }

    #[test]
    fn nav_link_href() {
        let link = NavLink {
            target: "work",
            label: "Work",
        };
        assert_eq!(link.href(), "#work");
    }
}
