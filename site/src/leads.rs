//! Contact form submission.
//!
//! The form never talks to a server. A submit runs [`submit`], which checks
//! the same rules the browser enforces through `required` / `type="email"`,
//! hands the request to a [`LeadSink`] and returns the next
//! [`SubmissionStatus`].
//!
//! [`LocalCapture`] is the only sink. It is a placeholder for a future
//! email/CRM integration and only records a log line.

use crate::error::{FormError, LeadError};
use crate::types::{ContactRequest, SubmissionStatus};

/// Destination for captured leads.
pub trait LeadSink {
    fn deliver(&self, request: &ContactRequest) -> Result<(), LeadError>;
}

/// Placeholder sink: logs that a request was captured and drops it.
///
/// Field contents are not logged, only their lengths.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalCapture;

impl LeadSink for LocalCapture {
    fn deliver(&self, request: &ContactRequest) -> Result<(), LeadError> {
        tracing::info!(
            target: "atelier::leads",
            name_len = request.name.len(),
            project_len = request.project.len(),
            has_company = request.company.is_some(),
            "contact request captured locally (no lead service wired)"
        );
        Ok(())
    }
}

/// Browser-equivalent constraint check.
///
/// Text inputs and textareas only fail `required` when empty; email inputs
/// are whitespace-trimmed before the check and must match the grammar the
/// browser applies to `type="email"` (see [`is_email`]).
pub fn validate(request: &ContactRequest) -> Result<(), FormError> {
    if request.name.is_empty() {
        return Err(FormError::MissingField("name"));
    }
    let email = request.email.trim();
    if email.is_empty() {
        return Err(FormError::MissingField("email"));
    }
    if !is_email(email) {
        return Err(FormError::InvalidEmail);
    }
    if request.project.is_empty() {
        return Err(FormError::MissingField("project"));
    }
    Ok(())
}

/// The HTML "valid e-mail address" production.
///
/// Local part: one or more of `A-Z a-z 0-9` and ``.!#$%&'*+/=?^_`{|}~-``.
/// Domain: dot-separated labels of 1 to 63 alphanumerics or `-`, never
/// starting or ending with `-`. A single label (`user@localhost`) is valid.
pub fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty() && local.chars().all(is_local_char) && domain.split('.').all(is_domain_label)
}

fn is_local_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || ".!#$%&'*+/=?^_`{|}~-".contains(c)
}

fn is_domain_label(label: &str) -> bool {
    (1..=63).contains(&label.len())
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        && !label.starts_with('-')
        && !label.ends_with('-')
}

/// Run one submit and return the status to display.
///
/// Invalid requests and sink failures leave `status` untouched. An accepted
/// request moves it to `Sent`, including when it already was `Sent`.
pub fn submit(
    status: SubmissionStatus,
    request: &ContactRequest,
    sink: &dyn LeadSink,
) -> SubmissionStatus {
    if let Err(err) = validate(request) {
        tracing::debug!(target: "atelier::leads", %err, "submit blocked");
        return status;
    }
    match sink.deliver(request) {
        Ok(()) => status.sent(),
        Err(err) => {
            tracing::warn!(target: "atelier::leads", %err, "lead sink rejected request");
            status
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recording {
        seen: RefCell<Vec<ContactRequest>>,
    }

    impl LeadSink for Recording {
        fn deliver(&self, request: &ContactRequest) -> Result<(), LeadError> {
            self.seen.borrow_mut().push(request.clone());
            Ok(())
        }
    }

    struct Offline;

    impl LeadSink for Offline {
        fn deliver(&self, _request: &ContactRequest) -> Result<(), LeadError> {
            Err(LeadError::Unavailable("offline".into()))
        }
    }

    fn filled() -> ContactRequest {
        ContactRequest::from_fields(
            "Ada Lovelace".into(),
            "ada@studio.example".into(),
            String::new(),
            "Three jackets for SS26".into(),
        )
    }

    #[test]
    fn valid_submit_moves_to_sent() {
        let sink = Recording::default();
        let status = submit(SubmissionStatus::Idle, &filled(), &sink);
        assert_eq!(status, SubmissionStatus::Sent);
        assert_eq!(sink.seen.borrow().len(), 1);
    }

    #[test]
    fn repeated_submits_stay_sent() {
        let sink = Recording::default();
        let mut status = SubmissionStatus::Idle;
        for _ in 0..3 {
            status = submit(status, &filled(), &sink);
            assert_eq!(status, SubmissionStatus::Sent);
        }
        // no dedup: every submit reaches the sink
        assert_eq!(sink.seen.borrow().len(), 3);
    }

    #[test]
    fn missing_required_field_keeps_idle() {
        let sink = Recording::default();
        let cases = [
            ContactRequest { name: String::new(), ..filled() },
            ContactRequest { email: "   ".into(), ..filled() },
            ContactRequest { project: String::new(), ..filled() },
        ];
        for request in cases {
            assert_eq!(
                submit(SubmissionStatus::Idle, &request, &sink),
                SubmissionStatus::Idle
            );
        }
        assert!(sink.seen.borrow().is_empty());
    }

    #[test]
    fn company_is_optional() {
        let request = filled();
        assert_eq!(request.company, None);
        assert_eq!(validate(&request), Ok(()));
    }

    #[test]
    fn email_rules() {
        let with = |email: &str| ContactRequest {
            email: email.into(),
            ..filled()
        };
        assert_eq!(validate(&with("a@b")), Ok(()));
        assert_eq!(validate(&with("  a@b.co  ")), Ok(()));
        assert_eq!(validate(&with("no-at-sign")), Err(FormError::InvalidEmail));
        assert_eq!(validate(&with("@domain.com")), Err(FormError::InvalidEmail));
        assert_eq!(validate(&with("a@@b")), Err(FormError::InvalidEmail));
        assert_eq!(validate(&with("a b@c.d")), Err(FormError::InvalidEmail));
        assert_eq!(validate(&with("")), Err(FormError::MissingField("email")));
    }

    #[test]
    fn email_domain_labels_follow_browser_grammar() {
        for bad in [
            "a@b..c",
            "a@-b",
            "a@b-",
            "a@b_c",
            "a@b!c",
            "a@.b",
            "a@b.",
            "a@",
            "a(b)@c",
        ] {
            assert!(!is_email(bad), "{bad} should be rejected");
        }
        let long_label = format!("a@{}.com", "x".repeat(64));
        assert!(!is_email(&long_label));

        for good in [
            "a@b",
            "first.last@studio-3d.example",
            "o'brien+quotes@x1.co.uk",
            "UPPER@CASE.IO",
        ] {
            assert!(is_email(good), "{good} should be accepted");
        }
    }

    #[test]
    fn sink_failure_leaves_status() {
        assert_eq!(
            submit(SubmissionStatus::Idle, &filled(), &Offline),
            SubmissionStatus::Idle
        );
        assert_eq!(
            submit(SubmissionStatus::Sent, &filled(), &Offline),
            SubmissionStatus::Sent
        );
    }

    #[test]
    fn local_capture_accepts() {
        assert_eq!(LocalCapture.deliver(&filled()), Ok(()));
    }
}
