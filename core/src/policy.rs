//! Authorization policy for administrative actions.
//!
//! Admin gating is modeled as a policy-evaluation interface rather than a
//! hardcoded allowlist at the call sites, so the allowlist can later be
//! replaced with role- or claims-based checks without touching handlers.

/// Administrative actions subject to authorization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminAction {
    /// Create or modify events
    ManageEvents,
}

/// Decides whether an identity may perform an administrative action.
pub trait AuthorizationPolicy: Send + Sync {
    /// `true` if `identity` may perform `action`.
    fn is_authorized(&self, identity: &str, action: AdminAction) -> bool;
}

/// Allowlist policy: a fixed set of email addresses may do everything.
///
/// Matching is case-insensitive on the email address.
#[derive(Clone, Debug)]
pub struct AllowlistPolicy {
    emails: Vec<String>,
}

impl AllowlistPolicy {
    /// Create a policy from a list of permitted email addresses.
    #[must_use]
    pub fn new(emails: impl IntoIterator<Item = String>) -> Self {
        Self {
            emails: emails
                .into_iter()
                .map(|email| email.trim().to_ascii_lowercase())
                .filter(|email| !email.is_empty())
                .collect(),
        }
    }
}

impl AuthorizationPolicy for AllowlistPolicy {
    fn is_authorized(&self, identity: &str, _action: AdminAction) -> bool {
        let identity = identity.trim().to_ascii_lowercase();
        self.emails.iter().any(|email| *email == identity)
    }
}
