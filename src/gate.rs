//! Declarative access policy for the gate in front of the API.
//!
//! The policy is a list of (path-prefix, requirement) rules evaluated before
//! any handler runs. Authentication itself lives in
//! [`crate::application::services::AuthService`]; enforcement lives in
//! [`crate::api::middleware::auth`]. The core handlers assume they are only
//! ever invoked for already-authorized requests.

/// What a matched path demands of the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// No credentials needed.
    Public,
    /// A valid Bearer token is required.
    Authenticated,
}

/// A single path rule. `prefix` matches whole path segments, so `/api`
/// covers `/api` and `/api/users` but not `/apiary`.
#[derive(Debug, Clone)]
pub struct AccessRule {
    pub prefix: String,
    pub requirement: Requirement,
}

/// Ordered rule list; the first matching prefix wins, unmatched paths are
/// public.
#[derive(Debug, Clone)]
pub struct AccessPolicy {
    rules: Vec<AccessRule>,
}

impl AccessPolicy {
    /// Builds a policy from an ordered rule list.
    pub fn new(rules: Vec<AccessRule>) -> Self {
        Self { rules }
    }

    /// The shipped policy: everything under `/api` requires authentication,
    /// everything else is public.
    pub fn default_policy() -> Self {
        Self::new(vec![AccessRule {
            prefix: "/api".to_string(),
            requirement: Requirement::Authenticated,
        }])
    }

    /// Returns the requirement for a request path.
    pub fn requirement_for(&self, path: &str) -> Requirement {
        self.rules
            .iter()
            .find(|rule| prefix_matches(&rule.prefix, path))
            .map(|rule| rule.requirement)
            .unwrap_or(Requirement::Public)
    }
}

fn prefix_matches(prefix: &str, path: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}
