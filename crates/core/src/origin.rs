//! Cross-origin allow-list.
//!
//! Browsers declare the calling page in the `Origin` header. Requests with no
//! origin (same-origin navigation, curl, server-to-server) always pass; any
//! declared origin must appear in the allow-list.

/// Origins allowed when no override is configured.
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &["http://localhost:8080", "http://movies.com"];

/// Outcome of checking a request origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OriginDecision {
    Allowed,
    Blocked,
}

/// Fixed allow-list of origins permitted to call the API from a browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginPolicy {
    allowed: Vec<String>,
}

impl OriginPolicy {
    pub fn new<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    /// The configured allow-list, in configuration order.
    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed
    }

    /// Decide whether a request declaring `origin` may proceed.
    ///
    /// Matching is exact: scheme, host and port must all agree.
    pub fn decide(&self, origin: Option<&str>) -> OriginDecision {
        match origin {
            None => OriginDecision::Allowed,
            Some(o) if self.allowed.iter().any(|a| a == o) => OriginDecision::Allowed,
            Some(_) => OriginDecision::Blocked,
        }
    }

    pub fn is_allowed(&self, origin: Option<&str>) -> bool {
        self.decide(origin) == OriginDecision::Allowed
    }
}

impl Default for OriginPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOWED_ORIGINS.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_origin_is_allowed() {
        let policy = OriginPolicy::default();
        assert_eq!(policy.decide(None), OriginDecision::Allowed);
    }

    #[test]
    fn listed_origins_are_allowed() {
        let policy = OriginPolicy::default();
        assert_eq!(
            policy.decide(Some("http://localhost:8080")),
            OriginDecision::Allowed
        );
        assert_eq!(policy.decide(Some("http://movies.com")), OriginDecision::Allowed);
    }

    #[test]
    fn unknown_origin_is_blocked() {
        let policy = OriginPolicy::default();
        assert_eq!(policy.decide(Some("http://evil.com")), OriginDecision::Blocked);
    }

    #[test]
    fn matching_is_exact() {
        let policy = OriginPolicy::default();
        // Different port, scheme and trailing slash all miss.
        assert!(!policy.is_allowed(Some("http://localhost:3000")));
        assert!(!policy.is_allowed(Some("https://movies.com")));
        assert!(!policy.is_allowed(Some("http://movies.com/")));
        assert!(!policy.is_allowed(Some("null")));
    }

    #[test]
    fn custom_allow_list_replaces_defaults() {
        let policy = OriginPolicy::new(["http://example.org"]);
        assert!(policy.is_allowed(Some("http://example.org")));
        assert!(!policy.is_allowed(Some("http://movies.com")));
        assert_eq!(policy.allowed_origins(), ["http://example.org".to_string()]);
    }
}
