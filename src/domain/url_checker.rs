//! URL pre-check contract.

use async_trait::async_trait;

/// Interface for validating candidate URLs before any provider call.
///
/// Returns `true` iff the string is an absolute URL with a scheme the
/// providers accept. Whether "valid" also means "currently reachable" is up to
/// the implementation; see the two implementations in
/// [`crate::infrastructure`].
///
/// # Implementations
///
/// - [`crate::infrastructure::SyntacticUrlChecker`] - syntax-only check
/// - [`crate::infrastructure::ProbingUrlChecker`] - syntax plus a HEAD probe
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlChecker: Send + Sync {
    /// Returns `true` if the URL is acceptable as provider input.
    async fn check(&self, url: &str) -> bool;
}
