//! Common capability set implemented by every provider client.

use crate::error::Error;
use async_trait::async_trait;

/// A URL-shortening provider.
///
/// Both clients implement this trait with their provider-specific validation
/// rules behind it. Capabilities beyond the shared set (Bitly's custom short
/// domains, Google's analytics) stay inherent methods on the concrete types.
#[async_trait]
pub trait ShortLinkProvider: Send + Sync {
    /// Human-readable provider name, used in logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Converts a long URL into a shortened one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] if the URL fails the pre-check,
    /// [`Error::UnusableResponse`] if the provider response cannot be
    /// interpreted, and [`Error::Provider`] if the provider signaled failure.
    async fn shorten(&self, long_url: &str) -> Result<String, Error>;

    /// Expands a shortened URL back to its original form.
    ///
    /// # Errors
    ///
    /// Same error cases as [`Self::shorten`].
    async fn expand(&self, short_url: &str) -> Result<String, Error>;
}
