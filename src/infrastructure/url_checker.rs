//! URL checker implementations.

use crate::domain::UrlChecker;
use async_trait::async_trait;
use url::Url;

fn is_well_formed(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host_str().is_some(),
        Err(_) => false,
    }
}

/// Syntax-only [`UrlChecker`].
///
/// Accepts absolute HTTP(S) URLs with a host. Makes no network calls, so a
/// syntactically valid but unreachable URL still passes; use
/// [`ProbingUrlChecker`] when reachability matters.
pub struct SyntacticUrlChecker;

#[async_trait]
impl UrlChecker for SyntacticUrlChecker {
    async fn check(&self, url: &str) -> bool {
        is_well_formed(url)
    }
}

/// [`UrlChecker`] that verifies syntax and then probes the URL with a HEAD
/// request.
///
/// A URL passes when the probe answers with a success or redirect status.
/// Redirects are not followed; the first hop answering is proof enough of
/// reachability. Probe failures of any kind (DNS, connect, timeout) simply
/// fail the check; they are never surfaced as errors.
pub struct ProbingUrlChecker {
    client: reqwest::Client,
}

impl ProbingUrlChecker {
    /// # Errors
    ///
    /// Returns [`Error`](crate::error::Error::Transport) if the underlying
    /// client cannot be built.
    pub fn new() -> Result<Self, crate::error::Error> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| crate::error::Error::transport(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl UrlChecker for ProbingUrlChecker {
    async fn check(&self, url: &str) -> bool {
        if !is_well_formed(url) {
            return false;
        }

        match self.client.head(url).send().await {
            Ok(response) => {
                let status = response.status();
                status.is_success() || status.is_redirection()
            }
            Err(e) => {
                tracing::debug!(url, error = %e, "reachability probe failed");
                false
            }
        }
    }
}
