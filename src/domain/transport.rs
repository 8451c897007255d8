//! Transport contract for outbound HTTP work.

use crate::error::Error;
use async_trait::async_trait;

/// HTTP method used by a [`HttpRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// A single outbound HTTP request.
///
/// Built by provider clients and handed to a [`Transport`] implementation.
/// Headers are plain name/value pairs; the body, when present, is already
/// serialized.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Creates a GET request for the given URL.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Creates a POST request for the given URL.
    pub fn post(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Post,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Appends a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sets the request body.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// Interface for performing HTTP requests on behalf of provider clients.
///
/// Implementations must return the raw response body even for error HTTP
/// statuses; providers encode their failures inside the body, and the
/// response-validation core interprets them. Only failures to complete the
/// request at all (connect, timeout, read) map to [`Error::Transport`].
///
/// # Implementations
///
/// - [`crate::infrastructure::HttpTransport`] - reqwest-backed implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs the request and returns the raw response body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the request could not be completed.
    async fn send(&self, request: HttpRequest) -> Result<String, Error>;
}
