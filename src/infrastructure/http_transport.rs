//! reqwest-backed transport implementation.

use std::time::Duration;

use crate::domain::{HttpMethod, HttpRequest, Transport};
use crate::error::Error;
use async_trait::async_trait;

/// Production [`Transport`] built on [`reqwest`].
///
/// Error HTTP statuses are not treated as failures here: the provider encodes
/// its failures in the response body and the clients' validation rules
/// interpret them. Only connect/timeout/read failures become
/// [`Error::Transport`].
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Creates a transport with reqwest's default settings (no timeout).
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Creates a transport with a total per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the underlying client cannot be built.
    pub fn with_timeout(timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::transport(e.to_string()))?;
        Ok(Self { client })
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<String, Error> {
        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
        };

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;

        tracing::debug!(url = %request.url, status = %response.status(), "response received");

        response
            .text()
            .await
            .map_err(|e| Error::transport(e.to_string()))
    }
}
