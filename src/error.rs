//! Error taxonomy shared by all provider clients.
//!
//! Every public operation either returns a fully validated value or fails with
//! exactly one of the kinds below. The library never retries; callers that want
//! retry semantics wrap the call at a higher layer.

/// Errors produced by provider clients and their collaborators.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The credential exchange was rejected by the provider at construction time.
    #[error("{provider} rejected the supplied credentials")]
    InvalidCredentials { provider: &'static str },

    /// The input URL failed validation; no network request was made.
    #[error("the URL {url:?} is not valid or currently unavailable")]
    InvalidRequest { url: String },

    /// The underlying request could not be completed.
    ///
    /// Produced by [`Transport`](crate::domain::Transport) implementations,
    /// never by the response-validation core.
    #[error("request could not be completed: {message}")]
    Transport { message: String },

    /// The decoded payload is not a JSON object or is missing required fields.
    #[error("{provider} returned a response that could not be handled")]
    UnusableResponse { provider: &'static str },

    /// The payload is structurally valid but the provider signaled failure.
    #[error("{provider} returned an error: {message}")]
    Provider {
        provider: &'static str,
        message: String,
    },
}

impl Error {
    pub fn invalid_credentials(provider: &'static str) -> Self {
        Self::InvalidCredentials { provider }
    }

    pub fn invalid_request(url: impl Into<String>) -> Self {
        Self::InvalidRequest { url: url.into() }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn unusable_response(provider: &'static str) -> Self {
        Self::UnusableResponse { provider }
    }

    pub fn provider(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Provider {
            provider,
            message: message.into(),
        }
    }
}
