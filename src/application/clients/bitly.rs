//! Bitly provider client.

use std::sync::Arc;

use crate::application::clients::{decode_object, display_value, is_empty, present};
use crate::domain::{HttpRequest, ShortLinkProvider, Transport, UrlChecker};
use crate::error::Error;
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde_json::{Map, Value};
use url::form_urlencoded;

const PROVIDER: &str = "Bit.ly";

const OAUTH_ENDPOINT: &str = "https://api-ssl.bitly.com/oauth/access_token";
const SHORTEN_ENDPOINT: &str = "https://api-ssl.bitly.com/v3/shorten";
const EXPAND_ENDPOINT: &str = "https://api-ssl.bitly.com/v3/expand";

/// Short domain used when none is given to [`BitlyClient::shorten_with_domain`].
pub const DEFAULT_DOMAIN: &str = "bit.ly";

/// Client for the Bitly shortening API.
///
/// Construction performs a one-time OAuth credential exchange; the resulting
/// access token is held for the client's lifetime and reused on every call.
/// No other state is kept between calls, so a single instance is safe to share
/// across tasks.
pub struct BitlyClient<T: Transport, C: UrlChecker> {
    transport: Arc<T>,
    url_checker: Arc<C>,
    access_token: String,
}

impl<T: Transport, C: UrlChecker> BitlyClient<T, C> {
    /// Exchanges the credentials for an access token and builds the client.
    ///
    /// Sends a Basic-authenticated POST to the OAuth token endpoint; the raw
    /// response body is the token itself. The provider signals rejected
    /// credentials with the literal body `INVALID_LOGIN`; any other body is
    /// accepted as a token without further validation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCredentials`] if the provider rejected the
    /// credentials, or [`Error::Transport`] if the exchange request failed.
    pub async fn connect(
        transport: Arc<T>,
        url_checker: Arc<C>,
        username: &str,
        password: &str,
    ) -> Result<Self, Error> {
        let credentials = BASE64.encode(format!("{username}:{password}"));
        let request = HttpRequest::post(OAUTH_ENDPOINT)
            .header("Authorization", format!("Basic {credentials}"))
            .header("Content-Type", "application/x-www-form-urlencoded");

        tracing::debug!(provider = PROVIDER, "exchanging credentials for access token");
        let access_token = transport.send(request).await?;

        if access_token == "INVALID_LOGIN" {
            tracing::warn!(provider = PROVIDER, "credential exchange rejected");
            return Err(Error::invalid_credentials(PROVIDER));
        }

        Ok(Self {
            transport,
            url_checker,
            access_token,
        })
    }

    /// Shortens a URL onto a specific short domain (`bit.ly`, `j.mp`, ...).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] if `long_url` fails the pre-check
    /// (no request is sent), [`Error::UnusableResponse`] if the response is
    /// structurally incomplete, and [`Error::Provider`] on a non-200 provider
    /// status.
    pub async fn shorten_with_domain(
        &self,
        long_url: &str,
        domain: &str,
    ) -> Result<String, Error> {
        if !self.url_checker.check(long_url).await {
            return Err(Error::invalid_request(long_url));
        }

        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("access_token", &self.access_token)
            .append_pair("longUrl", long_url)
            .append_pair("domain", domain)
            .finish();
        let url = format!("{SHORTEN_ENDPOINT}?{query}");

        tracing::debug!(provider = PROVIDER, long_url, domain, "shorten request");
        let raw = self.transport.send(HttpRequest::get(url)).await?;
        let payload = decode_object(PROVIDER, &raw)?;
        validate(&payload)?;

        payload
            .get("data")
            .and_then(Value::as_object)
            .and_then(|data| present(data, "url"))
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or_else(|| Error::unusable_response(PROVIDER))
    }

    fn expand_url(&self, short_url: &str) -> String {
        // The hash is the trailing path segment of the short URL.
        let hash = short_url.rsplit('/').next().unwrap_or_default();

        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("access_token", &self.access_token)
            .append_pair("shortUrl", short_url)
            .append_pair("hash", hash)
            .finish();
        format!("{EXPAND_ENDPOINT}?{query}")
    }
}

#[async_trait]
impl<T: Transport, C: UrlChecker> ShortLinkProvider for BitlyClient<T, C> {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    async fn shorten(&self, long_url: &str) -> Result<String, Error> {
        self.shorten_with_domain(long_url, DEFAULT_DOMAIN).await
    }

    async fn expand(&self, short_url: &str) -> Result<String, Error> {
        if !self.url_checker.check(short_url).await {
            return Err(Error::invalid_request(short_url));
        }

        let url = self.expand_url(short_url);

        tracing::debug!(provider = PROVIDER, short_url, "expand request");
        let raw = self.transport.send(HttpRequest::get(url)).await?;
        let payload = decode_object(PROVIDER, &raw)?;
        validate(&payload)?;

        payload
            .get("data")
            .and_then(|data| data.get("expand"))
            .and_then(|expand| expand.get(0))
            .and_then(|entry| entry.get("long_url"))
            .filter(|value| !is_empty(value))
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or_else(|| Error::unusable_response(PROVIDER))
    }
}

/// Checks a decoded Bitly payload before any field extraction.
///
/// The payload must carry a non-empty `data` field and at least one of
/// `status_code` / `status_txt`. A present `status_code` other than 200 is an
/// explicit provider failure and carries the provider's diagnostics.
fn validate(payload: &Map<String, Value>) -> Result<(), Error> {
    let status_code = present(payload, "status_code");
    let status_txt = present(payload, "status_txt");

    if present(payload, "data").is_none() || (status_code.is_none() && status_txt.is_none()) {
        return Err(Error::unusable_response(PROVIDER));
    }

    if let Some(code) = status_code {
        if !status_is_ok(code) {
            let text = status_txt
                .map(display_value)
                .unwrap_or_else(|| "<no status text provided>".to_string());
            tracing::warn!(provider = PROVIDER, status = %code, "provider reported failure");
            return Err(Error::provider(
                PROVIDER,
                format!("\"{}\": \"{}\"", display_value(code), text),
            ));
        }
    }

    Ok(())
}

/// The API reports success as `status_code: 200`, occasionally as a string.
fn status_is_ok(code: &Value) -> bool {
    code.as_i64() == Some(200) || code.as_str() == Some("200")
}
