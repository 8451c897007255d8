//! Google URL Shortener provider client.

use std::sync::Arc;

use crate::application::clients::{decode_object, display_value, is_empty, present};
use crate::domain::{HttpRequest, ShortLinkProvider, Transport, UrlChecker};
use crate::error::Error;
use async_trait::async_trait;
use serde_json::{Map, Value, json};
use url::form_urlencoded;

const PROVIDER: &str = "Google URL Shortener";

const ENDPOINT: &str = "https://www.googleapis.com/urlshortener/v1/url";

/// Which validation rules apply to a decoded payload.
///
/// Shorten responses carry no `status` field, so the status rules only apply
/// to expand-shaped responses. Stats responses are expand-shaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResponseKind {
    Shorten,
    Expand,
}

/// Client for the Google URL Shortener API.
///
/// The API key is optional; when present it is sent as a `key` query
/// parameter on every request. The key is immutable after construction and no
/// other state is kept between calls.
pub struct GoogleClient<T: Transport, C: UrlChecker> {
    transport: Arc<T>,
    url_checker: Arc<C>,
    api_key: Option<String>,
}

impl<T: Transport, C: UrlChecker> GoogleClient<T, C> {
    /// Creates a new client, optionally carrying an API key.
    pub fn new(transport: Arc<T>, url_checker: Arc<C>, api_key: Option<String>) -> Self {
        Self {
            transport,
            url_checker,
            api_key,
        }
    }

    /// Builds the endpoint URL with the given query pairs plus the API key.
    fn endpoint_url(&self, pairs: &[(&str, &str)]) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if let Some(key) = &self.api_key {
            serializer.append_pair("key", key);
        }
        for (name, value) in pairs {
            serializer.append_pair(name, value);
        }

        let query = serializer.finish();
        if query.is_empty() {
            ENDPOINT.to_string()
        } else {
            format!("{ENDPOINT}?{query}")
        }
    }

    /// Returns all data the provider holds for a short URL, including
    /// analytics (click counts, referrers, countries, browsers, platforms),
    /// by requesting the `FULL` projection.
    ///
    /// The decoded object is passed through verbatim after validation; its
    /// analytics fields are not reshaped.
    ///
    /// # Errors
    ///
    /// Same error cases as [`ShortLinkProvider::expand`]; stats responses are
    /// validated with the expand rules.
    pub async fn stats(&self, short_url: &str) -> Result<Map<String, Value>, Error> {
        if !self.url_checker.check(short_url).await {
            return Err(Error::invalid_request(short_url));
        }

        let url = self.endpoint_url(&[("shortUrl", short_url), ("projection", "FULL")]);

        tracing::debug!(provider = PROVIDER, short_url, "stats request");
        let raw = self.transport.send(HttpRequest::get(url)).await?;
        let payload = decode_object(PROVIDER, &raw)?;
        validate(&payload, ResponseKind::Expand)?;

        Ok(payload)
    }
}

#[async_trait]
impl<T: Transport, C: UrlChecker> ShortLinkProvider for GoogleClient<T, C> {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    async fn shorten(&self, long_url: &str) -> Result<String, Error> {
        if !self.url_checker.check(long_url).await {
            return Err(Error::invalid_request(long_url));
        }

        let request = HttpRequest::post(self.endpoint_url(&[]))
            .header("Accept-Language", "en")
            .header("Content-Type", "application/json")
            .body(json!({ "longUrl": long_url }).to_string());

        tracing::debug!(provider = PROVIDER, long_url, "shorten request");
        let raw = self.transport.send(request).await?;
        let payload = decode_object(PROVIDER, &raw)?;
        validate(&payload, ResponseKind::Shorten)?;

        extract_str(&payload, "id")
    }

    async fn expand(&self, short_url: &str) -> Result<String, Error> {
        if !self.url_checker.check(short_url).await {
            return Err(Error::invalid_request(short_url));
        }

        let url = self.endpoint_url(&[("shortUrl", short_url)]);

        tracing::debug!(provider = PROVIDER, short_url, "expand request");
        let raw = self.transport.send(HttpRequest::get(url)).await?;
        let payload = decode_object(PROVIDER, &raw)?;
        validate(&payload, ResponseKind::Expand)?;

        extract_str(&payload, "longUrl")
    }
}

/// Checks a decoded Google payload before any field extraction.
///
/// A non-empty `error.errors` list is an explicit provider failure whatever
/// the response kind. Expand-shaped responses must additionally carry a
/// `status` equal to `"OK"`. Both kinds require non-empty `id` and `longUrl`
/// fields.
fn validate(payload: &Map<String, Value>, kind: ResponseKind) -> Result<(), Error> {
    if let Some(errors) = payload
        .get("error")
        .and_then(|error| error.get("errors"))
        .filter(|errors| !is_empty(errors))
    {
        tracing::warn!(provider = PROVIDER, "provider reported failure");
        return Err(Error::provider(PROVIDER, errors.to_string()));
    }

    if kind == ResponseKind::Expand {
        match present(payload, "status") {
            None => return Err(Error::unusable_response(PROVIDER)),
            Some(status) if status.as_str() != Some("OK") => {
                tracing::warn!(provider = PROVIDER, status = %status, "provider reported failure");
                return Err(Error::provider(
                    PROVIDER,
                    format!("invalid status \"{}\"", display_value(status)),
                ));
            }
            Some(_) => {}
        }
    }

    if present(payload, "id").is_none() || present(payload, "longUrl").is_none() {
        return Err(Error::unusable_response(PROVIDER));
    }

    Ok(())
}

fn extract_str(payload: &Map<String, Value>, key: &str) -> Result<String, Error> {
    present(payload, key)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| Error::unusable_response(PROVIDER))
}
