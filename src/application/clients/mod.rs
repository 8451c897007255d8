//! Provider clients implementing the response-validation core.
//!
//! # Available Clients
//!
//! - [`bitly::BitlyClient`] - OAuth-based Bitly API (shorten, expand)
//! - [`google::GoogleClient`] - API-key-based Google API (shorten, expand, stats)
//!
//! Both clients delegate network work to [`crate::domain::Transport`] and input
//! validation to [`crate::domain::UrlChecker`], then interpret the raw response
//! with provider-specific rules. The helpers below are shared by both rule
//! sets.

pub mod bitly;
pub mod google;

pub use bitly::BitlyClient;
pub use google::GoogleClient;

use crate::error::Error;
use serde_json::{Map, Value};

/// Decodes a raw response body into a JSON object.
///
/// Anything that is not valid JSON, or decodes to a scalar or array, is
/// unusable regardless of provider.
pub(crate) fn decode_object(
    provider: &'static str,
    raw: &str,
) -> Result<Map<String, Value>, Error> {
    serde_json::from_str::<Value>(raw)
        .ok()
        .and_then(|value| match value {
            Value::Object(map) => Some(map),
            _ => None,
        })
        .ok_or_else(|| Error::unusable_response(provider))
}

/// Returns `true` if a field value counts as absent.
///
/// Providers are loose about how they omit fields: `null`, `false`, `0`, `""`,
/// `"0"`, and empty containers must all be treated as missing.
pub(crate) fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// Looks up a field and returns it only when present and non-empty.
pub(crate) fn present<'a>(payload: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    payload.get(key).filter(|value| !is_empty(value))
}

/// Renders a scalar field for inclusion in diagnostic messages.
pub(crate) fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
