//! # shortlink
//!
//! A unified client for URL-shortening web services.
//!
//! Two providers are supported: the OAuth-based Bitly API and the
//! API-key-based Google URL Shortener API. Their disparate response shapes
//! are normalized into three operations: `shorten`, `expand`, and (Google
//! only) `stats`.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Provider, transport, and URL-check traits
//! - **Application Layer** ([`application`]) - Provider clients and the
//!   per-provider response-validation rules
//! - **Infrastructure Layer** ([`infrastructure`]) - reqwest transport and
//!   URL checker implementations
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use shortlink::domain::ShortLinkProvider;
//! use shortlink::infrastructure::{HttpTransport, SyntacticUrlChecker};
//! use shortlink::GoogleClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), shortlink::Error> {
//!     let client = GoogleClient::new(
//!         Arc::new(HttpTransport::new()),
//!         Arc::new(SyntacticUrlChecker),
//!         None,
//!     );
//!
//!     let short = client.shorten("http://www.google.com/").await?;
//!     println!("{short}");
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns a validated value or exactly one [`Error`] kind;
//! see [`error`] for the taxonomy. The library performs no retries and caches
//! nothing: each call is a single round trip, independent given the
//! credentials held since construction.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::{BitlyClient, GoogleClient};
pub use error::Error;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::{BitlyClient, GoogleClient};
    pub use crate::config::Config;
    pub use crate::domain::{HttpMethod, HttpRequest, ShortLinkProvider, Transport, UrlChecker};
    pub use crate::error::Error;
    pub use crate::infrastructure::{HttpTransport, ProbingUrlChecker, SyntacticUrlChecker};
}
