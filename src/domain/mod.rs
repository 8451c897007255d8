//! Domain layer containing the contracts provider clients are built on.
//!
//! # Architecture
//!
//! - [`provider`] - The shared `shorten`/`expand` capability set
//! - [`transport`] - Outbound HTTP request model and transport trait
//! - [`url_checker`] - Input URL pre-check trait
//!
//! # Design Principles
//!
//! - Traits define contracts implemented by the infrastructure layer
//! - Mock implementations are auto-generated via `mockall` for testing
//! - Provider clients in [`crate::application::clients`] consume these traits
//!   and never touch the network directly

pub mod provider;
pub mod transport;
pub mod url_checker;

pub use provider::ShortLinkProvider;
pub use transport::{HttpMethod, HttpRequest, Transport};
pub use url_checker::UrlChecker;

#[cfg(test)]
pub use transport::MockTransport;
#[cfg(test)]
pub use url_checker::MockUrlChecker;
