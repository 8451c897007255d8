//! Default implementations of the domain contracts.
//!
//! Provides the production collaborators wired in by the binary and by
//! integration tests:
//! - [`HttpTransport`] - reqwest-backed [`crate::domain::Transport`]
//! - [`SyntacticUrlChecker`] - syntax-only [`crate::domain::UrlChecker`]
//! - [`ProbingUrlChecker`] - syntax check plus HEAD reachability probe

mod http_transport;
mod url_checker;

pub use http_transport::HttpTransport;
pub use url_checker::{ProbingUrlChecker, SyntacticUrlChecker};
