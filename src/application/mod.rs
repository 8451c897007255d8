//! Application layer holding the provider clients.
//!
//! This layer orchestrates each call: input pre-check, request construction,
//! transport dispatch, and provider-specific response validation. Clients
//! consume the domain traits and never perform I/O themselves.
//!
//! # Available Clients
//!
//! - [`clients::BitlyClient`] - OAuth-based Bitly API
//! - [`clients::GoogleClient`] - API-key-based Google API

pub mod clients;

pub use clients::{BitlyClient, GoogleClient};
