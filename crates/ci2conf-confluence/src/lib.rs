//! Confluence backend for ci2conf.
//!
//! This crate provides the wire half of the publish workflow:
//! - [`ConfluenceClient`]: sync REST API client with basic authentication
//! - [`ConfluenceSession`]: adapter implementing [`ci2conf_core::Session`]
//!   over the client
//!
//! # Example
//!
//! ```ignore
//! use ci2conf_confluence::{ConfluenceClient, ConfluenceSession};
//!
//! let client = ConfluenceClient::from_config(
//!     "https://wiki.example.com/confluence",
//!     "ci-bot",
//!     "api-token",
//! );
//! let session = ConfluenceSession::new(client);
//!
//! // `session` plugs into ci2conf_core::Publisher.
//! ```

// API client
mod client;
pub use client::ConfluenceClient;

// Session adapter
mod session;
pub use session::ConfluenceSession;

// Types (internal, surfaced through ci2conf-core's remote types)
mod types;

// Errors
mod error;
pub use error::ConfluenceError;
