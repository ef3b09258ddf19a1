//! Tracker Client - HTTP client for the purchases backend
//!
//! Provides network-based HTTP POST calls to the `/purchases` API.

pub mod api;
pub mod config;
pub mod error;
pub mod http;

pub use api::PurchasesApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::response::{DeleteOutcome, DeleteResponse, ListEnvelope};
