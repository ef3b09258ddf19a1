//! Shared types for the Purchase Tracker frontend
//!
//! Domain models, API request payloads and response envelopes used by the
//! client crate, the screen layer and the mock backend.

pub mod client;
pub mod models;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use client::UserDetails;
pub use response::{DeleteOutcome, DeleteResponse, ListEnvelope};
