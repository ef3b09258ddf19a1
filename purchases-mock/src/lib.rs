//! In-memory stand-in for the purchases backend
//!
//! Implements the `/purchases/*` POST endpoints over an in-memory store.
//! Used by `tracker-client` integration tests and runnable as a dev server
//! when the real backend is unavailable.

pub mod api;
pub mod state;

pub use api::router;
pub use state::AppState;
