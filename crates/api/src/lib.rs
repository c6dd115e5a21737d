//! REST surface of the DLMM pool scout.
//!
//! The HTTP rendition of the dashboard: pool search, deposit-return
//! ranking, per-pool ROI estimates and health reports, plus the local
//! key-value store, all served as JSON.

/// Error types and response mapping.
pub mod error;
/// Request handlers.
pub mod handlers;
/// Request/response models.
pub mod models;
/// Route definitions.
pub mod routes;
/// Server configuration and startup.
pub mod server;
/// Shared application state.
pub mod state;

pub use error::ApiError;
pub use routes::router;
pub use server::{ServerConfig, serve};
pub use state::AppState;
