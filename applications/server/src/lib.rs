//! Sonora Server Library
//!
//! HTTP backend for a music catalog: songs with their streaming segments,
//! users, and playlists that embed song snapshots.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod router;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use router::create_router;
pub use services::CatalogService;
pub use state::AppState;
