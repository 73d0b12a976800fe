//! # assethub-api
//!
//! HTTP API layer for AssetHub built on Axum.
//!
//! Provides the inventory REST endpoints, the CSV download, middleware
//! (CORS, compression, logging), extractors, DTOs, and error mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
