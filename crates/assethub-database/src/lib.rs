//! # assethub-database
//!
//! PostgreSQL connection management and concrete repository
//! implementations for the AssetHub inventory.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
