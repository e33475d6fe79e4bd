//! Shared types for the ELEMENT workshop backend
//!
//! Catalog, configurator core, domain models, unified error system and
//! API DTOs used by element-server and its tests.

pub mod catalog;
pub mod client;
pub mod configurator;
pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::{Json, body};
pub use http;
pub use serde::{Deserialize, Serialize};

pub use catalog::{Catalog, CatalogProvider};
pub use configurator::{OrderDetailPayload, Selection};
