//! Data models
//!
//! Shared between element-server and the site frontend (via API).
//! Documents are stored as JSON, field names in camelCase to stay
//! compatible with the records the site already wrote.

pub mod finish;
pub mod material;
pub mod order;
pub mod user;
pub mod visitor;

// Re-exports
pub use finish::*;
pub use material::*;
pub use order::*;
pub use user::*;
pub use visitor::*;
