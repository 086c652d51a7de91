//! bakehouse-core: shared types, IDs, errors, and configuration.
//!
//! This crate is the foundational dependency for the other bakehouse
//! crates, providing type-safe entity identifiers, a unified error type,
//! and application configuration.

pub mod config;
pub mod error;
pub mod ids;

// Re-export the most commonly used items at the crate root.
pub use error::{Error, Result};
pub use ids::*;
