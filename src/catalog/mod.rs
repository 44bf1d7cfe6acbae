//! Catalog Module
//!
//! Owns the project dataset the recommender ranks against.
//!
//! ## Overview
//! The catalog is read once from a CSV file at startup and never changes afterwards.
//! Row order is file order, and it is the tie-break order used when ranking.
//!
//! ## Submodules
//! - **`loader`**: CSV parsing, header resolution and error reporting.
//! - **`types`**: The `CatalogRow` record and the immutable `Catalog` container.

pub mod loader;
pub mod types;

pub use loader::CatalogError;
pub use types::{Catalog, CatalogRow};
