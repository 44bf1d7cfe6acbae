//! Project Recommendation Service Library
//!
//! Content-based recommendation of catalog projects from a user's preferred
//! technologies, experience level, domain and budget.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! - **`catalog`**: Loads the fixed project dataset from CSV once at startup.
//! - **`search`**: TF-IDF encoding, cosine nearest-neighbor ranking, and the
//!   HTTP surface that exposes it.
//! - **`config`**: Command-line and environment configuration.
//! - **`error`**: Error types for model construction and HTTP responses.

pub mod catalog;
pub mod config;
pub mod error;
pub mod search;
