//! Search Module
//!
//! Content-based project recommendation over the loaded catalog.
//!
//! ## Overview
//! Each catalog row's combined text is encoded as a TF-IDF vector once at startup.
//! A query is encoded into the same space and compared against every row by cosine
//! distance; the closest rows are returned as project summaries.
//!
//! ## Submodules
//! - **`tokenizer`**: Lowercasing and term extraction shared by catalog and queries.
//! - **`tfidf`**: Vocabulary, inverse document frequencies and sparse vectors.
//! - **`index`**: Exhaustive cosine nearest-neighbor lookup.
//! - **`engine`**: The `Recommender` service object tying the above together.
//! - **`handlers`**: HTTP handlers and router for the Axum web server.
//! - **`types`**: Query, request and response types.

pub mod engine;
pub mod handlers;
pub mod index;
pub mod tfidf;
pub mod tokenizer;
pub mod types;
