//! Nearest-neighbor lookup under cosine distance.
//!
//! The catalog is small and fixed, so the index is an exhaustive scan over every
//! stored vector. Results are ordered by distance, ties by row index.

use super::tfidf::SparseVector;
use crate::error::SearchError;

/// A catalog row matched by a lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub index: usize,
    pub distance: f64,
}

/// Cosine distance `1 - cos(a, b)`, clamped to `[0, 2]`.
///
/// A zero vector has no direction, so its distance to anything is `1.0`.
pub fn cosine_distance(a: &SparseVector, b: &SparseVector) -> f64 {
    let denom = a.norm() * b.norm();
    if denom == 0.0 {
        return 1.0;
    }
    (1.0 - a.dot(b) / denom).clamp(0.0, 2.0)
}

#[derive(Debug, Clone)]
pub struct NearestNeighbors {
    vectors: Vec<SparseVector>,
    n_neighbors: usize,
}

impl NearestNeighbors {
    pub fn fit(vectors: Vec<SparseVector>, n_neighbors: usize) -> Result<Self, SearchError> {
        if n_neighbors == 0 {
            return Err(SearchError::ZeroNeighbors);
        }
        Ok(Self {
            vectors,
            n_neighbors,
        })
    }

    /// Returns the `min(n_neighbors, len)` rows closest to `query`.
    pub fn kneighbors(&self, query: &SparseVector) -> Vec<Neighbor> {
        let mut neighbors: Vec<Neighbor> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(index, vector)| Neighbor {
                index,
                distance: cosine_distance(query, vector),
            })
            .collect();

        neighbors.sort_by(|a, b| {
            a.distance
                .total_cmp(&b.distance)
                .then_with(|| a.index.cmp(&b.index))
        });
        neighbors.truncate(self.n_neighbors);
        neighbors
    }

    pub fn n_neighbors(&self) -> usize {
        self.n_neighbors
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}
