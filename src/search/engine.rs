use super::index::{NearestNeighbors, Neighbor};
use super::tfidf::TfidfVectorizer;
use super::types::{ProjectSummary, Query, Recommendation};
use crate::catalog::Catalog;
use crate::error::SearchError;

/// Number of projects returned per lookup unless configured otherwise.
pub const DEFAULT_NEIGHBORS: usize = 20;

/// The recommendation service: one catalog, one vectorizer, one index.
///
/// Built once at startup and read-only afterwards, so a single instance is shared
/// by every request behind an `Arc`.
#[derive(Debug)]
pub struct Recommender {
    catalog: Catalog,
    vectorizer: TfidfVectorizer,
    index: NearestNeighbors,
}

impl Recommender {
    pub fn new(catalog: Catalog, n_neighbors: usize) -> Result<Self, SearchError> {
        let texts = catalog.combined_texts();
        let vectorizer = TfidfVectorizer::fit(&texts)?;
        let vectors = texts.iter().map(|t| vectorizer.transform(t)).collect();
        let index = NearestNeighbors::fit(vectors, n_neighbors)?;

        tracing::info!(
            "Built recommender: {} projects, {} terms, {} neighbors",
            catalog.len(),
            vectorizer.vocabulary_size(),
            n_neighbors
        );

        Ok(Self {
            catalog,
            vectorizer,
            index,
        })
    }

    /// Ranks catalog projects by similarity to `query`, closest first.
    ///
    /// A query sharing no vocabulary with the catalog is equally far from every
    /// row; it gets the leading rows in catalog order.
    pub fn recommend(&self, query: &Query) -> Vec<Recommendation> {
        let text = query.text();
        let vector = self.vectorizer.transform(&text);

        let neighbors: Vec<Neighbor> = if vector.is_zero() {
            tracing::debug!("Query {:?} has no known terms, using catalog order", text);
            (0..self.catalog.len().min(self.index.n_neighbors()))
                .map(|index| Neighbor {
                    index,
                    distance: 1.0,
                })
                .collect()
        } else {
            self.index.kneighbors(&vector)
        };

        let results: Vec<Recommendation> = neighbors
            .into_iter()
            .filter_map(|n| {
                self.catalog.get(n.index).map(|row| Recommendation {
                    project: ProjectSummary::from(row),
                    distance: n.distance,
                })
            })
            .collect();

        tracing::debug!("Query {:?} -> {} recommendations", text, results.len());
        results
    }

    pub fn recommend_projects(&self, query: &Query) -> Vec<ProjectSummary> {
        self.recommend(query)
            .into_iter()
            .map(|r| r.project)
            .collect()
    }

    pub fn catalog_size(&self) -> usize {
        self.catalog.len()
    }

    pub fn n_neighbors(&self) -> usize {
        self.index.n_neighbors()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vectorizer.vocabulary_size()
    }
}
