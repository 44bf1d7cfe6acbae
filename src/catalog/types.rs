use serde::{Deserialize, Serialize};

/// A single project in the catalog.
///
/// All attributes are kept as opaque text; a missing cell in the source file is an
/// empty string here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRow {
    pub project_name: String,
    pub description: String,
    pub industry: String,
    pub preferred_technologies: String,
    pub experience_level: String,
    pub domain: String,
    pub budget: String,
}

impl CatalogRow {
    /// The text the similarity model sees for this row.
    ///
    /// Technologies, experience level, domain and budget joined by single spaces.
    /// Queries are joined with the same convention so both land in one vector space.
    pub fn combined_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.preferred_technologies, self.experience_level, self.domain, self.budget
        )
    }
}

/// The immutable, ordered set of catalog rows.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    rows: Vec<CatalogRow>,
}

impl Catalog {
    pub fn from_rows(rows: Vec<CatalogRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[CatalogRow] {
        &self.rows
    }

    pub fn get(&self, index: usize) -> Option<&CatalogRow> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Combined text of every row, in catalog order.
    pub fn combined_texts(&self) -> Vec<String> {
        self.rows.iter().map(CatalogRow::combined_text).collect()
    }
}
