//! Catalog Loader
//!
//! Reads the project dataset from CSV. Columns are resolved by header name, so the
//! file may carry extra columns in any order. Missing cells are read as empty text.

use super::types::{Catalog, CatalogRow};
use std::io::Read;
use std::path::Path;
use thiserror::Error;

pub const COL_PROJECT_NAME: &str = "Project_name";
pub const COL_DESCRIPTION: &str = "description";
pub const COL_INDUSTRY: &str = "industry";
pub const COL_TECHNOLOGIES: &str = "Preferred_technologies";
pub const COL_EXPERIENCE: &str = "Experience_level";
pub const COL_DOMAIN: &str = "Domain";
pub const COL_BUDGET: &str = "budget";

/// Every column the catalog file must provide.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    COL_PROJECT_NAME,
    COL_DESCRIPTION,
    COL_INDUSTRY,
    COL_TECHNOLOGIES,
    COL_EXPERIENCE,
    COL_DOMAIN,
    COL_BUDGET,
];

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to open catalog {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: csv::Error,
    },
    #[error("failed to read catalog header: {0}")]
    Header(#[source] csv::Error),
    #[error("failed to read catalog record on line {line}: {source}")]
    Record {
        line: u64,
        #[source]
        source: csv::Error,
    },
    #[error("catalog is missing column '{column}' (found: {found:?})")]
    MissingColumn { column: String, found: Vec<String> },
    #[error("catalog contains no projects")]
    Empty,
}

/// Positions of the required columns within a record.
struct ColumnMap {
    project_name: usize,
    description: usize,
    industry: usize,
    technologies: usize,
    experience: usize,
    domain: usize,
    budget: usize,
}

impl ColumnMap {
    fn resolve(headers: &csv::StringRecord) -> Result<Self, CatalogError> {
        let found: Vec<String> = headers.iter().map(|h| h.trim().to_string()).collect();
        let position = |column: &str| {
            found
                .iter()
                .position(|h| h == column)
                .ok_or_else(|| CatalogError::MissingColumn {
                    column: column.to_string(),
                    found: found.clone(),
                })
        };

        Ok(Self {
            project_name: position(COL_PROJECT_NAME)?,
            description: position(COL_DESCRIPTION)?,
            industry: position(COL_INDUSTRY)?,
            technologies: position(COL_TECHNOLOGIES)?,
            experience: position(COL_EXPERIENCE)?,
            domain: position(COL_DOMAIN)?,
            budget: position(COL_BUDGET)?,
        })
    }

    fn row(&self, record: &csv::StringRecord) -> CatalogRow {
        let cell = |idx: usize| record.get(idx).unwrap_or("").to_string();

        CatalogRow {
            project_name: cell(self.project_name),
            description: cell(self.description),
            industry: cell(self.industry),
            preferred_technologies: cell(self.technologies),
            experience_level: cell(self.experience),
            domain: cell(self.domain),
            budget: cell(self.budget),
        }
    }
}

impl Catalog {
    /// Loads the catalog from a CSV file on disk.
    ///
    /// # Errors
    /// Fails if the file cannot be opened or parsed, if a required column is
    /// missing, or if the file holds no data rows.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path)
            .map_err(|source| CatalogError::Open {
                path: path.display().to_string(),
                source,
            })?;

        let catalog = read_catalog(reader)?;
        tracing::debug!("Loaded {} projects from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Loads the catalog from any CSV byte stream.
    pub fn from_reader<R: Read>(rdr: R) -> Result<Self, CatalogError> {
        let reader = csv::ReaderBuilder::new().flexible(true).from_reader(rdr);
        read_catalog(reader)
    }
}

fn read_catalog<R: Read>(mut reader: csv::Reader<R>) -> Result<Catalog, CatalogError> {
    let headers = reader.headers().map_err(CatalogError::Header)?.clone();
    let columns = ColumnMap::resolve(&headers)?;

    let mut rows = Vec::new();
    let mut record = csv::StringRecord::new();
    loop {
        match reader.read_record(&mut record) {
            Ok(true) => rows.push(columns.row(&record)),
            Ok(false) => break,
            Err(source) => {
                let line = source
                    .position()
                    .map(csv::Position::line)
                    .unwrap_or_else(|| rows.len() as u64 + 2);
                return Err(CatalogError::Record { line, source });
            }
        }
    }

    if rows.is_empty() {
        return Err(CatalogError::Empty);
    }

    Ok(Catalog::from_rows(rows))
}
