use crate::catalog::CatalogRow;
use serde::{Deserialize, Deserializer, Serialize};

/// The four free-text preferences a caller ranks projects by.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub tech: String,
    pub level: String,
    pub domain: String,
    pub budget: String,
}

impl Query {
    /// Joined with the same convention as `CatalogRow::combined_text`.
    pub fn text(&self) -> String {
        format!("{} {} {} {}", self.tech, self.level, self.domain, self.budget)
    }
}

/// Body of `POST /recommend`.
///
/// Every field is optional. The bundled frontend posts the catalog column names,
/// so those are accepted as aliases.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendRequest {
    #[serde(default, alias = "Preferred_technologies", deserialize_with = "scalar_text")]
    pub tech: String,
    #[serde(default, alias = "Experience_level", deserialize_with = "scalar_text")]
    pub level: String,
    #[serde(default, alias = "Domain", deserialize_with = "scalar_text")]
    pub domain: String,
    #[serde(default, deserialize_with = "scalar_text")]
    pub budget: String,
}

impl From<RecommendRequest> for Query {
    fn from(req: RecommendRequest) -> Self {
        Self {
            tech: req.tech,
            level: req.level,
            domain: req.domain,
            budget: req.budget,
        }
    }
}

/// Accepts any JSON scalar as text; `null` reads as empty.
fn scalar_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(String::new()),
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Bool(b) => Ok(b.to_string()),
        other => Err(D::Error::custom(format!(
            "expected a string, number or boolean, got {other}"
        ))),
    }
}

/// What a caller sees of a recommended project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    #[serde(rename = "Project_name")]
    pub project_name: String,
    pub description: String,
    pub industry: String,
}

impl From<&CatalogRow> for ProjectSummary {
    fn from(row: &CatalogRow) -> Self {
        Self {
            project_name: row.project_name.clone(),
            description: row.description.clone(),
            industry: row.industry.clone(),
        }
    }
}

/// A ranked match, closest first.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub project: ProjectSummary,
    pub distance: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub projects: usize,
    pub vocabulary: usize,
}
