use chrono::Utc;
use serde::{Deserialize, Serialize};

/// One portfolio entry. `id` is the epoch-millisecond timestamp taken at
/// creation; uniqueness is not guaranteed under concurrent writers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub demo_url: String,
    #[serde(default)]
    pub github_url: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    /// Calendar date, `YYYY-MM-DD`.
    pub created_at: String,
}

/// The whole persisted state: read on every list, read-modify-written on
/// every append. `total` is recomputed by the writer each time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectDocument {
    pub projects: Vec<Project>,
    pub total: usize,
    pub last_updated: String,
}

impl ProjectDocument {
    pub fn push(&mut self, project: Project) {
        self.projects.push(project);
        self.total = self.projects.len();
        self.last_updated = today();
    }
}

/// Append request body. Only these fields are recognized; anything else is
/// rejected rather than merged into the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewProject {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub demo_url: String,
    #[serde(default)]
    pub github_url: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

impl NewProject {
    pub fn into_project(self) -> Project {
        Project {
            id: Utc::now().timestamp_millis(),
            title: self.title,
            description: self.description,
            image: self.image,
            demo_url: self.demo_url,
            github_url: self.github_url,
            tags: self.tags,
            featured: self.featured,
            created_at: today(),
        }
    }
}

pub fn today() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}
