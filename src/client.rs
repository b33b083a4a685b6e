//! Small client for the `/projects` endpoint, used by the `demo` binary to
//! exercise the live API and render the results panel in the terminal.

use serde::Deserialize;
use serde_json::Value;

use crate::models::{NewProject, Project};

#[derive(Debug)]
pub struct ClientError {
    pub message: String,
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        ClientError {
            message: format!("Request failed: {e}"),
        }
    }
}

#[derive(Deserialize)]
struct Envelope {
    success: bool,
    #[serde(default)]
    data: Value,
    #[serde(default)]
    error: Option<String>,
}

impl Envelope {
    fn take_data(self) -> Result<Value, ClientError> {
        if self.success {
            Ok(self.data)
        } else {
            Err(ClientError {
                message: self.error.unwrap_or_else(|| "Unknown error".to_string()),
            })
        }
    }
}

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build reqwest client"),
            base_url: base_url.into(),
        }
    }

    pub async fn list_projects(&self) -> Result<Vec<Project>, ClientError> {
        let envelope: Envelope = self
            .http
            .get(format!("{}/projects", self.base_url))
            .send()
            .await?
            .json()
            .await?;

        let data = envelope.take_data()?;
        serde_json::from_value(data).map_err(|e| ClientError {
            message: format!("Unexpected response shape: {e}"),
        })
    }

    pub async fn add_project(&self, project: &NewProject) -> Result<Project, ClientError> {
        let envelope: Envelope = self
            .http
            .post(format!("{}/projects", self.base_url))
            .json(project)
            .send()
            .await?
            .json()
            .await?;

        let data = envelope.take_data()?;
        serde_json::from_value(data).map_err(|e| ClientError {
            message: format!("Unexpected response shape: {e}"),
        })
    }
}

/// One text card per record, in the order received.
pub fn render_cards(projects: &[Project]) -> String {
    if projects.is_empty() {
        return "No projects yet.".to_string();
    }

    let mut out = String::new();
    for p in projects {
        out.push_str(&format!("┌─ {} (#{})\n", p.title, p.id));
        if !p.description.is_empty() {
            out.push_str(&format!("│  {}\n", p.description));
        }
        if !p.tags.is_empty() {
            out.push_str(&format!("│  tags: {}\n", p.tags.join(", ")));
        }
        if p.featured {
            out.push_str("│  featured\n");
        }
        out.push_str(&format!("└─ added {}\n", p.created_at));
    }
    out
}
