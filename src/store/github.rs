use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Deserialize;
use serde_json::json;

use super::{ContentStore, RevisionToken, StoreError};
use crate::config::Config;
use crate::models::ProjectDocument;

const USER_AGENT: &str = concat!("folio/", env!("CARGO_PKG_VERSION"));

/// Project document stored as a JSON file in a GitHub repository, read and
/// written through the contents API. Content travels base64-encoded; the
/// blob sha doubles as the compare-and-swap token.
pub struct GithubStore {
    client: reqwest::Client,
    contents_url: String,
    branch: String,
    token: Option<String>,
}

#[derive(Deserialize)]
struct ContentsResponse {
    content: String,
    sha: String,
}

impl GithubStore {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build reqwest client"),
            contents_url: format!(
                "https://api.github.com/repos/{}/contents/{}",
                config.repo, config.db_path
            ),
            branch: config.branch.clone(),
            token: config.github_token.clone(),
        }
    }

    fn request(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let req = req
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/vnd.github+json");
        match &self.token {
            Some(token) => req.header("Authorization", format!("Bearer {token}")),
            None => req,
        }
    }
}

#[async_trait]
impl ContentStore for GithubStore {
    async fn fetch(&self) -> Result<(ProjectDocument, RevisionToken), StoreError> {
        let resp = self
            .request(self.client.get(&self.contents_url))
            .query(&[("ref", self.branch.as_str())])
            .send()
            .await
            .map_err(|e| StoreError::Unavailable(format!("Database fetch failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(StoreError::Unavailable(format!(
                "Database read failed: upstream returned {}",
                resp.status()
            )));
        }

        let body: ContentsResponse = resp
            .json()
            .await
            .map_err(|e| StoreError::Decode(format!("Invalid contents response: {e}")))?;

        // The API inserts newlines into the base64 payload.
        let encoded: String = body.content.split_whitespace().collect();
        let raw = BASE64
            .decode(encoded)
            .map_err(|e| StoreError::Decode(format!("Invalid base64 content: {e}")))?;

        let document: ProjectDocument = serde_json::from_slice(&raw)
            .map_err(|e| StoreError::Decode(format!("Invalid database document: {e}")))?;

        Ok((document, RevisionToken(body.sha)))
    }

    async fn put(
        &self,
        document: &ProjectDocument,
        token: &RevisionToken,
        message: &str,
    ) -> Result<serde_json::Value, StoreError> {
        let pretty = serde_json::to_vec_pretty(document)
            .map_err(|e| StoreError::Decode(format!("Failed to encode document: {e}")))?;

        let resp = self
            .request(self.client.put(&self.contents_url))
            .json(&json!({
                "message": message,
                "content": BASE64.encode(pretty),
                "sha": token.0,
                "branch": self.branch,
            }))
            .send()
            .await
            .map_err(|e| StoreError::Unavailable(format!("Database write failed: {e}")))?;

        let status = resp.status();
        let body: serde_json::Value = resp.json().await.unwrap_or(json!(null));

        // 409 means the sha precondition no longer matches the live blob.
        if status == reqwest::StatusCode::CONFLICT {
            return Err(StoreError::Conflict(
                "Database changed since it was read".to_string(),
            ));
        }
        if !status.is_success() {
            return Err(StoreError::Unavailable(format!(
                "Database write failed: upstream returned {status}"
            )));
        }

        Ok(body)
    }
}
