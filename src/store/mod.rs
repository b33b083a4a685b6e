pub mod github;
pub mod memory;

use async_trait::async_trait;

use crate::models::ProjectDocument;

/// Opaque compare-and-swap precondition returned by a read and required by
/// the next write. For GitHub this is the blob sha.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevisionToken(pub String);

#[derive(Debug)]
pub enum StoreError {
    /// The remote rejected a write because the supplied token is stale.
    Conflict(String),
    /// The remote could not be reached or answered non-success.
    Unavailable(String),
    /// The stored content was not valid encoded JSON.
    Decode(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Conflict(msg) => write!(f, "{msg}"),
            StoreError::Unavailable(msg) => write!(f, "{msg}"),
            StoreError::Decode(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<String> for StoreError {
    fn from(s: String) -> Self {
        StoreError::Unavailable(s)
    }
}

impl From<&str> for StoreError {
    fn from(s: &str) -> Self {
        StoreError::Unavailable(s.to_string())
    }
}

/// The remote blob store holding the project document. One read path serves
/// both list and append; writes are guarded by the token from the preceding
/// read and fail with `Conflict` if the live token has moved on.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn fetch(&self) -> Result<(ProjectDocument, RevisionToken), StoreError>;

    /// Replace the document wholesale. Returns the raw upstream response.
    async fn put(
        &self,
        document: &ProjectDocument,
        token: &RevisionToken,
        message: &str,
    ) -> Result<serde_json::Value, StoreError>;
}
