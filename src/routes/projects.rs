use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::error::AppError;
use crate::models::NewProject;
use crate::state::SharedState;

/// GET responses are shareable for five minutes.
const CACHE_CONTROL: &str = "public, s-maxage=300";

pub async fn list(State(state): State<SharedState>) -> Result<Response, AppError> {
    let (document, _) = state.store.fetch().await?;

    Ok((
        [(header::CACHE_CONTROL, CACHE_CONTROL)],
        Json(json!({
            "success": true,
            "data": document.projects,
            "meta": {
                "total": document.total,
                "last_updated": document.last_updated,
            },
        })),
    )
        .into_response())
}

pub async fn create(
    State(state): State<SharedState>,
    Json(body): Json<serde_json::Value>,
) -> Result<Response, AppError> {
    if state.config.github_token.is_none() {
        return Err(AppError::Unauthorized("GitHub token missing".to_string()));
    }

    let req: NewProject = serde_json::from_value(body)
        .map_err(|e| AppError::BadRequest(format!("Invalid project body: {e}")))?;

    let (mut document, token) = state.store.fetch().await?;

    let project = req.into_project();
    document.push(project.clone());

    let message = format!("Add new project: {}", project.title);
    let github_response = state.store.put(&document, &token, &message).await?;

    tracing::info!(id = project.id, title = %project.title, "Project added");

    Ok(Json(json!({
        "success": true,
        "message": "Project added",
        "data": project,
        "github_response": github_response,
    }))
    .into_response())
}

/// Preflight gets a bare 200; the allow-* headers are applied to every
/// response by the layer in `build_app`.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
