pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod page;
pub mod routes;
pub mod state;
pub mod store;

use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderName, HeaderValue};
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::Config;
use crate::state::{AppState, SharedState};
use crate::store::ContentStore;

pub fn build_app(store: Arc<dyn ContentStore>, config: Config) -> Router {
    let static_dir = config.static_dir.clone();

    let state: SharedState = Arc::new(AppState { config, store });

    // The endpoint is called cross-origin from the portfolio page, so every
    // response carries the permissive allow-* set.
    Router::new()
        .merge(routes::api_routes())
        .nest_service("/static", ServeDir::new(static_dir))
        .route("/health", axum::routing::get(health))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("access-control-allow-origin"),
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("access-control-allow-credentials"),
            HeaderValue::from_static("true"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("access-control-allow-methods"),
            HeaderValue::from_static("GET,OPTIONS,POST,PUT,DELETE"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("access-control-allow-headers"),
            HeaderValue::from_static("Content-Type"),
        ))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
