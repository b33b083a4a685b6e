pub mod projects;

use axum::Router;
use axum::routing::get;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new().route(
        "/projects",
        get(projects::list)
            .post(projects::create)
            .options(projects::preflight)
            .fallback(projects::method_not_allowed),
    )
}
