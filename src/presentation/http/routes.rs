// src/presentation/http/routes.rs
use crate::presentation::http::controllers::query;
use crate::presentation::http::openapi;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

pub const PING_BODY: &str = "I am coming from info query builder";

pub fn build_router(state: HttpState) -> Router {
    Router::new()
        .merge(openapi::docs_router())
        .route("/ping", get(ping))
        .route("/query/generate", post(query::generate_query))
        .route("/query/update", post(query::update_query))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/ping",
    responses(
        (status = 200, description = "Liveness check.", body = String, content_type = "text/plain")
    ),
    tag = "System"
)]
pub async fn ping() -> &'static str {
    PING_BODY
}
