// tests/support/helpers.rs
use super::mocks;
use axum::body::{self, Body};
use axum::http::{Request, Response, StatusCode, header::CONTENT_TYPE};
use info_query_builder::{
    application::{
        ports::{script::ScriptWriter, time::Clock},
        services::ApplicationServices,
    },
    domain::info::ImageBaseUrls,
    infrastructure::scripts::FsScriptWriter,
    presentation::http::{routes::build_router, state::HttpState},
};
use std::{path::Path, sync::Arc};

pub const STG_BASE_URL: &str = "https://stg.example.com";
pub const PROD_BASE_URL: &str = "https://cdn.example.com";

pub fn test_base_urls() -> ImageBaseUrls {
    ImageBaseUrls::new(STG_BASE_URL, PROD_BASE_URL)
}

pub fn build_test_state(output_dir: &Path) -> HttpState {
    let writer: Arc<dyn ScriptWriter> = Arc::new(FsScriptWriter::new(output_dir));
    let clock: Arc<dyn Clock> = Arc::new(mocks::FixedClock);
    let services = Arc::new(ApplicationServices::new(writer, clock, test_base_urls()));
    HttpState { services }
}

/// Router writing scripts below `output_dir` with a fixed clock.
pub fn make_test_router(output_dir: &Path) -> axum::Router {
    build_router(build_test_state(output_dir))
}

pub fn json_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_string(resp: Response<Body>) -> String {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Contents of `{run dir}/{env}/{file}` or `None` when it was never written.
pub fn read_script(output_dir: &Path, env: &str, file: &str) -> Option<String> {
    let path = output_dir
        .join(mocks::time::fixed_run_dir())
        .join(env)
        .join(file);
    std::fs::read_to_string(path).ok()
}

pub fn count_statements(script: &str, keyword: &str) -> usize {
    script.matches(keyword).count()
}

/// Asserts the handler bailed out without writing any script.
pub async fn assert_silent_rejection(resp: Response<Body>, output_dir: &Path) {
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_string(resp).await.is_empty());
    let entries = std::fs::read_dir(output_dir).unwrap().count();
    assert_eq!(entries, 0, "no script directories should be created");
}
