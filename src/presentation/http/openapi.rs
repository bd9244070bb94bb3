// src/presentation/http/openapi.rs
use axum::Router;
use std::{
    env,
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::query::generate_query,
        crate::presentation::http::controllers::query::update_query,
        super::routes::ping
    ),
    components(
        schemas(
            crate::presentation::http::controllers::query::GenerateQueryRequest,
            crate::presentation::http::controllers::query::UpdateQueryRequest
        )
    ),
    tags(
        (name = "Queries", description = "SQL script generation for info banners"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Info Query Builder API",
        description = "Renders promotional info campaigns into reviewable SQL scripts",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new().merge(swagger).merge(redoc)
}

/// Writes the document to `OPENAPI_SNAPSHOT_PATH` (default
/// `docs/openapi.json`) and returns the path written.
pub fn write_openapi_snapshot() -> std::io::Result<PathBuf> {
    let path = PathBuf::from(
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "docs/openapi.json".to_string()),
    );
    write_openapi_snapshot_to(&path)?;
    Ok(path)
}

pub fn write_openapi_snapshot_to(path: &Path) -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}
