// src/bin/write_openapi_snapshot.rs
use anyhow::Result;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let output_path = info_query_builder::presentation::http::openapi::write_openapi_snapshot()?;
    println!("OpenAPI snapshot written to {}", output_path.display());
    Ok(())
}
