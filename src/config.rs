// src/config.rs
use crate::domain::info::ImageBaseUrls;
use clap::Parser;
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};
use thiserror::Error;

const DEFAULT_PORT: u16 = 3222;
const DEFAULT_IMAGE_BASE_URL: &str = "http://localhost/images";

#[derive(Debug, Parser)]
#[command(
    name = "info_query_builder",
    version,
    about = "Generate info banner SQL scripts over HTTP"
)]
struct Cli {
    /// Port to serve requests on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Base URL for accessing images in production
    #[arg(long = "prodURL", env = "PROD_BASE_URL", default_value = DEFAULT_IMAGE_BASE_URL)]
    prod_url: String,

    /// Base URL for accessing images in staging
    #[arg(long = "stgURL", env = "STG_BASE_URL", default_value = DEFAULT_IMAGE_BASE_URL)]
    stg_url: String,

    /// Directory the dated script folders are created in
    #[arg(long = "output-dir", env = "OUTPUT_DIR", default_value = ".")]
    output_dir: PathBuf,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    port: u16,
    base_urls: ImageBaseUrls,
    output_dir: PathBuf,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl AppConfig {
    /// Build configuration from process arguments, falling back to
    /// environment variables (a `.env` file is loaded first when present).
    /// Malformed arguments print usage and exit, like any clap program.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_cli(Cli::parse())
    }

    pub fn try_parse_from<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let cli = Cli::try_parse_from(args).map_err(|err| ConfigError::Invalid(err.to_string()))?;
        Self::from_cli(cli)
    }

    fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        let prod_url = sanitize_base_url("prodURL", &cli.prod_url)?;
        let stg_url = sanitize_base_url("stgURL", &cli.stg_url)?;

        Ok(Self {
            port: cli.port,
            base_urls: ImageBaseUrls::new(stg_url, prod_url),
            output_dir: cli.output_dir,
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    pub fn base_urls(&self) -> &ImageBaseUrls {
        &self.base_urls
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

fn sanitize_base_url(flag: &str, value: &str) -> Result<String, ConfigError> {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid(format!("--{flag} must not be empty")));
    }
    Ok(trimmed.to_string())
}
