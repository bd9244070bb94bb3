// src/application/ports/script.rs
use crate::{
    application::ApplicationResult,
    domain::info::{Environment, value_objects::RUN_DATE_LAYOUT},
};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::path::PathBuf;

/// Location of one generated script, relative to the output root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScriptTarget {
    pub run_date: NaiveDate,
    pub environment: Environment,
    pub file_name: String,
}

impl ScriptTarget {
    /// `{YYYYMMDD}/{env}`
    pub fn directory(&self) -> PathBuf {
        PathBuf::from(self.run_date.format(RUN_DATE_LAYOUT).to_string())
            .join(self.environment.as_str())
    }

    pub fn relative_path(&self) -> PathBuf {
        self.directory().join(&self.file_name)
    }
}

#[async_trait]
pub trait ScriptWriter: Send + Sync {
    /// Appends `contents` to the target, creating directories and the file
    /// as needed.
    async fn append(&self, target: &ScriptTarget, contents: &str) -> ApplicationResult<()>;
}
