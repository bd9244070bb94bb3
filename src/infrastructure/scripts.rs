// src/infrastructure/scripts.rs
use crate::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::script::{ScriptTarget, ScriptWriter},
};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::{fs, io::AsyncWriteExt};

/// Appends scripts under a root directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct FsScriptWriter {
    root: PathBuf,
}

impl FsScriptWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl ScriptWriter for FsScriptWriter {
    async fn append(&self, target: &ScriptTarget, contents: &str) -> ApplicationResult<()> {
        let directory = self.root.join(target.directory());
        fs::create_dir_all(&directory).await.map_err(|err| {
            ApplicationError::infrastructure(format!(
                "failed to create {}: {err}",
                directory.display()
            ))
        })?;

        let path = directory.join(&target.file_name);
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await
            .map_err(|err| {
                ApplicationError::infrastructure(format!(
                    "failed to open {}: {err}",
                    path.display()
                ))
            })?;

        file.write_all(contents.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}
