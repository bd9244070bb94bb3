// tests/support/mocks/scripts.rs
use async_trait::async_trait;
use info_query_builder::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::script::{ScriptTarget, ScriptWriter},
};
use std::sync::Mutex;

/// Keeps every append in memory, in call order.
#[derive(Default)]
pub struct RecordingScriptWriter {
    appends: Mutex<Vec<(ScriptTarget, String)>>,
}

impl RecordingScriptWriter {
    pub fn appends(&self) -> Vec<(ScriptTarget, String)> {
        self.appends.lock().unwrap().clone()
    }
}

#[async_trait]
impl ScriptWriter for RecordingScriptWriter {
    async fn append(&self, target: &ScriptTarget, contents: &str) -> ApplicationResult<()> {
        self.appends
            .lock()
            .unwrap()
            .push((target.clone(), contents.to_string()));
        Ok(())
    }
}

pub struct FailingScriptWriter;

#[async_trait]
impl ScriptWriter for FailingScriptWriter {
    async fn append(&self, _target: &ScriptTarget, _contents: &str) -> ApplicationResult<()> {
        Err(ApplicationError::infrastructure("disk full"))
    }
}
