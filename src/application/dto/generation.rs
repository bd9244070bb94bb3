// src/application/dto/generation.rs
use std::path::PathBuf;

/// A statement that could not be appended to its script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteFailure {
    pub path: PathBuf,
    pub message: String,
}

/// Outcome of one generate or update run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub statements_written: usize,
    pub files: Vec<PathBuf>,
    pub failures: Vec<WriteFailure>,
}

impl GenerationReport {
    pub(crate) fn record_written(&mut self, path: PathBuf) {
        self.statements_written += 1;
        if !self.files.contains(&path) {
            self.files.push(path);
        }
    }

    pub(crate) fn record_failure(&mut self, path: PathBuf, message: impl Into<String>) {
        self.failures.push(WriteFailure {
            path,
            message: message.into(),
        });
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}
