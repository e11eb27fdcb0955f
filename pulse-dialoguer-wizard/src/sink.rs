//! Submission sink that appends JSON lines to a file.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use pulse_survey::{Submission, SubmissionSink};
use thiserror::Error;
use tracing::info;

/// Error type for `JsonLinesSink`.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Failed to write submission: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode submission: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Appends each submission as one JSON object per line.
#[derive(Debug, Clone)]
pub struct JsonLinesSink {
    path: PathBuf,
}

impl JsonLinesSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SubmissionSink for JsonLinesSink {
    type Error = SinkError;

    fn submit(&mut self, submission: &Submission) -> Result<(), Self::Error> {
        let mut line = serde_json::to_string(submission)?;
        line.push('\n');

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        file.sync_all()?;

        info!(path = %self.path.display(), survey = %submission.survey_id, "submission recorded");
        Ok(())
    }
}
