//! The completion payload and the port it is delivered through.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{ActionSelection, PrioritySelection, ResponseMap};

/// Everything a finished session hands to the results collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub survey_id: String,
    pub respondent_id: String,
    pub responses: ResponseMap,
    pub priorities: PrioritySelection,
    pub actions: ActionSelection,
    pub completed_at: DateTime<Utc>,
    /// Whole minutes from session start to completion, rounded to nearest.
    pub elapsed_minutes: i64,
}

/// Whole minutes between two instants, rounded to nearest, never negative.
pub fn elapsed_minutes(started_at: DateTime<Utc>, completed_at: DateTime<Utc>) -> i64 {
    let seconds = completed_at.signed_duration_since(started_at).num_seconds().max(0);
    (seconds + 30) / 60
}

/// Outbound port to the results collaborator.
///
/// The engine delivers each submission once and does not retry; retrying or
/// queueing belongs to the implementation.
pub trait SubmissionSink {
    /// The error type for this sink.
    type Error: Into<anyhow::Error>;

    fn submit(&mut self, submission: &Submission) -> Result<(), Self::Error>;
}

/// A sink that keeps submissions in memory.
///
/// Useful for testing hosts and catalogs without a results service.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    submissions: Vec<Submission>,
    reject_with: Option<String>,
}

/// Error type for RecordingSink.
#[derive(Debug, thiserror::Error)]
#[error("Submission rejected: {0}")]
pub struct Rejected(pub String);

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink that refuses every submission with `message`.
    pub fn rejecting(message: impl Into<String>) -> Self {
        Self {
            submissions: Vec::new(),
            reject_with: Some(message.into()),
        }
    }

    /// Start accepting submissions.
    pub fn accept(&mut self) {
        self.reject_with = None;
    }

    pub fn submissions(&self) -> &[Submission] {
        &self.submissions
    }

    pub fn last(&self) -> Option<&Submission> {
        self.submissions.last()
    }
}

impl SubmissionSink for RecordingSink {
    type Error = Rejected;

    fn submit(&mut self, submission: &Submission) -> Result<(), Self::Error> {
        if let Some(message) = &self.reject_with {
            return Err(Rejected(message.clone()));
        }
        self.submissions.push(submission.clone());
        Ok(())
    }
}
