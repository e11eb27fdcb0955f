use crate::{Section, StoreError};

/// Error type for survey engine operations.
///
/// Blocked transitions are not errors; see `Transition::Blocked`.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// An operation was called before `activate`.
    #[error("Survey session has not been activated")]
    NotActivated,

    /// An operation was called in a section where it has no meaning.
    #[error("'{operation}' is not valid in section {section}")]
    InvalidState {
        operation: &'static str,
        section: Section,
    },

    #[error("Unknown question id: {0}")]
    UnknownQuestion(String),

    #[error("Unknown {area} label: {label}")]
    UnknownOption { area: &'static str, label: String },

    #[error("Invalid response for '{id}': {message}")]
    InvalidResponse { id: String, message: String },

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// The results collaborator refused the submission.
    #[error("Submission failed: {0}")]
    Submission(anyhow::Error),

    /// The submission was delivered and the session is complete, but its
    /// snapshot is still stored and would be offered for resume again.
    #[error("Submission delivered, but saved progress '{key}' could not be removed: {source}")]
    SnapshotNotCleared {
        key: String,
        #[source]
        source: StoreError,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl EngineError {
    /// Create a submission error from any error type.
    pub fn submission(err: impl Into<anyhow::Error>) -> Self {
        Self::Submission(err.into())
    }

    /// Check if this error indicates a caller defect (wrong section or input)
    /// rather than an environmental failure.
    pub fn is_caller_defect(&self) -> bool {
        matches!(
            self,
            Self::NotActivated
                | Self::InvalidState { .. }
                | Self::UnknownQuestion(_)
                | Self::UnknownOption { .. }
                | Self::InvalidResponse { .. }
        )
    }
}
