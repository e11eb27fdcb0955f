//! Durable state of one in-flight session.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::{ActionSelection, PrioritySelection, ResponseMap, ResumableSection};

/// Storage key prefix used when no configuration overrides it.
pub const DEFAULT_KEY_PREFIX: &str = "survey-progress";

/// Respondent id used for sessions without one.
pub const ANONYMOUS: &str = "anonymous";

/// Identity of a survey session: which survey, and who is taking it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionKey {
    survey_id: String,
    respondent_id: Option<String>,
}

impl SessionKey {
    pub fn new(survey_id: impl Into<String>, respondent_id: Option<&str>) -> Self {
        Self {
            survey_id: survey_id.into(),
            respondent_id: respondent_id.map(str::to_string),
        }
    }

    pub fn survey_id(&self) -> &str {
        &self.survey_id
    }

    /// The respondent id, or `"anonymous"`.
    pub fn respondent(&self) -> &str {
        self.respondent_id.as_deref().unwrap_or(ANONYMOUS)
    }

    /// `"{prefix}-{surveyId}-{respondentId|anonymous}"`.
    pub fn storage_key(&self, prefix: &str) -> String {
        format!("{prefix}-{}-{}", self.survey_id, self.respondent())
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.storage_key(DEFAULT_KEY_PREFIX))
    }
}

/// The persisted record of a session in Part A or Part B.
///
/// ```json
/// {
///   "section": "part-a",
///   "pageIndex": 4,
///   "responses": { "q1": 4, "q13": "Monthly" },
///   "priorities": ["Leadership"],
///   "actions": [],
///   "savedAt": "2026-10-19T09:30:00Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSnapshot {
    pub section: ResumableSection,

    /// Current page. Only meaningful in Part A.
    pub page_index: usize,

    pub responses: ResponseMap,

    pub priorities: PrioritySelection,

    pub actions: ActionSelection,

    pub saved_at: DateTime<Utc>,

    /// When the session was first activated, for measuring elapsed time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
}

impl ProgressSnapshot {
    /// `now - saved_at < retention`.
    pub fn is_fresh(&self, now: DateTime<Utc>, retention: Duration) -> bool {
        now.signed_duration_since(self.saved_at) < retention
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(payload: &str) -> serde_json::Result<Self> {
        serde_json::from_str(payload)
    }
}
