use serde::{Deserialize, Serialize};

/// Text stored for an affirmative yes/no answer.
pub const YES: &str = "yes";

/// Text stored for a negative yes/no answer.
pub const NO: &str = "no";

/// A single answer recorded for a question.
///
/// Serialized untagged, so a persisted answer is a bare JSON number or string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseValue {
    /// An integer value (from numeric-rating questions).
    Int(i64),

    /// A text value (free text, the chosen option, or "yes"/"no").
    Text(String),
}

impl ResponseValue {
    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Int(_) => None,
        }
    }

    /// Try to get this value as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            Self::Text(_) => None,
        }
    }

    /// Get the type name of this value for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "Int",
            Self::Text(_) => "Text",
        }
    }
}

impl From<String> for ResponseValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for ResponseValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<i64> for ResponseValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for ResponseValue {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<bool> for ResponseValue {
    fn from(b: bool) -> Self {
        Self::Text(if b { YES } else { NO }.to_string())
    }
}
