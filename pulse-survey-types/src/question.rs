use serde::{Deserialize, Serialize};

use crate::{NO, ResponseValue, YES};

/// Lowest value on the numeric rating scale.
pub const RATING_MIN: i64 = 1;

/// Highest value on the numeric rating scale.
pub const RATING_MAX: i64 = 5;

/// A single question in a survey catalog.
///
/// Questions are supplied wholesale by the catalog and never mutated by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyQuestion {
    /// Unique identifier, used as the key in `ResponseMap`.
    id: String,

    /// The prompt text shown to the respondent.
    prompt: String,

    /// The kind of answer this question takes.
    kind: ResponseKind,

    /// Whether the question must be answered before its page can be left.
    #[serde(default = "required_by_default")]
    required: bool,

    /// Optional grouping tag (e.g. "Leadership").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<String>,

    /// Choices for multiple-choice questions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    options: Vec<String>,
}

fn required_by_default() -> bool {
    true
}

/// The kind of answer a question takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResponseKind {
    /// An integer on the `RATING_MIN..=RATING_MAX` scale.
    NumericRating,

    /// Exactly one of the question's options.
    MultipleChoice,

    /// Any text.
    FreeText,

    /// "yes" or "no".
    YesNo,
}

impl SurveyQuestion {
    /// Create a new required question.
    pub fn new(id: impl Into<String>, prompt: impl Into<String>, kind: ResponseKind) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            kind,
            required: true,
            category: None,
            options: Vec::new(),
        }
    }

    /// Create a required numeric-rating question.
    pub fn rating(id: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self::new(id, prompt, ResponseKind::NumericRating)
    }

    /// Create a required yes/no question.
    pub fn yes_no(id: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self::new(id, prompt, ResponseKind::YesNo)
    }

    /// Create a required free-text question.
    pub fn free_text(id: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self::new(id, prompt, ResponseKind::FreeText)
    }

    /// Create a required multiple-choice question.
    pub fn multiple_choice<I, S>(
        id: impl Into<String>,
        prompt: impl Into<String>,
        options: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut question = Self::new(id, prompt, ResponseKind::MultipleChoice);
        question.options = options.into_iter().map(Into::into).collect();
        question
    }

    /// Mark the question as optional.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Set the category tag.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Get the question id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the prompt text.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Get the response kind.
    pub fn kind(&self) -> ResponseKind {
        self.kind
    }

    /// Check if an answer is required.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Get the category tag, if any.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Get the multiple-choice options (empty for other kinds).
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Check that a value is a well-formed answer to this question.
    ///
    /// Returns `Err(message)` describing the mismatch otherwise.
    pub fn accepts(&self, value: &ResponseValue) -> Result<(), String> {
        match (self.kind, value) {
            (ResponseKind::NumericRating, ResponseValue::Int(rating)) => {
                if (RATING_MIN..=RATING_MAX).contains(rating) {
                    Ok(())
                } else {
                    Err(format!(
                        "Rating {rating} is outside {RATING_MIN}..={RATING_MAX}"
                    ))
                }
            }
            (ResponseKind::MultipleChoice, ResponseValue::Text(choice)) => {
                if self.options.iter().any(|option| option == choice) {
                    Ok(())
                } else {
                    Err(format!("'{choice}' is not one of the offered options"))
                }
            }
            (ResponseKind::YesNo, ResponseValue::Text(answer)) => {
                if answer == YES || answer == NO {
                    Ok(())
                } else {
                    Err(format!("Expected '{YES}' or '{NO}', got '{answer}'"))
                }
            }
            (ResponseKind::FreeText, ResponseValue::Text(_)) => Ok(()),
            (kind, other) => Err(format!(
                "A {kind:?} question cannot take a {} answer",
                other.type_name()
            )),
        }
    }
}
