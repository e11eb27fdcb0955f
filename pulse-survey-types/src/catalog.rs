use serde::{Deserialize, Serialize};

use crate::{CatalogError, SurveyQuestion};

/// Source of the questions and selection areas for a survey.
///
/// The engine treats the catalog as opaque ordered input: it pages through the
/// questions in the order given and only checks selection cardinality.
pub trait SurveyCatalog {
    /// All questions, in presentation order.
    fn questions(&self) -> &[SurveyQuestion];

    /// Labels the respondent may rank as priorities.
    fn priority_areas(&self) -> &[String];

    /// Labels the respondent may pick as action areas.
    fn action_areas(&self) -> &[String];

    /// Look up a question by id.
    fn question(&self, id: &str) -> Option<&SurveyQuestion> {
        self.questions().iter().find(|q| q.id() == id)
    }
}

/// An owned catalog: questions plus the two auxiliary option sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Optional message shown before the survey starts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prelude: Option<String>,

    questions: Vec<SurveyQuestion>,

    priority_areas: Vec<String>,

    action_areas: Vec<String>,

    /// Optional message shown after the survey completes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epilogue: Option<String>,
}

impl Catalog {
    /// Create a catalog, rejecting empty inputs.
    pub fn new<P, A>(
        questions: Vec<SurveyQuestion>,
        priority_areas: P,
        action_areas: A,
    ) -> Result<Self, CatalogError>
    where
        P: IntoIterator,
        P::Item: Into<String>,
        A: IntoIterator,
        A::Item: Into<String>,
    {
        let catalog = Self {
            prelude: None,
            questions,
            priority_areas: priority_areas.into_iter().map(Into::into).collect(),
            action_areas: action_areas.into_iter().map(Into::into).collect(),
            epilogue: None,
        };
        catalog.check()?;
        Ok(catalog)
    }

    /// Check the cardinality requirements. Useful after deserializing.
    pub fn check(&self) -> Result<(), CatalogError> {
        if self.questions.is_empty() {
            return Err(CatalogError::NoQuestions);
        }
        if self.priority_areas.is_empty() {
            return Err(CatalogError::NoPriorityAreas);
        }
        if self.action_areas.is_empty() {
            return Err(CatalogError::NoActionAreas);
        }
        Ok(())
    }

    /// Set the prelude message.
    pub fn with_prelude(mut self, prelude: impl Into<String>) -> Self {
        self.prelude = Some(prelude.into());
        self
    }

    /// Set the epilogue message.
    pub fn with_epilogue(mut self, epilogue: impl Into<String>) -> Self {
        self.epilogue = Some(epilogue.into());
        self
    }

    /// Get the number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a checked catalog.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl SurveyCatalog for Catalog {
    fn questions(&self) -> &[SurveyQuestion] {
        &self.questions
    }

    fn priority_areas(&self) -> &[String] {
        &self.priority_areas
    }

    fn action_areas(&self) -> &[String] {
        &self.action_areas
    }
}
