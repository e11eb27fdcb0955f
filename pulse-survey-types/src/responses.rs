use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ResponseValue;

/// Error type for response access operations.
#[derive(Debug, thiserror::Error)]
pub enum ResponseError {
    #[error("Missing response for question: {0}")]
    Missing(String),

    #[error("Type mismatch for question '{id}': expected {expected}, got {actual}")]
    TypeMismatch {
        id: String,
        expected: &'static str,
        actual: &'static str,
    },
}

/// Answers collected during a survey session, keyed by question id.
///
/// Keys are kept ordered so the serialized form is stable: the same answers
/// always produce the same bytes, whatever order they were recorded in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseMap {
    values: BTreeMap<String, ResponseValue>,
}

impl ResponseMap {
    /// Create a new empty response map.
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Insert or replace the answer for a question.
    ///
    /// Returns the previous answer, if any.
    pub fn insert(
        &mut self,
        id: impl Into<String>,
        value: impl Into<ResponseValue>,
    ) -> Option<ResponseValue> {
        self.values.insert(id.into(), value.into())
    }

    /// Get the answer for a question.
    pub fn get(&self, id: &str) -> Option<&ResponseValue> {
        self.values.get(id)
    }

    /// Check if a question has been answered.
    pub fn contains(&self, id: &str) -> bool {
        self.values.contains_key(id)
    }

    /// Get an iterator over all id-value pairs, ordered by id.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResponseValue)> {
        self.values.iter().map(|(id, value)| (id.as_str(), value))
    }

    /// Get the number of answered questions.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if nothing has been answered.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get a text answer.
    pub fn get_text(&self, id: &str) -> Result<&str, ResponseError> {
        match self.get(id) {
            Some(ResponseValue::Text(s)) => Ok(s),
            Some(other) => Err(ResponseError::TypeMismatch {
                id: id.to_string(),
                expected: "Text",
                actual: other.type_name(),
            }),
            None => Err(ResponseError::Missing(id.to_string())),
        }
    }

    /// Get an integer answer.
    pub fn get_int(&self, id: &str) -> Result<i64, ResponseError> {
        match self.get(id) {
            Some(ResponseValue::Int(i)) => Ok(*i),
            Some(other) => Err(ResponseError::TypeMismatch {
                id: id.to_string(),
                expected: "Int",
                actual: other.type_name(),
            }),
            None => Err(ResponseError::Missing(id.to_string())),
        }
    }
}

impl<'a> IntoIterator for &'a ResponseMap {
    type Item = (&'a String, &'a ResponseValue);
    type IntoIter = std::collections::btree_map::Iter<'a, String, ResponseValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for ResponseMap
where
    K: Into<String>,
    V: Into<ResponseValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_is_an_upsert() {
        let mut responses = ResponseMap::new();
        assert_eq!(responses.insert("q1", 3), None);
        assert_eq!(responses.insert("q1", 4), Some(ResponseValue::Int(3)));
        assert_eq!(responses.len(), 1);
        assert_eq!(responses.get_int("q1").unwrap(), 4);
    }

    #[test]
    fn type_mismatch_error() {
        let mut responses = ResponseMap::new();
        responses.insert("q1", 2);

        let result = responses.get_text("q1");
        assert!(matches!(result, Err(ResponseError::TypeMismatch { .. })));
        assert!(matches!(
            responses.get_int("q2"),
            Err(ResponseError::Missing(_))
        ));
    }

    #[test]
    fn serialization_does_not_depend_on_insertion_order() {
        let a: ResponseMap = [("q2", ResponseValue::from("x")), ("q1", 5.into())]
            .into_iter()
            .collect();
        let b: ResponseMap = [("q1", ResponseValue::from(5)), ("q2", "x".into())]
            .into_iter()
            .collect();
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
        assert_eq!(serde_json::to_string(&a).unwrap(), r#"{"q1":5,"q2":"x"}"#);
    }
}
