//! The decision table: recorded answers keyed by question key

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Mapping from question key to the chosen answer key.
///
/// A key present in the table means that question's branch has been taken,
/// whether or not the question was ever surfaced interactively. The table may
/// be pre-seeded at initialization to replay a stored questionnaire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecisionTable(HashMap<String, String>);

impl DecisionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, question_key: &str) -> Option<&str> {
        self.0.get(question_key).map(String::as_str)
    }

    pub fn contains(&self, question_key: &str) -> bool {
        self.0.contains_key(question_key)
    }

    /// Record an answer, overwriting any previous one
    pub fn insert(&mut self, question_key: String, answer_key: String) {
        self.0.insert(question_key, answer_key);
    }

    pub fn remove(&mut self, question_key: &str) -> Option<String> {
        self.0.remove(question_key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter()
    }

    /// Owned copy for an outcome snapshot
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.0.clone()
    }
}

impl FromIterator<(String, String)> for DecisionTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
