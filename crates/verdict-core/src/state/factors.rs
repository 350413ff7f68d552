//! The factor table: multipliers accumulated along the taken branches

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Mapping from question key to a multiplicative factor.
///
/// An entry exists iff that question's taken branch produced a factor node.
/// All entries are multiplied into the final value at completion; the fold is
/// order-independent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FactorTable(HashMap<String, f64>);

impl FactorTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, question_key: &str) -> Option<f64> {
        self.0.get(question_key).copied()
    }

    pub fn insert(&mut self, question_key: String, factor: f64) {
        self.0.insert(question_key, factor);
    }

    pub fn remove(&mut self, question_key: &str) -> Option<f64> {
        self.0.remove(question_key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Product of every recorded factor; 1.0 when empty
    pub fn product(&self) -> f64 {
        self.0.values().product()
    }

    /// Owned copy for an outcome snapshot
    pub fn snapshot(&self) -> HashMap<String, f64> {
        self.0.clone()
    }
}

impl FromIterator<(String, f64)> for FactorTable {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
