//! Requirement criteria and their evaluation

use crate::state::DecisionTable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One criterion on a prior decision: either an exact answer key or a set of
/// acceptable answer keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Criterion {
    Equals(String),
    OneOf(Vec<String>),
}

/// Conditional-visibility criteria, keyed by question key.
///
/// Evaluation is a pure predicate over the decision table: the same table
/// always yields the same result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Requirements(pub BTreeMap<String, Criterion>);

impl Criterion {
    /// Whether a recorded answer satisfies this criterion
    pub fn matches(&self, answer: &str) -> bool {
        match self {
            Criterion::Equals(expected) => answer == expected,
            Criterion::OneOf(accepted) => accepted.iter().any(|a| a == answer),
        }
    }
}

impl Requirements {
    /// True iff every criterion matches the decision table.
    ///
    /// A question that was never decided satisfies no criterion; that is a
    /// normal "requirement unmet" outcome, not an error.
    pub fn satisfied_by(&self, decisions: &DecisionTable) -> bool {
        self.0.iter().all(|(key, criterion)| {
            decisions
                .get(key)
                .map_or(false, |answer| criterion.matches(answer))
        })
    }
}
