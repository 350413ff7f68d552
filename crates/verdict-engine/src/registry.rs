//! Ask-order record of every question instance dispatched so far

use std::sync::Arc;
use verdict_core::Question;

/// Ordered record of asked questions.
///
/// Append-only except for suffix pruning on revision. Position records ask
/// order; backtracking searches most-recently-asked first. A question appears
/// at most once (tree loading rejects duplicate keys).
#[derive(Debug, Default)]
pub struct QuestionRegistry {
    asked: Vec<Arc<Question>>,
}

impl QuestionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a question as asked
    pub fn push(&mut self, question: Arc<Question>) {
        self.asked.push(question);
    }

    /// Whether a question has been asked
    pub fn contains(&self, question_key: &str) -> bool {
        self.asked.iter().any(|q| q.key == question_key)
    }

    /// Look up an asked question by key
    pub fn find(&self, question_key: &str) -> Option<Arc<Question>> {
        self.asked
            .iter()
            .find(|q| q.key == question_key)
            .map(Arc::clone)
    }

    /// Iterate in ask order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Question>> {
        self.asked.iter()
    }

    /// Iterate most-recently-asked first
    pub fn iter_newest_first(&self) -> impl Iterator<Item = &Arc<Question>> {
        self.asked.iter().rev()
    }

    /// Question keys in ask order
    pub fn keys(&self) -> Vec<String> {
        self.asked.iter().map(|q| q.key.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.asked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.asked.is_empty()
    }

    /// Remove everything asked strictly after `question_key` and return the
    /// removed suffix, oldest first. Returns `None` when the key was never
    /// asked; nothing is removed in that case.
    pub fn prune_after(&mut self, question_key: &str) -> Option<Vec<Arc<Question>>> {
        let position = self.asked.iter().position(|q| q.key == question_key)?;
        Some(self.asked.split_off(position + 1))
    }
}
