//! Per-instance engine configuration

use rand::Rng;
use serde::{Deserialize, Serialize};
use verdict_core::DecisionTable;

/// Configuration for one tree instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Unique instance identifier
    pub id: String,

    /// Form-field naming prefix; control names are `{name}[{question key}]`
    pub name: String,

    /// Placeholder text shown for an unanswered question
    pub label: String,

    /// Pre-seeded decision table
    #[serde(default)]
    pub decisions: DecisionTable,
}

impl TreeConfig {
    /// Create a configuration with a random instance id and derived defaults
    pub fn new() -> Self {
        let id = rand::thread_rng().gen_range(0..1000u32).to_string();
        Self {
            name: format!("decision-tree[{}]", id),
            label: "- Select".to_string(),
            decisions: DecisionTable::new(),
            id,
        }
    }

    /// Set the instance id; the name prefix follows unless set explicitly
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self.name = format!("decision-tree[{}]", self.id);
        self
    }

    /// Set the form-field naming prefix
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the placeholder text
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Pre-seed the decision table
    pub fn with_decisions(mut self, decisions: DecisionTable) -> Self {
        self.decisions = decisions;
        self
    }

    /// Form-field name for one question's control
    pub fn field_name(&self, question_key: &str) -> String {
        format!("{}[{}]", self.name, question_key)
    }

    /// Unique element id for one question's control
    pub fn control_id(&self, question_key: &str) -> String {
        format!("decision-tree-{}-question-{}", self.id, question_key)
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self::new()
    }
}
