//! Node shapes of the decision tree

use super::requirements::Requirements;
use crate::state::DecisionTable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// The reserved option key used when a recorded answer matches no option.
pub const DEFAULT_OPTION: &str = "default";

/// One unit of the decision tree.
///
/// Variant order is load-bearing: `#[serde(untagged)]` tries variants top to
/// bottom, which realizes the shape precedence Question > Value > Factor >
/// Group > Empty. The final variant accepts any JSON object, so a malformed
/// node degrades to an empty node instead of a deserialization error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    /// A question offering keyed options
    Question(Arc<Question>),
    /// A terminal numeric value; evaluation ends here
    Value(ValueNode),
    /// A multiplier applied to the final value at completion
    Factor(FactorNode),
    /// An ordered group of sibling questions
    Group(GroupNode),
    /// Anything else; evaluation proceeds to the next pending question
    Empty(serde_json::Map<String, serde_json::Value>),
}

/// A question among whose options the user must decide.
///
/// Sibling order is not stored here. The author tree stays immutable and
/// shareable across engine instances; each engine records sibling links in
/// its own side table when it processes a [`GroupNode`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Unique question key; doubles as the decision-table key
    pub key: String,

    /// Display label. Questions without a label are never surfaced
    /// interactively; they can only be answered from the decision table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Conditional-visibility criteria checked against prior decisions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Requirements>,

    /// Answer key to child branch. BTreeMap keeps presentation order
    /// deterministic.
    pub options: BTreeMap<String, OptionEntry>,
}

/// Terminal value node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueNode {
    pub value: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Requirements>,
}

/// Factor node; contributes a multiplier keyed by its parent question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorNode {
    pub factor: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Requirements>,
}

/// Ordered sequence of sibling questions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupNode {
    pub questions: Vec<Arc<Question>>,
}

/// The branch an option maps to.
///
/// A bare number is a terminal value, a bare string is a display label with
/// no branch behind it (answering it neither descends nor produces a value),
/// and an object is a full child node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionEntry {
    Value(f64),
    Label(String),
    Node(Arc<Node>),
}

impl Node {
    /// Conditional-visibility criteria of this node, if any
    pub fn requirements(&self) -> Option<&Requirements> {
        match self {
            Node::Question(q) => q.requirements.as_ref(),
            Node::Value(v) => v.requirements.as_ref(),
            Node::Factor(f) => f.requirements.as_ref(),
            Node::Group(_) | Node::Empty(_) => None,
        }
    }

    /// Display label of this node, if any
    pub fn label(&self) -> Option<&str> {
        match self {
            Node::Question(q) => q.label.as_deref(),
            Node::Value(v) => v.label.as_deref(),
            Node::Factor(f) => f.label.as_deref(),
            Node::Group(_) | Node::Empty(_) => None,
        }
    }
}

impl OptionEntry {
    /// The terminal value, when this entry is a bare number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            OptionEntry::Value(n) => Some(*n),
            _ => None,
        }
    }

    /// Whether this entry may currently be offered as an answer.
    ///
    /// Only full child nodes carry requirements; bare numbers and labels are
    /// always selectable.
    pub fn selectable(&self, decisions: &DecisionTable) -> bool {
        match self {
            OptionEntry::Node(node) => node
                .requirements()
                .map_or(true, |reqs| reqs.satisfied_by(decisions)),
            _ => true,
        }
    }

    /// Text shown for this entry in an interactive control, falling back to
    /// the option key when the entry carries no label of its own.
    pub fn display_label(&self, key: &str) -> String {
        match self {
            OptionEntry::Value(n) => format_number(*n),
            OptionEntry::Label(text) => text.clone(),
            OptionEntry::Node(node) => node.label().unwrap_or(key).to_string(),
        }
    }
}

/// Mean of the option entries that are bare numbers.
///
/// Entries carrying labels or child nodes are ignored. An empty numeric set
/// yields NaN, the documented degenerate result when a question has neither
/// a matching option nor a default.
pub fn average(options: &BTreeMap<String, OptionEntry>) -> f64 {
    let mut sum = 0.0;
    let mut count = 0u32;
    for entry in options.values() {
        if let Some(n) = entry.as_number() {
            sum += n;
            count += 1;
        }
    }
    sum / f64::from(count)
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}
