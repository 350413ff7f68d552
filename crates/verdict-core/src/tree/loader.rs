//! Loading author trees from JSON documents

use super::node::{Node, OptionEntry, Question};
use crate::error::{CoreError, Result};
use std::collections::HashSet;

impl Node {
    /// Parse an author tree from a JSON document.
    ///
    /// The only structural validation is the one evaluation depends on:
    /// question keys must be unique, because the ask-order registry and the
    /// decision table are both keyed by them.
    pub fn from_json(document: &str) -> Result<Node> {
        let node: Node = serde_json::from_str(document)?;
        let mut seen = HashSet::new();
        collect_keys(&node, &mut seen)?;
        log::debug!("parsed decision tree with {} question(s)", seen.len());
        Ok(node)
    }
}

fn collect_keys(node: &Node, seen: &mut HashSet<String>) -> Result<()> {
    match node {
        Node::Question(question) => visit_question(question, seen),
        Node::Group(group) => {
            for question in &group.questions {
                visit_question(question, seen)?;
            }
            Ok(())
        }
        Node::Value(_) | Node::Factor(_) | Node::Empty(_) => Ok(()),
    }
}

fn visit_question(question: &Question, seen: &mut HashSet<String>) -> Result<()> {
    if !seen.insert(question.key.clone()) {
        return Err(CoreError::DuplicateKey(question.key.clone()));
    }
    for entry in question.options.values() {
        if let OptionEntry::Node(child) = entry {
            collect_keys(child, seen)?;
        }
    }
    Ok(())
}
