//! Verdict Core - Core types for the Verdict decision-tree engine
//!
//! This crate provides the fundamental types used across the Verdict workspace:
//! - The decision-tree node model (tagged union over question, value, factor,
//!   question-group and empty nodes)
//! - Requirement criteria and their evaluation against recorded decisions
//! - The decision table and factor table shared by a traversal
//! - The completion outcome snapshot
//! - Error types

pub mod error;
pub mod outcome;
pub mod state;
pub mod tree;

// Re-export commonly used types
pub use error::CoreError;
pub use outcome::Outcome;
pub use state::{DecisionTable, FactorTable};
pub use tree::{
    average, Criterion, FactorNode, GroupNode, Node, OptionEntry, Question, Requirements,
    ValueNode, DEFAULT_OPTION,
};
