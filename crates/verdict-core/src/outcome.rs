//! Completion outcome snapshot

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Immutable snapshot produced exactly once per completed traversal.
///
/// `value` is the terminal number with every accumulated factor multiplied
/// in. It may be NaN when the tree resolved through the degenerate average
/// path or never produced a value at all; that is data for the consumer to
/// judge, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    /// Final value, factors applied
    pub value: f64,

    /// Factors that went into the value, keyed by question key
    pub factors: HashMap<String, f64>,

    /// Full decision table at the moment of completion
    pub decisions: HashMap<String, String>,
}
