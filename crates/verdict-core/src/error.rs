//! Error types for Verdict Core

use thiserror::Error;

/// Core error type
///
/// Tree evaluation itself is infallible: nodes that match no known shape fall
/// back to the empty node, and a degenerate average completes with NaN. Errors
/// only arise at the loading boundary, before a traversal starts.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid tree document: {0}")]
    InvalidDocument(#[from] serde_json::Error),

    #[error("Duplicate question key: {0}")]
    DuplicateKey(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_key_display() {
        let error = CoreError::DuplicateKey("color".to_string());
        assert!(error.to_string().contains("Duplicate question key"));
        assert!(error.to_string().contains("color"));
    }
}
