//! Engine error types

use thiserror::Error;

/// Engine error type
///
/// Traversal never fails; these cover the loading boundary only. Host
/// protocol misuse (revising a question that was never asked, starting an
/// engine twice) is logged and ignored rather than surfaced here.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Tree loading error
    #[error("Tree error: {0}")]
    Tree(#[from] verdict_core::CoreError),

    /// I/O error while reading a tree document
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;
    use verdict_core::CoreError;

    #[test]
    fn test_tree_error_display() {
        let error = EngineError::from(CoreError::DuplicateKey("color".to_string()));
        assert!(error.to_string().contains("Tree error"));
        assert!(error.to_string().contains("color"));
    }
}
