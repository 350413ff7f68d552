//! Notifications produced by a traversal

use verdict_core::Outcome;

/// Notification emitted by the engine.
///
/// Events are queued, not delivered synchronously: the host drains them via
/// [`crate::TraversalEngine::poll_event`] after its own call returns. A tree
/// that resolves with zero interactive steps therefore still lets the caller
/// observe completion after starting it.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeEvent {
    /// A pass over the tree completed; fired once per completed pass
    Complete(Outcome),

    /// A revision invalidated previously asked questions; fired exactly once
    /// per orphan-pruning event
    Incomplete,
}
