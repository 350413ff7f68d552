//! Verdict Engine - Decision-tree traversal
//!
//! Walks an author-supplied decision tree against a mutable decision table:
//! questions are asked in tree order, answers open deeper branches or queued
//! sibling questions, and revising an earlier answer invalidates everything
//! asked after it. A completed pass yields an [`Outcome`] carrying the final
//! value with accumulated factors multiplied in.
//!
//! The engine is single-threaded and synchronous up to its suspension points:
//! it runs until either the tree completes or an interactive question awaits
//! an [`TraversalEngine::update`] call from the host. Completion and
//! incompleteness are reported through an event queue the host drains, never
//! synchronously inside the call that triggered them.

pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod present;
pub mod registry;

// Re-export main types
pub use config::TreeConfig;
pub use engine::{EngineState, TraversalEngine};
pub use error::{EngineError, Result};
pub use event::TreeEvent;
pub use present::{HeadlessPresenter, OptionChoice, Presenter, PromptHandle};
pub use registry::QuestionRegistry;

// Re-export commonly used types from verdict-core
pub use verdict_core::{DecisionTable, FactorTable, Node, Outcome, Question};
