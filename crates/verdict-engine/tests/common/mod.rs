//! Common test utilities for engine integration tests

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use verdict_core::{DecisionTable, Node, Outcome, Question};
use verdict_engine::{OptionChoice, Presenter, PromptHandle, TraversalEngine, TreeConfig, TreeEvent};

/// Install a test subscriber so RUST_LOG makes engine traces visible
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Parse an inline JSON tree document
pub fn tree(document: &str) -> Node {
    Node::from_json(document).expect("test tree should parse")
}

/// Config with a fixed id and a pre-seeded decision table
pub fn seeded(pairs: &[(&str, &str)]) -> TreeConfig {
    let decisions: DecisionTable = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    TreeConfig::new().with_id("test").with_decisions(decisions)
}

/// Headless engine over an inline tree with seeded decisions
pub fn engine(document: &str, pairs: &[(&str, &str)]) -> TraversalEngine {
    init_tracing();
    TraversalEngine::new(tree(document), seeded(pairs))
}

/// Engine wired to a recording presenter; returns the prompt action log too
pub fn recording_engine(document: &str, pairs: &[(&str, &str)]) -> (TraversalEngine, PromptLog) {
    init_tracing();
    let (presenter, log) = RecordingPresenter::new();
    let engine = TraversalEngine::with_presenter(tree(document), seeded(pairs), Box::new(presenter));
    (engine, log)
}

/// Unwrap a completion event, panicking on anything else
pub fn expect_complete(event: Option<TreeEvent>) -> Outcome {
    match event {
        Some(TreeEvent::Complete(outcome)) => outcome,
        other => panic!("expected completion, got {:?}", other),
    }
}

/// Everything the engine asked of the presentation layer, in order
#[derive(Debug, Clone, PartialEq)]
pub enum PromptAction {
    Presented { key: String, options: Vec<String> },
    Selected { key: String, answer: String },
    Answered { key: String },
    Destroyed { key: String },
}

pub type PromptLog = Rc<RefCell<Vec<PromptAction>>>;

/// Presenter that records every call for later assertions
pub struct RecordingPresenter {
    log: PromptLog,
}

impl RecordingPresenter {
    pub fn new() -> (Self, PromptLog) {
        let log: PromptLog = Rc::new(RefCell::new(Vec::new()));
        (Self { log: Rc::clone(&log) }, log)
    }
}

impl Presenter for RecordingPresenter {
    fn present(
        &mut self,
        question: &Question,
        options: &[OptionChoice],
        _config: &TreeConfig,
    ) -> Box<dyn PromptHandle> {
        self.log.borrow_mut().push(PromptAction::Presented {
            key: question.key.clone(),
            options: options.iter().map(|o| o.key.clone()).collect(),
        });
        Box::new(RecordingPrompt {
            key: question.key.clone(),
            log: Rc::clone(&self.log),
            selection: None,
        })
    }
}

struct RecordingPrompt {
    key: String,
    log: PromptLog,
    selection: Option<String>,
}

impl PromptHandle for RecordingPrompt {
    fn select(&mut self, answer_key: &str) {
        self.selection = Some(answer_key.to_string());
        self.log.borrow_mut().push(PromptAction::Selected {
            key: self.key.clone(),
            answer: answer_key.to_string(),
        });
    }

    fn mark_answered(&mut self) {
        self.log
            .borrow_mut()
            .push(PromptAction::Answered { key: self.key.clone() });
    }

    fn current_value(&self) -> Option<String> {
        self.selection.clone()
    }

    fn destroy(&mut self) {
        self.log
            .borrow_mut()
            .push(PromptAction::Destroyed { key: self.key.clone() });
    }
}

/// Keys of the questions presented so far, in order
pub fn presented_keys(log: &PromptLog) -> Vec<String> {
    log.borrow()
        .iter()
        .filter_map(|action| match action {
            PromptAction::Presented { key, .. } => Some(key.clone()),
            _ => None,
        })
        .collect()
}

/// Keys of the prompts destroyed so far, in order
pub fn destroyed_keys(log: &PromptLog) -> Vec<String> {
    log.borrow()
        .iter()
        .filter_map(|action| match action {
            PromptAction::Destroyed { key } => Some(key.clone()),
            _ => None,
        })
        .collect()
}
