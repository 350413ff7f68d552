//! Core traversal engine

use crate::config::TreeConfig;
use crate::error::Result;
use crate::event::TreeEvent;
use crate::present::{HeadlessPresenter, OptionChoice, Presenter, PromptHandle};
use crate::registry::QuestionRegistry;
use serde::Serialize;
use std::collections::{HashMap, VecDeque};
use std::path::Path;
use std::sync::Arc;
use verdict_core::{
    average, DecisionTable, FactorTable, Node, OptionEntry, Outcome, Question, DEFAULT_OPTION,
};

/// Walks one decision tree instance.
///
/// The engine owns all mutable traversal state exclusively: the decision
/// table, the factor table, the ask-order registry and the per-instance
/// sibling chain. The author tree itself is never mutated and may be shared
/// across instances.
pub struct TraversalEngine {
    tree: Arc<Node>,
    config: TreeConfig,
    presenter: Box<dyn Presenter>,

    decisions: DecisionTable,
    factors: FactorTable,
    registry: QuestionRegistry,

    /// Sibling links recorded when a question group is processed, keyed by
    /// the left sibling's question key
    siblings: HashMap<String, Arc<Question>>,

    /// Live presentation handles, keyed by question key. Doubles as the
    /// "already surfaced" test that suppresses duplicate controls.
    prompts: HashMap<String, Box<dyn PromptHandle>>,

    /// Candidate final value; overwritten each time a branch yields one
    pending_value: Option<f64>,

    events: VecDeque<TreeEvent>,
    started: bool,
}

/// Debug snapshot of engine state
#[derive(Debug, Clone, Serialize)]
pub struct EngineState {
    pub id: String,
    pub name: String,
    pub pending_value: Option<f64>,
    pub asked: Vec<String>,
    pub decisions: HashMap<String, String>,
    pub factors: HashMap<String, f64>,
}

impl TraversalEngine {
    /// Create an engine over `tree` with no interactive presentation
    pub fn new(tree: Node, config: TreeConfig) -> Self {
        Self::with_presenter(tree, config, Box::new(HeadlessPresenter))
    }

    /// Create an engine that surfaces questions through `presenter`
    pub fn with_presenter(tree: Node, config: TreeConfig, presenter: Box<dyn Presenter>) -> Self {
        let decisions = config.decisions.clone();
        Self {
            tree: Arc::new(tree),
            config,
            presenter,
            decisions,
            factors: FactorTable::new(),
            registry: QuestionRegistry::new(),
            siblings: HashMap::new(),
            prompts: HashMap::new(),
            pending_value: None,
            events: VecDeque::new(),
            started: false,
        }
    }

    /// Create an engine from a JSON tree document
    pub fn from_json(document: &str, config: TreeConfig) -> Result<Self> {
        Ok(Self::new(Node::from_json(document)?, config))
    }

    /// Create an engine from a JSON tree file
    pub fn from_json_file(path: impl AsRef<Path>, config: TreeConfig) -> Result<Self> {
        let document = std::fs::read_to_string(path)?;
        Self::from_json(&document, config)
    }

    /// Begin the traversal at the root node.
    ///
    /// Runs synchronously until the tree either completes or reaches a
    /// question that awaits an [`update`](Self::update) call. Completion is
    /// observed by draining events afterwards, never inside this call.
    pub fn start(&mut self) {
        if self.started {
            tracing::warn!(id = %self.config.id, "engine already started");
            return;
        }
        self.started = true;
        tracing::debug!(id = %self.config.id, "starting decision tree");
        let root = Arc::clone(&self.tree);
        self.process(&root, None);
    }

    /// Apply a changed or newly made selection for a previously asked
    /// question.
    ///
    /// A genuine revision, one whose question already holds a decision, first
    /// prunes every question asked after it and emits
    /// [`TreeEvent::Incomplete`] before the new answer is reprocessed.
    /// Updating a question the engine never asked is ignored.
    pub fn update(&mut self, question_key: &str, new_answer: &str) {
        let Some(question) = self.registry.find(question_key) else {
            tracing::warn!(key = %question_key, "update for a question that was never asked");
            return;
        };
        if self.decisions.contains(question_key) {
            self.prune_orphans(&question);
        }
        self.answer(&question, new_answer);
    }

    /// Next queued notification, oldest first
    pub fn poll_event(&mut self) -> Option<TreeEvent> {
        self.events.pop_front()
    }

    /// Drain all queued notifications, oldest first
    pub fn drain_events(&mut self) -> Vec<TreeEvent> {
        self.events.drain(..).collect()
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    pub fn decisions(&self) -> &DecisionTable {
        &self.decisions
    }

    pub fn factors(&self) -> &FactorTable {
        &self.factors
    }

    pub fn registry(&self) -> &QuestionRegistry {
        &self.registry
    }

    /// Debug snapshot of the current traversal state
    pub fn state(&self) -> EngineState {
        EngineState {
            id: self.config.id.clone(),
            name: self.config.name.clone(),
            pending_value: self.pending_value,
            asked: self.registry.keys(),
            decisions: self.decisions.snapshot(),
            factors: self.factors.snapshot(),
        }
    }

    /// Dispatch one node.
    ///
    /// `parent_key` is the key of the question whose option led here; absent
    /// only for the root.
    fn process(&mut self, node: &Node, parent_key: Option<&str>) {
        match node {
            Node::Question(question) => self.ask(Arc::clone(question)),
            Node::Value(value) => self.advance(Some(value.value)),
            Node::Factor(factor) => {
                match parent_key {
                    Some(key) => {
                        tracing::debug!(key, factor = factor.factor, "recording factor");
                        self.factors.insert(key.to_string(), factor.factor);
                    }
                    None => {
                        tracing::warn!("factor node at tree root has no question to attach to")
                    }
                }
                self.advance(None);
            }
            Node::Group(group) => {
                if let Some(first) = group.questions.first() {
                    for pair in group.questions.windows(2) {
                        self.siblings
                            .insert(pair[0].key.clone(), Arc::clone(&pair[1]));
                    }
                    self.ask(Arc::clone(first));
                } else {
                    self.advance(None);
                }
            }
            Node::Empty(_) => self.advance(None),
        }
    }

    /// Ask a question, or answer it immediately when the answer is already
    /// known.
    fn ask(&mut self, question: Arc<Question>) {
        tracing::debug!(key = %question.key, "asking question");
        // Recorded even when disqualified below, so it is never re-attempted.
        self.registry.push(Arc::clone(&question));

        let qualified = question
            .requirements
            .as_ref()
            .map_or(true, |reqs| reqs.satisfied_by(&self.decisions));
        if !qualified {
            tracing::debug!(key = %question.key, "requirements unmet, skipping to sibling");
            match self.sibling_of(&question.key) {
                Some(sibling) if !self.registry.contains(&sibling.key) => self.ask(sibling),
                _ => self.advance(None),
            }
            return;
        }

        let decision = self.decisions.get(&question.key).map(String::from);

        // A known answer skips presentation entirely when the question is
        // already surfaced or can never be surfaced (no label).
        if let Some(answer) = &decision {
            if self.prompts.contains_key(&question.key) || question.label.is_none() {
                let answer = answer.clone();
                self.answer(&question, &answer);
                return;
            }
        }

        let choices = self.valid_choices(&question);
        let handle = self.presenter.present(&question, &choices, &self.config);
        self.prompts.insert(question.key.clone(), handle);

        // Replay a seeded answer through the fresh control when it still
        // names a selectable option.
        if let Some(answer) = decision {
            let selectable = question
                .options
                .get(&answer)
                .map_or(false, |entry| entry.selectable(&self.decisions));
            if selectable {
                if let Some(prompt) = self.prompts.get_mut(&question.key) {
                    prompt.select(&answer);
                }
                self.answer(&question, &answer);
            }
        }
    }

    /// Record an answer and descend into the chosen branch
    fn answer(&mut self, question: &Question, answer_key: &str) {
        tracing::debug!(key = %question.key, answer = %answer_key, "recording decision");
        self.decisions
            .insert(question.key.clone(), answer_key.to_string());

        if let Some(prompt) = self.prompts.get_mut(&question.key) {
            prompt.mark_answered();
        }

        // Presence, not truthiness: "0" is a perfectly good answer key.
        let child = question
            .options
            .get(answer_key)
            .or_else(|| question.options.get(DEFAULT_OPTION));
        match child {
            Some(entry) => match entry {
                OptionEntry::Value(value) => self.advance(Some(*value)),
                OptionEntry::Label(_) => self.advance(None),
                OptionEntry::Node(node) => {
                    let node = Arc::clone(node);
                    self.process(&node, Some(&question.key));
                }
            },
            None => {
                // No matching option and no default: fall back to the mean
                // of the numeric options.
                self.advance(Some(average(&question.options)));
            }
        }
    }

    /// Move to the next unresolved question, or complete.
    ///
    /// Scans the registry most-recently-asked first so the newest open branch
    /// resolves its siblings before older branches do.
    fn advance(&mut self, value: Option<f64>) {
        if let Some(v) = value {
            self.pending_value = Some(v);
        }
        tracing::debug!(state = ?self.state(), "advancing");

        let next = self.registry.iter_newest_first().find_map(|asked| {
            self.siblings
                .get(&asked.key)
                .filter(|sibling| !self.registry.contains(&sibling.key))
                .map(Arc::clone)
        });
        match next {
            Some(question) => self.ask(question),
            None => self.complete(),
        }
    }

    /// Fold the factors into the pending value and queue the outcome.
    ///
    /// A pass that never produced a value completes with NaN; degenerate
    /// results are data for the consumer, not errors.
    fn complete(&mut self) {
        let value = self.pending_value.unwrap_or(f64::NAN) * self.factors.product();
        tracing::info!(id = %self.config.id, value, "decision tree complete");
        self.events.push_back(TreeEvent::Complete(Outcome {
            value,
            factors: self.factors.snapshot(),
            decisions: self.decisions.snapshot(),
        }));
    }

    /// Invalidate everything asked after `question`.
    ///
    /// The orphans leave the registry and lose their controls; factors are
    /// cleared for the revised question and everything after it. The revised
    /// question's own decision entry stays in place, to be overwritten by
    /// the answer that follows.
    fn prune_orphans(&mut self, question: &Question) {
        let Some(removed) = self.registry.prune_after(&question.key) else {
            return;
        };
        tracing::debug!(key = %question.key, orphans = removed.len(), "pruning orphans");
        for orphan in &removed {
            if let Some(mut prompt) = self.prompts.remove(&orphan.key) {
                prompt.destroy();
            }
            self.factors.remove(&orphan.key);
        }
        self.factors.remove(&question.key);
        self.events.push_back(TreeEvent::Incomplete);
    }

    fn sibling_of(&self, question_key: &str) -> Option<Arc<Question>> {
        self.siblings.get(question_key).map(Arc::clone)
    }

    /// Option entries whose requirements currently pass, in option order
    fn valid_choices(&self, question: &Question) -> Vec<OptionChoice> {
        question
            .options
            .iter()
            .filter(|(_, entry)| entry.selectable(&self.decisions))
            .map(|(key, entry)| OptionChoice {
                key: key.clone(),
                label: entry.display_label(key),
            })
            .collect()
    }
}
