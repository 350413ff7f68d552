//! Presentation collaborator contract
//!
//! The engine never builds interactive controls itself. When a question needs
//! user input it hands the question and its currently valid options to a
//! [`Presenter`] and keeps the returned [`PromptHandle`]. Change
//! notifications flow the other way: the host routes the user's new selection
//! into [`crate::TraversalEngine::update`].

use crate::config::TreeConfig;
use verdict_core::Question;

/// One selectable option as offered to the user
#[derive(Debug, Clone, PartialEq)]
pub struct OptionChoice {
    /// Answer key recorded in the decision table when chosen
    pub key: String,

    /// Display text; the entry's own label, or the key when it has none
    pub label: String,
}

/// Renders interactive controls for questions
pub trait Presenter {
    /// Surface a control for `question` offering `options` plus a
    /// non-selectable placeholder, and return a handle to it.
    fn present(
        &mut self,
        question: &Question,
        options: &[OptionChoice],
        config: &TreeConfig,
    ) -> Box<dyn PromptHandle>;
}

/// Handle to one surfaced control
pub trait PromptHandle {
    /// Programmatically select an answer (used to replay seeded decisions)
    fn select(&mut self, answer_key: &str);

    /// Mark the control answered; its placeholder becomes non-selectable
    fn mark_answered(&mut self);

    /// Currently selected answer key, if any
    fn current_value(&self) -> Option<String>;

    /// Tear the control down; called when the question is orphaned
    fn destroy(&mut self);
}

/// No-UI presenter for headless evaluation.
///
/// Questions surfaced through it simply wait for an `update` call; useful
/// when the tree is driven entirely from a pre-seeded decision table or from
/// host code.
#[derive(Debug, Default)]
pub struct HeadlessPresenter;

impl Presenter for HeadlessPresenter {
    fn present(
        &mut self,
        _question: &Question,
        _options: &[OptionChoice],
        _config: &TreeConfig,
    ) -> Box<dyn PromptHandle> {
        Box::new(HeadlessPrompt::default())
    }
}

#[derive(Debug, Default)]
struct HeadlessPrompt {
    selection: Option<String>,
    answered: bool,
}

impl PromptHandle for HeadlessPrompt {
    fn select(&mut self, answer_key: &str) {
        self.selection = Some(answer_key.to_string());
    }

    fn mark_answered(&mut self) {
        self.answered = true;
    }

    fn current_value(&self) -> Option<String> {
        self.selection.clone()
    }

    fn destroy(&mut self) {
        self.selection = None;
    }
}
