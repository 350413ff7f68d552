//! Integration tests for answer revision: orphan pruning, incomplete
//! notifications and reprocessing.

mod common;

use common::{destroyed_keys, engine, expect_complete, recording_engine};
use verdict_engine::TreeEvent;

#[test]
fn test_revision_prunes_everything_asked_after() {
    let (mut engine, log) = recording_engine(
        r#"{"questions": [
            {"key": "q1", "label": "one", "options": {
                "a": {"key": "q1a", "label": "nested", "options": {"x": {"value": 10}}},
                "b": {"value": 99}
            }},
            {"key": "q2", "label": "two", "options": {"m": {"factor": 2}}}
        ]}"#,
        &[],
    );
    engine.start();

    // Answer the whole questionnaire interactively.
    engine.update("q1", "a");
    engine.update("q1a", "x");
    engine.update("q2", "m");
    assert_eq!(expect_complete(engine.poll_event()).value, 20.0);
    assert_eq!(engine.registry().keys(), vec!["q1", "q1a", "q2"]);

    // Revise q1: everything asked after it is orphaned.
    engine.update("q1", "b");

    assert_eq!(destroyed_keys(&log), vec!["q1a", "q2"]);
    assert!(!engine.registry().contains("q1a"));

    let events = engine.drain_events();
    let incompletes = events.iter().filter(|e| matches!(e, TreeEvent::Incomplete)).count();
    assert_eq!(incompletes, 1);
    // q2's remembered answer re-applied once it was re-asked, so the pass
    // resolved again: 99 * 2.
    match events.last() {
        Some(TreeEvent::Complete(outcome)) => {
            assert_eq!(outcome.value, 198.0);
            assert_eq!(outcome.decisions.get("q1").map(String::as_str), Some("b"));
        }
        other => panic!("expected completion after revision, got {:?}", other),
    }
    assert!(matches!(events.first(), Some(TreeEvent::Incomplete)));
}

#[test]
fn test_incomplete_fires_before_reprocessing_completes() {
    let mut engine = engine(
        r#"{"key": "q", "options": {"a": {"value": 1}, "b": {"value": 2}}}"#,
        &[("q", "a")],
    );
    engine.start();
    assert_eq!(expect_complete(engine.poll_event()).value, 1.0);

    engine.update("q", "b");
    let events = engine.drain_events();
    assert_eq!(events.len(), 2);
    assert!(matches!(events[0], TreeEvent::Incomplete));
    assert!(matches!(&events[1], TreeEvent::Complete(o) if o.value == 2.0));
}

#[test]
fn test_revised_question_loses_its_own_factor() {
    let (mut engine, _log) = recording_engine(
        r#"{"key": "q1", "label": "one", "options": {
            "a": {"factor": 2},
            "b": {"value": 5}
        }}"#,
        &[],
    );
    engine.start();

    engine.update("q1", "a");
    assert!(expect_complete(engine.poll_event()).value.is_nan());
    assert_eq!(engine.factors().get("q1"), Some(2.0));

    engine.update("q1", "b");
    let events = engine.drain_events();
    assert!(matches!(events[0], TreeEvent::Incomplete));
    match &events[1] {
        TreeEvent::Complete(outcome) => {
            assert_eq!(outcome.value, 5.0);
            assert!(outcome.factors.is_empty());
        }
        other => panic!("expected completion, got {:?}", other),
    }
    assert!(engine.factors().is_empty());
}

#[test]
fn test_initial_answer_via_update_is_not_a_revision() {
    let (mut engine, _log) = recording_engine(
        r#"{"key": "q", "label": "pick", "options": {"a": {"value": 1}}}"#,
        &[],
    );
    engine.start();
    engine.update("q", "a");

    let events = engine.drain_events();
    assert_eq!(events.len(), 1);
    assert!(matches!(&events[0], TreeEvent::Complete(o) if o.value == 1.0));
}

#[test]
fn test_update_for_never_asked_question_is_ignored() {
    let mut engine = engine(r#"{"key": "q", "options": {"a": {"value": 1}}}"#, &[("q", "a")]);
    engine.start();
    let _ = engine.drain_events();

    engine.update("phantom", "x");
    assert!(engine.drain_events().is_empty());
    assert!(!engine.decisions().contains("phantom"));
}

#[test]
fn test_orphan_decisions_survive_for_replay() {
    // Orphaned questions keep their decision-table entries; switching back
    // to the original branch replays them without user input.
    let (mut engine, _log) = recording_engine(
        r#"{"key": "q1", "label": "one", "options": {
            "a": {"key": "q1a", "label": "nested", "options": {"x": {"value": 10}}},
            "b": {"value": 99}
        }}"#,
        &[],
    );
    engine.start();
    engine.update("q1", "a");
    engine.update("q1a", "x");
    assert_eq!(expect_complete(engine.poll_event()).value, 10.0);

    engine.update("q1", "b");
    let events = engine.drain_events();
    assert!(matches!(events.last(), Some(TreeEvent::Complete(o)) if o.value == 99.0));

    // Back to the original branch: q1a's remembered answer re-applies.
    engine.update("q1", "a");
    let events = engine.drain_events();
    assert!(matches!(events.first(), Some(TreeEvent::Incomplete)));
    match events.last() {
        Some(TreeEvent::Complete(outcome)) => {
            assert_eq!(outcome.value, 10.0);
            assert_eq!(outcome.decisions.get("q1a").map(String::as_str), Some("x"));
        }
        other => panic!("expected completion, got {:?}", other),
    }
}
