use std::sync::Arc;

use triage_lib::{GestureOutcome, Issue, IssueStatus, SelectionStore, Target};

fn issue(id: &str, status: IssueStatus, impact: f64) -> Issue {
    Issue {
        id: id.to_string(),
        kind: "error".to_string(),
        error_message: String::new(),
        status,
        num_events: 0,
        num_users: 0,
        impact_score: impact,
    }
}

fn store() -> SelectionStore<Issue> {
    SelectionStore::new(vec![
        issue("open-1", IssueStatus::Open, 5.0),
        issue("resolved", IssueStatus::Resolved, 9.0),
        issue("open-2", IssueStatus::Open, 3.0),
    ])
}

// ============================================================================
// Bindings
// ============================================================================

#[test]
fn test_row_handler_only_on_eligible_rows() {
    let store = store();
    let bindings = store.bindings();

    assert_eq!(bindings.len(), 3);
    assert!(bindings.has_row_handler(0));
    assert!(!bindings.has_row_handler(1));
    assert!(bindings.has_row_handler(2));
    assert!(!bindings.control_enabled(1));
    assert!(!bindings.has_row_handler(3));
}

// ============================================================================
// Dispatch
// ============================================================================

#[test]
fn test_row_click_toggles_once() {
    let mut store = store();
    let bindings = store.bindings();

    let outcome = bindings.dispatch(&mut store, Target::Row(0));

    assert_eq!(
        outcome,
        GestureOutcome::Toggled {
            index: 0,
            selected: true
        }
    );
    assert!(store.is_selected(0));
}

#[test]
fn test_control_click_does_not_double_toggle() {
    let mut store = store();
    let bindings = store.bindings();

    // The click bubbles control -> row; only one toggle may happen
    bindings.dispatch(&mut store, Target::Control(2));
    assert!(store.is_selected(2));

    bindings.dispatch(&mut store, Target::Control(2));
    assert!(!store.is_selected(2));
}

#[test]
fn test_row_and_control_converge() {
    let mut store = store();
    let bindings = store.bindings();

    bindings.dispatch(&mut store, Target::Row(0));
    let outcome = bindings.dispatch(&mut store, Target::Control(0));

    assert_eq!(
        outcome,
        GestureOutcome::Toggled {
            index: 0,
            selected: false
        }
    );
    assert_eq!(store.aggregates().selected_count, 0);
}

#[test]
fn test_clicks_on_ineligible_row_are_ignored() {
    let mut store = store();
    let bindings = store.bindings();

    assert_eq!(
        bindings.dispatch(&mut store, Target::Row(1)),
        GestureOutcome::Ignored
    );
    assert_eq!(
        bindings.dispatch(&mut store, Target::Control(1)),
        GestureOutcome::Ignored
    );
    assert!(!store.is_selected(1));
}

#[test]
fn test_out_of_range_target_is_ignored() {
    let mut store = store();
    let bindings = store.bindings();

    assert_eq!(
        bindings.dispatch(&mut store, Target::Control(10)),
        GestureOutcome::Ignored
    );
    assert_eq!(store.selection(), &[false, false, false]);
}

#[test]
fn test_stale_bindings_after_reset_are_ignored() {
    let mut store = store();
    let stale = store.bindings();

    store.replace_rows(Arc::from(vec![issue("new", IssueStatus::Open, 1.0)]));

    assert_eq!(
        stale.dispatch(&mut store, Target::Row(0)),
        GestureOutcome::Ignored
    );
    assert!(!store.is_selected(0));

    let fresh = store.bindings();
    assert!(matches!(
        fresh.dispatch(&mut store, Target::Row(0)),
        GestureOutcome::Toggled { index: 0, .. }
    ));
}

#[test]
fn test_target_index() {
    assert_eq!(Target::Row(4).index(), 4);
    assert_eq!(Target::Control(7).index(), 7);
}
