use super::*;

#[derive(Debug, Clone, PartialEq)]
enum Op {
    Add(i32),
    Select(i32),
    Noop,
}

fn reduce(value: &i32, op: &Op) -> i32 {
    match op {
        Op::Add(delta) => value + delta,
        Op::Select(_) => value + 1000,
        Op::Noop => *value,
    }
}

fn policy() -> HistoryPolicy<Op> {
    HistoryPolicy::<Op>::new()
        .with_ignore(|op: &Op| matches!(op, Op::Select(_)))
        .with_merge(|previous: &Op, next: &Op| match (previous, next) {
            (Op::Add(a), Op::Add(b)) if a.signum() == b.signum() => Some(Op::Add(a + b)),
            _ => None,
        })
}

fn apply(state: &UndoableState<i32, Op>, op: Op) -> UndoableState<i32, Op> {
    undoable(state, HistoryCommand::Apply(op), reduce, &policy())
}

#[test]
fn unchanged_present_returns_same_state() {
    let state = UndoableState::create(0, 10);
    assert!(apply(&state, Op::Noop).ptr_eq(&state));
}

#[test]
fn ignored_actions_replace_present_without_entry() {
    let state = apply(&UndoableState::create(0, 10), Op::Select(1));
    assert_eq!(*state.present(), 1000);
    assert!(!state.can_undo());
}

#[test]
fn mergeable_actions_collapse_into_one_entry() {
    let state = UndoableState::create(0, 10);
    let state = apply(&state, Op::Add(1));
    let state = apply(&state, Op::Add(2));
    let state = apply(&state, Op::Add(3));
    assert_eq!(*state.present(), 6);
    assert_eq!(state.past().len(), 1);
    assert_eq!(state.actions().cloned().collect::<Vec<_>>(), vec![Op::Add(6)]);
    assert_eq!(*state.undo().present(), 0);
}

#[test]
fn unmergeable_actions_create_entries() {
    let state = apply(&apply(&UndoableState::create(0, 10), Op::Add(1)), Op::Add(-1));
    assert_eq!(*state.present(), 0);
    assert_eq!(state.past().len(), 2);
}

#[test]
fn no_merge_while_redo_is_pending() {
    let state = apply(&apply(&UndoableState::create(0, 10), Op::Add(1)), Op::Add(-5));
    let state = undoable(&state, HistoryCommand::Undo, reduce, &policy());
    let state = apply(&state, Op::Add(2));
    assert_eq!(*state.present(), 3);
    assert_eq!(state.past().len(), 2);
    assert!(!state.can_redo());
}

#[test]
fn undo_and_redo_commands_delegate() {
    let state = apply(&UndoableState::create(0, 10), Op::Add(4));
    let undone = undoable(&state, HistoryCommand::Undo, reduce, &policy());
    assert_eq!(*undone.present(), 0);
    let redone = undoable(&undone, HistoryCommand::Redo, reduce, &policy());
    assert_eq!(*redone.present(), 4);
}

#[test]
fn default_policy_records_everything() {
    let policy = HistoryPolicy::default();
    let state = undoable(&UndoableState::create(0, 10), HistoryCommand::Apply(Op::Select(1)), reduce, &policy);
    assert!(state.can_undo());
}
