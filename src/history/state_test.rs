use super::*;

type History = UndoableState<i32, &'static str>;

#[test]
fn capacity_evicts_oldest_entries() {
    let state = History::create(13, 2).executed(14, None).executed(15, None).executed(16, None);
    assert_eq!(state.past().len(), 2);
    let state = state.undo().undo();
    assert_eq!(*state.present(), 14);
    assert!(!state.can_undo());
    assert!(state.can_redo());
}

#[test]
fn undo_and_redo_on_empty_stacks_return_same_instance() {
    let state = History::create(1, 10);
    assert!(state.undo().ptr_eq(&state));
    assert!(state.redo().ptr_eq(&state));
}

#[test]
fn undo_then_redo_restores_present() {
    let state = History::create(1, 10).executed(2, Some("inc")).executed(3, Some("inc"));
    let undone = state.undo();
    assert_eq!(*undone.present(), 2);
    let redone = undone.redo();
    assert_eq!(*redone.present(), 3);
    assert!(!redone.can_redo());
    assert_eq!(redone.actions().count(), 2);
}

#[test]
fn executed_clears_future() {
    let state = History::create(1, 10).executed(2, None).undo().executed(5, None);
    assert_eq!(*state.present(), 5);
    assert!(!state.can_redo());
}

#[test]
fn actions_only_include_tagged_entries() {
    let state = History::create(0, 10).executed(1, Some("a")).executed(2, None).executed(3, Some("c"));
    assert_eq!(state.actions().copied().collect::<Vec<_>>(), vec!["a", "c"]);
    assert_eq!(state.last_action(), Some(&"c"));

    let state = state.undo();
    assert_eq!(state.actions().copied().collect::<Vec<_>>(), vec!["a"]);
    let state = state.undo();
    assert_eq!(*state.present(), 1);
    assert_eq!(state.last_action(), Some(&"a"));
}

#[test]
fn replace_present_keeps_stacks() {
    let state = History::create(0, 10).executed(1, Some("move"));
    let replaced = state.replace_present(2, None);
    assert_eq!(*replaced.present(), 2);
    assert_eq!(replaced.past().len(), 1);
    assert_eq!(replaced.actions().copied().collect::<Vec<_>>(), vec!["move"]);
    assert_eq!(*replaced.undo().present(), 0);
}

#[test]
fn replace_present_with_action_retags_last_entry() {
    let state = History::create(0, 10).executed(1, Some("move 1")).replace_present(3, Some("move 3"));
    assert_eq!(state.actions().copied().collect::<Vec<_>>(), vec!["move 3"]);
    let undone = state.undo();
    assert_eq!(*undone.present(), 0);
    assert_eq!(undone.future().last().and_then(Snapshot::action), Some(&"move 3"));
}

#[test]
fn zero_capacity_is_raised_to_one() {
    let state = History::create(0, 0).executed(1, None).executed(2, None);
    assert_eq!(state.capacity(), 1);
    assert_eq!(*state.undo().present(), 1);
    assert!(!state.undo().can_undo());
}
