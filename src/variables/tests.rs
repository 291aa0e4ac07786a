//! Tests for the variable list module

use super::*;
use std::cell::RefCell;
use std::rc::Rc;

/// A list wired to an event log, so tests can assert on delivered notifications
fn observed_list(max_size: usize) -> (VariableList, Rc<RefCell<Vec<VariableEvent>>>) {
    let events: Rc<RefCell<Vec<VariableEvent>>> = Rc::new(RefCell::new(Vec::new()));
    let mut list = VariableList::new(max_size);
    let sink = Rc::clone(&events);
    list.observe(move |event| sink.borrow_mut().push(event.clone()));
    (list, events)
}

fn names_of(list: &VariableList) -> Vec<&str> {
    list.names().iter().map(|n| n.as_ref()).collect()
}

#[test]
fn test_add_and_order() {
    let (mut list, events) = observed_list(4);
    list.add("a").unwrap();
    list.add("b").unwrap();
    assert_eq!(names_of(&list), ["a", "b"]);
    assert_eq!(
        *events.borrow(),
        [
            VariableEvent::Added { name: "a".into() },
            VariableEvent::Added { name: "b".into() },
        ]
    );
}

#[test]
fn test_add_beyond_capacity_fails_without_mutating() {
    let (mut list, events) = observed_list(2);
    list.add("a").unwrap();
    list.add("b").unwrap();
    events.borrow_mut().clear();

    let err = list.add("c").unwrap_err();
    assert_eq!(
        err,
        VariableListError::CapacityExceeded {
            requested: 3,
            max_size: 2
        }
    );
    assert_eq!(names_of(&list), ["a", "b"]);
    assert!(events.borrow().is_empty());
}

#[test]
fn test_add_duplicate_rejected() {
    let (mut list, events) = observed_list(4);
    list.add("a").unwrap();
    events.borrow_mut().clear();

    let err = list.add("a").unwrap_err();
    assert_eq!(err, VariableListError::DuplicateName { name: "a".into() });
    assert_eq!(list.len(), 1);
    assert!(events.borrow().is_empty());
}

#[test]
fn test_set_all_replaces_atomically() {
    let (mut list, events) = observed_list(4);
    list.add("old").unwrap();
    events.borrow_mut().clear();

    list.set_all(&["x", "y", "z"]).unwrap();
    assert_eq!(names_of(&list), ["x", "y", "z"]);
    assert_eq!(*events.borrow(), [VariableEvent::AllReplaced]);
}

#[test]
fn test_set_all_over_capacity_fails() {
    let (mut list, events) = observed_list(2);
    list.add("keep").unwrap();
    events.borrow_mut().clear();

    let err = list.set_all(&["a", "b", "c"]).unwrap_err();
    assert_eq!(
        err,
        VariableListError::CapacityExceeded {
            requested: 3,
            max_size: 2
        }
    );
    assert_eq!(names_of(&list), ["keep"]);
    assert!(events.borrow().is_empty());
}

#[test]
fn test_set_all_duplicate_rejected() {
    let (mut list, events) = observed_list(4);
    let err = list.set_all(&["a", "b", "a"]).unwrap_err();
    assert_eq!(err, VariableListError::DuplicateName { name: "a".into() });
    assert!(list.is_empty());
    assert!(events.borrow().is_empty());
}

#[test]
fn test_remove_carries_index() {
    let (mut list, events) = observed_list(4);
    list.set_all(&["a", "b", "c"]).unwrap();
    events.borrow_mut().clear();

    list.remove("b").unwrap();
    assert_eq!(names_of(&list), ["a", "c"]);
    assert_eq!(
        *events.borrow(),
        [VariableEvent::Removed {
            name: "b".into(),
            index: 1
        }]
    );
}

#[test]
fn test_remove_absent_fails_without_mutating() {
    let (mut list, events) = observed_list(4);
    list.add("a").unwrap();
    events.borrow_mut().clear();

    let err = list.remove("z").unwrap_err();
    assert_eq!(err, VariableListError::NotFound { name: "z".into() });
    assert_eq!(names_of(&list), ["a"]);
    assert!(events.borrow().is_empty());
}

#[test]
fn test_shift_reorders_and_carries_delta() {
    let (mut list, events) = observed_list(4);
    list.set_all(&["a", "b", "c", "d"]).unwrap();
    events.borrow_mut().clear();

    list.shift("a", 2).unwrap();
    assert_eq!(names_of(&list), ["b", "c", "a", "d"]);

    list.shift("d", -3).unwrap();
    assert_eq!(names_of(&list), ["d", "b", "c", "a"]);

    assert_eq!(
        *events.borrow(),
        [
            VariableEvent::Moved {
                name: "a".into(),
                delta: 2
            },
            VariableEvent::Moved {
                name: "d".into(),
                delta: -3
            },
        ]
    );
}

#[test]
fn test_shift_zero_is_silent_no_op() {
    let (mut list, events) = observed_list(4);
    list.set_all(&["a", "b"]).unwrap();
    events.borrow_mut().clear();

    list.shift("a", 0).unwrap();
    assert_eq!(names_of(&list), ["a", "b"]);
    assert!(events.borrow().is_empty());
}

#[test]
fn test_shift_out_of_range_fails() {
    let (mut list, events) = observed_list(4);
    list.set_all(&["a", "b"]).unwrap();
    events.borrow_mut().clear();

    let err = list.shift("b", 1).unwrap_err();
    assert_eq!(
        err,
        VariableListError::MoveOutOfRange {
            index: 1,
            delta: 1,
            len: 2
        }
    );
    let err = list.shift("a", -1).unwrap_err();
    assert_eq!(
        err,
        VariableListError::MoveOutOfRange {
            index: 0,
            delta: -1,
            len: 2
        }
    );
    assert_eq!(names_of(&list), ["a", "b"]);
    assert!(events.borrow().is_empty());
}

#[test]
fn test_rename_keeps_position() {
    let (mut list, events) = observed_list(4);
    list.set_all(&["a", "b", "c"]).unwrap();
    events.borrow_mut().clear();

    list.rename("b", "mid").unwrap();
    assert_eq!(names_of(&list), ["a", "mid", "c"]);
    assert_eq!(
        *events.borrow(),
        [VariableEvent::Renamed {
            name: "mid".into(),
            index: 1
        }]
    );
}

#[test]
fn test_rename_to_self_is_silent_no_op() {
    let (mut list, events) = observed_list(4);
    list.add("x").unwrap();
    events.borrow_mut().clear();

    list.rename("x", "x").unwrap();
    assert_eq!(names_of(&list), ["x"]);
    assert!(events.borrow().is_empty());
}

#[test]
fn test_rename_to_existing_other_name_rejected() {
    let (mut list, events) = observed_list(4);
    list.set_all(&["a", "b"]).unwrap();
    events.borrow_mut().clear();

    let err = list.rename("a", "b").unwrap_err();
    assert_eq!(err, VariableListError::DuplicateName { name: "b".into() });
    assert_eq!(names_of(&list), ["a", "b"]);
    assert!(events.borrow().is_empty());
}

#[test]
fn test_events_delivered_before_return() {
    let seen = Rc::new(RefCell::new(0usize));
    let mut list = VariableList::new(4);
    let counter = Rc::clone(&seen);
    list.observe(move |_| *counter.borrow_mut() += 1);

    list.add("a").unwrap();
    assert_eq!(*seen.borrow(), 1);
    list.remove("a").unwrap();
    assert_eq!(*seen.borrow(), 2);
}

#[test]
fn test_multiple_observers_all_notified() {
    let (mut list, first) = observed_list(4);
    let second: Rc<RefCell<Vec<VariableEvent>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&second);
    list.observe(move |event| sink.borrow_mut().push(event.clone()));

    list.add("a").unwrap();
    assert_eq!(first.borrow().len(), 1);
    assert_eq!(*first.borrow(), *second.borrow());
}
