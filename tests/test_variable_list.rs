//! Integration tests for variable lists driving an analysis setup

use qmc_logic::{
    compute_minimal, sum_to_expression, Entry, TableData, TruthTable, VariableEvent, VariableList,
    VariableListError, MAX_INPUTS, MAX_OUTPUTS,
};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn test_capacity_matches_analyzer_bounds() {
    let mut inputs = VariableList::new(MAX_INPUTS);
    let names: Vec<String> = (0..MAX_INPUTS).map(|i| format!("x{}", i)).collect();
    inputs.set_all(&names).unwrap();
    assert_eq!(inputs.len(), MAX_INPUTS);

    let err = inputs.add("one_too_many").unwrap_err();
    assert!(matches!(err, VariableListError::CapacityExceeded { .. }));

    let outputs = VariableList::new(MAX_OUTPUTS);
    assert_eq!(outputs.max_size(), MAX_OUTPUTS);
}

#[test]
fn test_incremental_view_mirrors_list() {
    // A dependent view applies each event without re-reading the list, the
    // way a column header widget would.
    let mirror: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
    let mut list = VariableList::new(8);
    let sink = Rc::clone(&mirror);
    list.observe(move |event| {
        let mut view = sink.borrow_mut();
        match event {
            VariableEvent::AllReplaced => view.clear(),
            VariableEvent::Added { name } => view.push(name.to_string()),
            VariableEvent::Removed { index, .. } => {
                view.remove(*index);
            }
            VariableEvent::Moved { name, delta } => {
                let index = view.iter().position(|n| n.as_str() == name.as_ref()).unwrap();
                let moved = view.remove(index);
                view.insert((index as isize + delta) as usize, moved);
            }
            VariableEvent::Renamed { name, index } => {
                view[*index] = name.to_string();
            }
        }
    });

    list.add("a").unwrap();
    list.add("b").unwrap();
    list.add("c").unwrap();
    list.shift("a", 2).unwrap();
    list.rename("b", "sel").unwrap();
    list.remove("c").unwrap();

    // AllReplaced clears the mirror; rebuild happens by re-reading, which the
    // mirror signals with an empty view.
    let names: Vec<&str> = list.names().iter().map(|n| n.as_ref()).collect();
    assert_eq!(names, ["sel", "a"]);
    assert_eq!(*mirror.borrow(), ["sel", "a"]);
}

#[test]
fn test_list_order_defines_table_columns() {
    let mut inputs = VariableList::new(MAX_INPUTS);
    inputs.set_all(&["a", "b"]).unwrap();

    let labels: Vec<&str> = inputs.names().iter().map(|n| n.as_ref()).collect();
    let mut table = TableData::new(&labels, &["out"]).unwrap();
    table
        .set_output_column(0, &[Entry::Zero, Entry::One, Entry::Zero, Entry::One])
        .unwrap();

    // Output follows column b (bit 0, the rightmost column)
    let minimal = compute_minimal(&table, "out").unwrap();
    let expr = sum_to_expression(Some(&minimal), table.input_labels()).unwrap();
    assert_eq!(expr.to_string(), "b");

    // Reordering the variables changes which bit each name denotes
    inputs.shift("b", -1).unwrap();
    let labels: Vec<&str> = inputs.names().iter().map(|n| n.as_ref()).collect();
    let mut table = TableData::new(&labels, &["out"]).unwrap();
    table
        .set_output_column(0, &[Entry::Zero, Entry::One, Entry::Zero, Entry::One])
        .unwrap();
    let minimal = compute_minimal(&table, "out").unwrap();
    let expr = sum_to_expression(Some(&minimal), table.input_labels()).unwrap();
    assert_eq!(expr.to_string(), "a");
}

#[test]
fn test_failed_operations_deliver_no_events() {
    let events: Rc<RefCell<Vec<VariableEvent>>> = Rc::new(RefCell::new(Vec::new()));
    let mut list = VariableList::new(2);
    let sink = Rc::clone(&events);
    list.observe(move |event| sink.borrow_mut().push(event.clone()));

    list.set_all(&["a", "b"]).unwrap();
    events.borrow_mut().clear();

    assert!(list.add("c").is_err());
    assert!(list.remove("missing").is_err());
    assert!(list.shift("missing", 1).is_err());
    assert!(list.shift("a", -1).is_err());
    assert!(list.rename("missing", "x").is_err());
    assert!(list.set_all(&["x", "y", "z"]).is_err());

    assert!(events.borrow().is_empty());
    let names: Vec<&str> = list.names().iter().map(|n| n.as_ref()).collect();
    assert_eq!(names, ["a", "b"]);
}
