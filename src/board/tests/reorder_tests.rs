//! Reorder resolver tests: list-move arithmetic and canonical-index
//! translation.

use crate::board::domain::{
    BoardState, Column, ColumnId, ColumnKind, Priority, SortDirection, SortKey, Task, TaskId,
};
use crate::board::engine::{
    Action, ReorderError, Slot, apply, canonical_drop_index, canonical_index_of, reorder, transfer,
};
use crate::board::view::project;
use rstest::{fixture, rstest};

#[rstest]
#[case(0, 2, vec!["b", "c", "a", "d"])]
#[case(3, 0, vec!["d", "a", "b", "c"])]
#[case(0, 1, vec!["b", "a", "c", "d"])]
#[case(2, 2, vec!["a", "b", "c", "d"])]
fn reorder_moves_within_one_sequence(
    #[case] source: usize,
    #[case] destination: usize,
    #[case] expected: Vec<&str>,
) {
    let seq = ["a", "b", "c", "d"];
    assert_eq!(reorder(&seq, source, destination), Ok(expected));
}

#[rstest]
fn reorder_destination_addresses_the_shortened_sequence() {
    // Moving the head one slot down lands it after the former second
    // element, not two slots down.
    let seq = ["a", "b", "c"];
    assert_eq!(reorder(&seq, 0, 1), Ok(vec!["b", "a", "c"]));
}

#[rstest]
fn reorder_rejects_out_of_range_indices() {
    let seq = ["a", "b", "c"];
    assert_eq!(
        reorder(&seq, 3, 0),
        Err(ReorderError::SourceOutOfRange { index: 3, len: 3 })
    );
    assert_eq!(
        reorder(&seq, 0, 3),
        Err(ReorderError::DestinationOutOfRange { index: 3, len: 3 })
    );
}

#[rstest]
fn transfer_moves_between_sequences() {
    let source_seq = ["a", "b"];
    let destination_seq = ["x", "y"];

    assert_eq!(
        transfer(&source_seq, &destination_seq, 0, 1),
        Ok((vec!["b"], vec!["x", "a", "y"]))
    );
}

#[rstest]
fn transfer_appends_when_destination_equals_length() {
    let source_seq = ["a"];
    let destination_seq = ["x", "y"];

    assert_eq!(
        transfer(&source_seq, &destination_seq, 0, 2),
        Ok((vec![], vec!["x", "y", "a"]))
    );
}

#[rstest]
fn transfer_rejects_out_of_range_indices() {
    let source_seq = ["a"];
    let destination_seq = ["x"];

    assert_eq!(
        transfer(&source_seq, &destination_seq, 1, 0),
        Err(ReorderError::SourceOutOfRange { index: 1, len: 1 })
    );
    assert_eq!(
        transfer(&source_seq, &destination_seq, 0, 2),
        Err(ReorderError::DestinationOutOfRange { index: 2, len: 1 })
    );
}

/// A column whose display order differs from its canonical order: three
/// tasks stored low-to-high but viewed under a descending priority sort.
#[fixture]
fn sorted_view() -> BoardState {
    let column_id = ColumnId::new("col-1");
    let mut column = Column::new(column_id.clone(), "To Do", ColumnKind::Default);
    column.sort_key = SortKey::Priority;
    column.sort_direction = SortDirection::Desc;
    column.task_ids = vec![
        TaskId::new("task-low"),
        TaskId::new("task-medium"),
        TaskId::new("task-high"),
    ];

    let mut state = BoardState::new();
    for (id, priority) in [
        ("task-low", Priority::Low),
        ("task-medium", Priority::Medium),
        ("task-high", Priority::High),
    ] {
        let task = Task::new(TaskId::new(id), id, priority, column_id.clone());
        state.tasks.insert(task.id.clone(), task);
    }
    state.columns.insert(column_id.clone(), column);
    state.column_order = vec![column_id];
    state
}

#[rstest]
fn canonical_index_of_finds_the_stored_position(sorted_view: BoardState) {
    let column = sorted_view.column(&ColumnId::new("col-1")).expect("column");

    assert_eq!(canonical_index_of(column, &TaskId::new("task-high")), Some(2));
    assert_eq!(canonical_index_of(column, &TaskId::new("task-9")), None);
}

#[rstest]
fn display_slots_translate_back_to_canonical_indices(sorted_view: BoardState) {
    let column = sorted_view.column(&ColumnId::new("col-1")).expect("column");
    let displayed = project(column, &sorted_view, "");

    // Descending priority sort shows the canonical sequence reversed.
    let display_order: Vec<&str> = displayed.iter().map(|task| task.id.as_str()).collect();
    assert_eq!(display_order, vec!["task-high", "task-medium", "task-low"]);

    assert_eq!(canonical_drop_index(column, &displayed, 0), 2);
    assert_eq!(canonical_drop_index(column, &displayed, 1), 1);
    assert_eq!(canonical_drop_index(column, &displayed, 2), 0);
    // One past the last displayed slot appends at the canonical end.
    assert_eq!(canonical_drop_index(column, &displayed, 3), 3);
}

#[rstest]
fn translated_drag_matches_a_canonical_space_move(sorted_view: BoardState) {
    // The user drags the top displayed card (task-high) onto the slot
    // currently showing task-medium. In display space that is 0 -> 1; in
    // canonical space it must become 2 -> 1.
    let column = sorted_view.column(&ColumnId::new("col-1")).expect("column");
    let displayed = project(column, &sorted_view, "");

    let picked = displayed.first().expect("displayed task");
    let source_index = canonical_index_of(column, &picked.id).expect("canonical position");
    let destination_index = canonical_drop_index(column, &displayed, 1);

    let next = apply(
        &sorted_view,
        &Action::MoveTask {
            source: Slot::new(ColumnId::new("col-1"), source_index),
            destination: Slot::new(ColumnId::new("col-1"), destination_index),
            task_id: picked.id.clone(),
        },
    )
    .expect("translated move");

    let moved_column = next.column(&ColumnId::new("col-1")).expect("column");
    assert_eq!(
        moved_column.task_ids,
        vec![
            TaskId::new("task-low"),
            TaskId::new("task-high"),
            TaskId::new("task-medium"),
        ]
    );
    assert_eq!(next.verify_integrity(), Ok(()));
}
