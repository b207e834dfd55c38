//! Ordering/filtering engine tests: the column projection pipeline and
//! the list-view grouping.

use crate::board::domain::{
    BoardState, Column, ColumnId, ColumnKind, Priority, SortDirection, SortKey, Task, TaskId,
};
use crate::board::view::{
    ListSort, ListSortKey, cleared_sort, grouped, project, toggled_filter, toggled_sort,
};
use chrono::NaiveDate;
use rstest::{fixture, rstest};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn displayed_ids(tasks: &[&Task]) -> Vec<String> {
    tasks.iter().map(|task| task.id.to_string()).collect()
}

/// One column with a mix of priorities, due dates, and descriptions.
#[fixture]
fn mixed_board() -> BoardState {
    let column_id = ColumnId::new("col-1");
    let mut column = Column::new(column_id.clone(), "To Do", ColumnKind::Default);
    column.task_ids = vec![
        TaskId::new("task-1"),
        TaskId::new("task-2"),
        TaskId::new("task-3"),
        TaskId::new("task-4"),
    ];

    let tasks = [
        Task::new(
            TaskId::new("task-1"),
            "Fix login flow",
            Priority::Medium,
            column_id.clone(),
        )
        .with_description("Broken redirect after sign-in.")
        .with_due_date(date(2025, 7, 10)),
        Task::new(
            TaskId::new("task-2"),
            "Update dependencies",
            Priority::Low,
            column_id.clone(),
        )
        .with_due_date(date(2025, 7, 20)),
        Task::new(
            TaskId::new("task-3"),
            "Write release notes",
            Priority::High,
            column_id.clone(),
        )
        .with_description("Mention the new login screen."),
        Task::new(
            TaskId::new("task-4"),
            "Plan retrospective",
            Priority::Medium,
            column_id.clone(),
        ),
    ];

    let mut state = BoardState::new();
    for task in tasks {
        state.tasks.insert(task.id.clone(), task);
    }
    state.columns.insert(column_id.clone(), column);
    state.column_order = vec![column_id];
    state
}

fn column_of(state: &BoardState) -> &Column {
    state.column(&ColumnId::new("col-1")).expect("column")
}

#[rstest]
fn unsorted_unfiltered_projection_preserves_canonical_order(mixed_board: BoardState) {
    let displayed = project(column_of(&mixed_board), &mixed_board, "");

    assert_eq!(
        displayed_ids(&displayed),
        vec!["task-1", "task-2", "task-3", "task-4"]
    );
}

#[rstest]
fn search_matches_title_and_description_case_insensitively(mixed_board: BoardState) {
    let displayed = project(column_of(&mixed_board), &mixed_board, "LOGIN");

    // task-1 matches in the title, task-3 in the description.
    assert_eq!(displayed_ids(&displayed), vec!["task-1", "task-3"]);
}

#[rstest]
fn search_with_no_matches_empties_the_projection(mixed_board: BoardState) {
    let displayed = project(column_of(&mixed_board), &mixed_board, "quarterly");

    assert!(displayed.is_empty());
}

#[rstest]
fn priority_filter_keeps_canonical_relative_order(mut mixed_board: BoardState) {
    let column = mixed_board
        .columns
        .get_mut(&ColumnId::new("col-1"))
        .expect("column");
    column.filter_priorities = Some(vec![Priority::Medium]);

    let displayed = project(column_of(&mixed_board), &mixed_board, "");

    assert_eq!(displayed_ids(&displayed), vec!["task-1", "task-4"]);
}

#[rstest]
fn empty_filter_set_behaves_like_no_filter(mut mixed_board: BoardState) {
    let column = mixed_board
        .columns
        .get_mut(&ColumnId::new("col-1"))
        .expect("column");
    column.filter_priorities = Some(Vec::new());

    let displayed = project(column_of(&mixed_board), &mixed_board, "");

    assert_eq!(displayed.len(), 4);
}

#[rstest]
fn priority_sort_descending_puts_high_first(mut mixed_board: BoardState) {
    let column = mixed_board
        .columns
        .get_mut(&ColumnId::new("col-1"))
        .expect("column");
    column.sort_key = SortKey::Priority;
    column.sort_direction = SortDirection::Desc;

    let displayed = project(column_of(&mixed_board), &mixed_board, "");

    // The two Medium tasks keep their canonical relative order: the sort
    // is stable.
    assert_eq!(
        displayed_ids(&displayed),
        vec!["task-3", "task-1", "task-4", "task-2"]
    );
}

#[rstest]
#[case(SortDirection::Desc, vec!["task-2", "task-1", "task-3", "task-4"])]
#[case(SortDirection::Asc, vec!["task-1", "task-2", "task-3", "task-4"])]
fn due_date_sort_keeps_undated_tasks_last(
    mut mixed_board: BoardState,
    #[case] direction: SortDirection,
    #[case] expected: Vec<&str>,
) {
    let column = mixed_board
        .columns
        .get_mut(&ColumnId::new("col-1"))
        .expect("column");
    column.sort_key = SortKey::DueDate;
    column.sort_direction = direction;

    let displayed = project(column_of(&mixed_board), &mixed_board, "");

    // task-3 and task-4 have no due date and stay at the end in both
    // directions, in canonical relative order.
    assert_eq!(displayed_ids(&displayed), expected);
}

#[rstest]
fn pipeline_applies_search_then_filter_then_sort(mut mixed_board: BoardState) {
    let column = mixed_board
        .columns
        .get_mut(&ColumnId::new("col-1"))
        .expect("column");
    column.filter_priorities = Some(vec![Priority::Medium, Priority::High]);
    column.sort_key = SortKey::Priority;
    column.sort_direction = SortDirection::Asc;

    let displayed = project(column_of(&mixed_board), &mixed_board, "re");

    // Search keeps task-1 ("redirect" in the description), task-3
    // ("release notes"), and task-4 ("retrospective"); all three survive
    // the filter; ascending priority puts the Medium pair first in
    // canonical relative order.
    assert_eq!(
        displayed_ids(&displayed),
        vec!["task-1", "task-4", "task-3"]
    );
}

#[rstest]
fn projection_skips_dangling_task_refs(mut mixed_board: BoardState) {
    mixed_board.tasks.remove(&TaskId::new("task-2"));

    let displayed = project(column_of(&mixed_board), &mixed_board, "");

    assert_eq!(
        displayed_ids(&displayed),
        vec!["task-1", "task-3", "task-4"]
    );
}

#[rstest]
fn toggling_a_new_sort_key_starts_descending(mixed_board: BoardState) {
    let column = column_of(&mixed_board);

    assert_eq!(
        toggled_sort(column, SortKey::Priority),
        (SortKey::Priority, SortDirection::Desc)
    );
}

#[rstest]
fn toggling_the_same_sort_key_flips_direction(mut mixed_board: BoardState) {
    let column = mixed_board
        .columns
        .get_mut(&ColumnId::new("col-1"))
        .expect("column");
    column.sort_key = SortKey::Priority;
    column.sort_direction = SortDirection::Desc;

    assert_eq!(
        toggled_sort(column_of(&mixed_board), SortKey::Priority),
        (SortKey::Priority, SortDirection::Asc)
    );
}

#[rstest]
fn clearing_sort_resets_to_none_ascending() {
    assert_eq!(cleared_sort(), (SortKey::None, SortDirection::Asc));
}

#[rstest]
fn toggling_filters_adds_removes_and_clears(mut mixed_board: BoardState) {
    let with_high = toggled_filter(column_of(&mixed_board), Priority::High);
    assert_eq!(with_high, Some(vec![Priority::High]));

    let column = mixed_board
        .columns
        .get_mut(&ColumnId::new("col-1"))
        .expect("column");
    column.filter_priorities = with_high;

    let with_both = toggled_filter(column_of(&mixed_board), Priority::Low);
    assert_eq!(with_both, Some(vec![Priority::High, Priority::Low]));

    // Toggling the only remaining priority off clears the filter.
    let single = mixed_board
        .columns
        .get_mut(&ColumnId::new("col-1"))
        .expect("column");
    single.filter_priorities = Some(vec![Priority::High]);
    assert_eq!(toggled_filter(column_of(&mixed_board), Priority::High), None);
}

/// The seed snapshot, used as-is for list-view grouping.
#[fixture]
fn list_board() -> BoardState {
    BoardState::seeded()
}

#[rstest]
fn list_groups_follow_column_order(list_board: BoardState) {
    let groups = grouped(&list_board, ListSort::default(), "");

    let titles: Vec<&str> = groups.iter().map(|group| group.column.title.as_str()).collect();
    assert_eq!(titles, vec!["To Do", "In Progress", "Done"]);
}

#[rstest]
fn list_default_sort_is_priority_descending(list_board: BoardState) {
    let groups = grouped(&list_board, ListSort::default(), "");

    let to_do = groups.first().expect("first group");
    // task-1 is High, task-2 is Medium.
    assert_eq!(displayed_ids(&to_do.tasks), vec!["task-1", "task-2"]);
}

#[rstest]
fn list_ignores_per_column_sort_and_filter(mut list_board: BoardState) {
    let column = list_board
        .columns
        .get_mut(&ColumnId::new("col-1"))
        .expect("column");
    column.sort_key = SortKey::DueDate;
    column.sort_direction = SortDirection::Asc;
    column.filter_priorities = Some(vec![Priority::Low]);

    let groups = grouped(&list_board, ListSort::default(), "");
    let to_do = groups.first().expect("first group");

    // Both tasks survive despite the Low-only column filter, ordered by
    // the list's own priority sort rather than the column's date sort.
    assert_eq!(displayed_ids(&to_do.tasks), vec!["task-1", "task-2"]);
}

#[rstest]
fn list_search_applies_per_group(list_board: BoardState) {
    let groups = grouped(&list_board, ListSort::default(), "drag");

    let by_title: Vec<usize> = groups.iter().map(|group| group.tasks.len()).collect();
    // Only "Implement drag and drop" in the middle column matches.
    assert_eq!(by_title, vec![0, 1, 0]);
}

#[rstest]
fn list_due_date_sort_keeps_undated_tasks_last(list_board: BoardState) {
    let sort = ListSort {
        key: ListSortKey::DueDate,
        direction: SortDirection::Desc,
    };
    let groups = grouped(&list_board, sort, "");

    let to_do = groups.first().expect("first group");
    // task-2 is the only dated task in the column; undated task-1 sorts
    // after it regardless of the descending direction.
    assert_eq!(displayed_ids(&to_do.tasks), vec!["task-2", "task-1"]);
}

#[rstest]
fn list_sort_toggle_flips_and_resets() {
    let sort = ListSort::default();

    let flipped = sort.toggled(ListSortKey::Priority);
    assert_eq!(flipped.key, ListSortKey::Priority);
    assert_eq!(flipped.direction, SortDirection::Asc);

    let reset = flipped.toggled(ListSortKey::DueDate);
    assert_eq!(reset.key, ListSortKey::DueDate);
    assert_eq!(reset.direction, SortDirection::Desc);
}
