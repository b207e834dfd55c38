//! The whole-board state snapshot.

use super::{Column, ColumnId, ColumnKind, IntegrityError, Priority, Task, TaskId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Canonical board state.
///
/// All entity links are id values, never references: tasks point at their
/// column through [`Task::status_id`] and columns list their members in
/// [`Column::task_ids`]. The command processor is the sole writer; every
/// transition replaces the snapshot wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    /// Task records keyed by id.
    pub tasks: HashMap<TaskId, Task>,
    /// Columns keyed by id.
    pub columns: HashMap<ColumnId, Column>,
    /// Rendering order of columns; a permutation of the column map keys.
    pub column_order: Vec<ColumnId>,
}

impl BoardState {
    /// Creates an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the fixed startup snapshot: the three default columns and
    /// five tasks distributed across them.
    #[must_use]
    pub fn seeded() -> Self {
        let col_1 = ColumnId::new("col-1");
        let col_2 = ColumnId::new("col-2");
        let col_3 = ColumnId::new("col-3");

        let mut task_2 = Task::new(
            TaskId::new("task-2"),
            "Design UI components",
            Priority::Medium,
            col_1.clone(),
        )
        .with_description("Design TaskCard, Board, and List views.");
        task_2.due_date = NaiveDate::from_ymd_opt(2025, 7, 25);

        let seed_tasks = [
            Task::new(
                TaskId::new("task-1"),
                "Setup project structure",
                Priority::High,
                col_1.clone(),
            )
            .with_description("Create folders for components, context, etc."),
            task_2,
            Task::new(
                TaskId::new("task-3"),
                "Implement drag and drop",
                Priority::High,
                col_2.clone(),
            )
            .with_description("Wire the drag collaborator into the board view."),
            Task::new(
                TaskId::new("task-4"),
                "Develop list view",
                Priority::Medium,
                col_2.clone(),
            )
            .with_description("Add sorting by priority and due date."),
            Task::new(
                TaskId::new("task-5"),
                "Final testing and deployment",
                Priority::Low,
                col_3.clone(),
            )
            .with_description("Test all CRUD operations and features."),
        ];

        let mut tasks = HashMap::new();
        for task in seed_tasks {
            tasks.insert(task.id.clone(), task);
        }

        let mut to_do = Column::new(col_1.clone(), "To Do", ColumnKind::Default);
        to_do.task_ids = vec![TaskId::new("task-1"), TaskId::new("task-2")];
        let mut in_progress = Column::new(col_2.clone(), "In Progress", ColumnKind::Default);
        in_progress.task_ids = vec![TaskId::new("task-3"), TaskId::new("task-4")];
        let mut done = Column::new(col_3.clone(), "Done", ColumnKind::Default);
        done.task_ids = vec![TaskId::new("task-5")];

        let mut columns = HashMap::new();
        columns.insert(col_1.clone(), to_do);
        columns.insert(col_2.clone(), in_progress);
        columns.insert(col_3.clone(), done);

        Self {
            tasks,
            columns,
            column_order: vec![col_1, col_2, col_3],
        }
    }

    /// Returns `true` when the id is a key of the column map.
    #[must_use]
    pub fn is_valid_column_ref(&self, id: &ColumnId) -> bool {
        self.columns.contains_key(id)
    }

    /// Returns `true` when the id is a key of the task map.
    #[must_use]
    pub fn is_valid_task_ref(&self, id: &TaskId) -> bool {
        self.tasks.contains_key(id)
    }

    /// Looks up a column by id.
    #[must_use]
    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.get(id)
    }

    /// Looks up a task by id.
    #[must_use]
    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.get(id)
    }

    /// Checks the cross-entity structural invariants.
    ///
    /// Verifies that the column order is a permutation of the column map
    /// keys, that every task sequence is duplicate-free and fully
    /// resolvable, and that every task is a member of exactly its status
    /// column.
    ///
    /// # Errors
    ///
    /// Returns the first [`IntegrityError`] found.
    pub fn verify_integrity(&self) -> Result<(), IntegrityError> {
        self.check_column_order()?;
        self.check_task_sequences()?;
        self.check_task_membership()
    }

    fn check_column_order(&self) -> Result<(), IntegrityError> {
        let mut seen = HashSet::new();
        for column_id in &self.column_order {
            if !self.columns.contains_key(column_id) {
                return Err(IntegrityError::DanglingOrderEntry(column_id.clone()));
            }
            if !seen.insert(column_id.clone()) {
                return Err(IntegrityError::DuplicateOrderEntry(column_id.clone()));
            }
        }
        for column_id in self.columns.keys() {
            if !seen.contains(column_id) {
                return Err(IntegrityError::UnlistedColumn(column_id.clone()));
            }
        }
        Ok(())
    }

    fn check_task_sequences(&self) -> Result<(), IntegrityError> {
        for column in self.columns.values() {
            let mut seen = HashSet::new();
            for task_id in &column.task_ids {
                if !self.tasks.contains_key(task_id) {
                    return Err(IntegrityError::DanglingTaskRef {
                        column: column.id.clone(),
                        task: task_id.clone(),
                    });
                }
                if !seen.insert(task_id.clone()) {
                    return Err(IntegrityError::DuplicateTaskEntry {
                        column: column.id.clone(),
                        task: task_id.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    fn check_task_membership(&self) -> Result<(), IntegrityError> {
        for (task_id, task) in &self.tasks {
            let status_column = self.columns.get(&task.status_id).ok_or_else(|| {
                IntegrityError::UnknownStatusColumn {
                    task: task_id.clone(),
                    column: task.status_id.clone(),
                }
            })?;
            if !status_column.contains_task(task_id) {
                return Err(IntegrityError::MissingMembership {
                    task: task_id.clone(),
                    column: task.status_id.clone(),
                });
            }
            for column in self.columns.values() {
                if column.id != task.status_id && column.contains_task(task_id) {
                    return Err(IntegrityError::ForeignMembership {
                        task: task_id.clone(),
                        column: column.id.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
