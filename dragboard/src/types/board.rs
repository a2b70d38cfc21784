//! Board-level types: Board, Column, and the locator scans

use super::ids::{ColumnId, TaskId};
use super::task::Task;
use crate::auto_color::auto_color;
use crate::error::{BoardError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

/// A column: a named, ordered list of tasks.
///
/// The traversal order of `tasks` IS the task order; each task's `order`
/// field agrees with its sequence position after any reconciliation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub name: String,
    /// 6-character hex color code without `#`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Column {
    /// Create a new empty column
    pub fn new(id: impl Into<ColumnId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: None,
            tasks: Vec::new(),
        }
    }

    /// Set an explicit color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the task sequence
    pub fn with_tasks(mut self, tasks: Vec<Task>) -> Self {
        self.tasks = tasks;
        self
    }

    /// The color to render this column with: the configured color, or a
    /// deterministic auto-color derived from the column name.
    pub fn display_color(&self) -> &str {
        self.color.as_deref().unwrap_or_else(|| auto_color(&self.name))
    }

    /// Sequence position of the task with the given id
    pub fn task_index(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| &t.id == id)
    }

    /// Check whether this column holds the task with the given id
    pub fn contains(&self, id: &TaskId) -> bool {
        self.task_index(id).is_some()
    }

    /// Number of tasks in this column
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Check whether this column holds no tasks
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Reassign every task's `order` field to its zero-based sequence position
    pub(crate) fn renumber(&mut self) {
        for (i, task) in self.tasks.iter_mut().enumerate() {
            task.order = i;
        }
    }
}

/// The full ordered collection of columns.
///
/// Columns are held behind `Arc` so a reconciliation can replace the one or
/// two affected columns and share the rest; the presentation layer may use
/// [`Arc::ptr_eq`] on entries of [`Board::columns`] as a cheap change check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Column>", into = "Vec<Column>")]
pub struct Board {
    columns: Vec<Arc<Column>>,
}

impl Board {
    /// Build a board from column records, validating board-wide invariants.
    ///
    /// Rejects duplicate column ids and duplicate task ids (a task belongs to
    /// exactly one column), and normalizes every task's `order` field to its
    /// sequence position.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let mut column_ids = HashSet::new();
        let mut task_ids = HashSet::new();

        for column in &columns {
            if !column_ids.insert(column.id.clone()) {
                return Err(BoardError::DuplicateColumnId {
                    id: column.id.to_string(),
                });
            }
            for task in &column.tasks {
                if !task_ids.insert(task.id.clone()) {
                    return Err(BoardError::DuplicateTaskId {
                        id: task.id.to_string(),
                    });
                }
            }
        }

        let columns = columns
            .into_iter()
            .map(|mut column| {
                column.renumber();
                Arc::new(column)
            })
            .collect();

        Ok(Self { columns })
    }

    /// The ordered column sequence
    pub fn columns(&self) -> &[Arc<Column>] {
        &self.columns
    }

    /// Find a column by its id
    pub fn find_column(&self, id: &ColumnId) -> Option<&Arc<Column>> {
        self.columns.iter().find(|c| &c.id == id)
    }

    /// The column owning the task with the given id.
    ///
    /// Scans columns in order and returns the first match, a deterministic
    /// tie-break even though task ids are unique board-wide. `None` means the
    /// task is unknown and any reconciliation using it must leave the board
    /// unchanged.
    pub fn column_of(&self, task: &TaskId) -> Option<&Arc<Column>> {
        self.columns.iter().find(|c| c.contains(task))
    }

    /// The task record with the given id, if present in any column
    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.columns
            .iter()
            .find_map(|c| c.tasks.iter().find(|t| &t.id == id))
    }

    /// Total number of tasks across all columns
    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|c| c.len()).sum()
    }

    /// Substitute rebuilt columns for their originals, sharing all others.
    ///
    /// Callers guarantee the replacements keep board invariants intact.
    pub(crate) fn with_replaced(&self, replacements: Vec<Column>) -> Self {
        let replacements: Vec<Arc<Column>> = replacements.into_iter().map(Arc::new).collect();
        let columns = self
            .columns
            .iter()
            .map(|existing| {
                replacements
                    .iter()
                    .find(|r| r.id == existing.id)
                    .map_or_else(|| Arc::clone(existing), Arc::clone)
            })
            .collect();
        Self { columns }
    }
}

impl TryFrom<Vec<Column>> for Board {
    type Error = BoardError;

    fn try_from(columns: Vec<Column>) -> Result<Self> {
        Self::new(columns)
    }
}

impl From<Board> for Vec<Column> {
    fn from(board: Board) -> Self {
        board.columns.iter().map(|c| (**c).clone()).collect()
    }
}
