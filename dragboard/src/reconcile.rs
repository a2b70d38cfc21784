//! Reconciliation engine: derives the next board state from a completed drag.
//!
//! The engine is a pure function over the current board. It relocates whole
//! task records, never validates their content, and never deletes a task.
//! Every malformed or ambiguous drop degrades to a no-op that returns the
//! board unchanged; nothing in this path is an error.

use crate::types::{Board, Column, ColumnId, PointerGeometry, TaskId};
use serde::{Deserialize, Serialize};

/// What the pointer is over at drag release.
///
/// Task and column ids are disjoint types, so a drop onto the lone task of a
/// column can never be confused with a drop onto the column itself; the
/// presentation layer states which one it resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum DropTarget {
    /// Released over another task's card
    Task(TaskId),
    /// Released over a column's container (e.g. an empty column's open area)
    Column(ColumnId),
}

impl DropTarget {
    /// Target a task card
    pub fn task(id: impl Into<TaskId>) -> Self {
        Self::Task(id.into())
    }

    /// Target a column container
    pub fn column(id: impl Into<ColumnId>) -> Self {
        Self::Column(id.into())
    }
}

/// Compute the next board state for a drag of `active` released over `over`.
///
/// `pointer` is consulted only for task targets, to decide insert-before vs
/// insert-after around the target card; without geometry the drop lands
/// after the target.
///
/// The returned board shares every column the move did not touch, so
/// `Arc::ptr_eq` against the previous state tells the presentation layer
/// exactly which columns to re-render. No-op outcomes (drop outside any
/// target, self-drop, unknown ids) return a board sharing all columns.
pub fn reconcile(
    board: &Board,
    active: &TaskId,
    over: Option<&DropTarget>,
    pointer: Option<&PointerGeometry>,
) -> Board {
    // Dropping onto nothing, or onto itself, changes nothing.
    let Some(over) = over else {
        tracing::trace!(task = %active, "dropped outside any target; board unchanged");
        return board.clone();
    };
    if matches!(over, DropTarget::Task(id) if id == active) {
        tracing::trace!(task = %active, "dropped onto itself; board unchanged");
        return board.clone();
    }

    let Some(source) = board.column_of(active) else {
        tracing::trace!(task = %active, "dragged task not on the board; board unchanged");
        return board.clone();
    };

    let dest = match over {
        DropTarget::Task(over_id) => board.column_of(over_id),
        DropTarget::Column(column_id) => board.find_column(column_id),
    };
    let Some(dest) = dest else {
        tracing::trace!(task = %active, ?over, "drop target not on the board; board unchanged");
        return board.clone();
    };

    let source_id = source.id.clone();
    let dest_id = dest.id.clone();

    if source_id == dest_id {
        // Same-column reorder: remove first, then compute the insertion index
        // against the shortened sequence to avoid an off-by-one.
        let mut column = (**source).clone();
        let Some(index) = column.task_index(active) else {
            return board.clone();
        };
        let moved = column.tasks.remove(index);
        let insert_at = insertion_index(&column, over, pointer);
        column.tasks.insert(insert_at, moved);
        column.renumber();

        tracing::debug!(task = %active, column = %source_id, index = insert_at, "task reordered");
        board.with_replaced(vec![column])
    } else {
        let mut source_column = (**source).clone();
        let mut dest_column = (**dest).clone();

        // The task must still be where the locator scan said it was; bail out
        // rather than risk duplicating it.
        let Some(index) = source_column.task_index(active) else {
            return board.clone();
        };
        let moved = source_column.tasks.remove(index);
        let insert_at = insertion_index(&dest_column, over, pointer);
        dest_column.tasks.insert(insert_at, moved);
        source_column.renumber();
        dest_column.renumber();

        tracing::debug!(
            task = %active,
            from = %source_id,
            to = %dest_id,
            index = insert_at,
            "task moved"
        );
        board.with_replaced(vec![source_column, dest_column])
    }
}

/// Where in `dest` the moved task lands.
///
/// `dest` no longer contains the dragged task when this runs, so the index
/// is valid for direct insertion.
fn insertion_index(
    dest: &Column,
    over: &DropTarget,
    pointer: Option<&PointerGeometry>,
) -> usize {
    match over {
        // Dropping into a column's open area appends at the end.
        DropTarget::Column(_) => dest.len(),
        DropTarget::Task(over_id) => match dest.task_index(over_id) {
            Some(j) => match pointer {
                Some(geometry) if geometry.is_above_midpoint() => j,
                // Below the midpoint, or no geometry supplied: insert after.
                _ => j + 1,
            },
            // The target task vanished between resolution and insertion.
            None => dest.len(),
        },
    }
}
