//! Engine facade: owns the board and the drag session.
//!
//! The presentation layer feeds drag intents in and renders whatever ordered
//! data comes back out. Reconciliation runs synchronously inside
//! [`BoardEngine::drag_end`]; the board is replaced whole, never observable
//! in a partially-updated state.

use crate::defaults;
use crate::reconcile::{reconcile, DropTarget};
use crate::session::DragSession;
use crate::types::{Board, ColumnId, PointerGeometry, Task, TaskId};
use serde::{Deserialize, Serialize};

/// A drag-end intent from the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragEnd {
    /// What the pointer is over at release, or `None` when released outside
    /// every droppable target
    pub over: Option<DropTarget>,
    /// Release geometry, present when `over` names a task card
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pointer: Option<PointerGeometry>,
}

impl DragEnd {
    /// Release over another task's card
    pub fn over_task(id: impl Into<TaskId>) -> Self {
        Self {
            over: Some(DropTarget::Task(id.into())),
            pointer: None,
        }
    }

    /// Release over a column's container
    pub fn over_column(id: impl Into<ColumnId>) -> Self {
        Self {
            over: Some(DropTarget::Column(id.into())),
            pointer: None,
        }
    }

    /// Release outside every droppable target
    pub fn outside() -> Self {
        Self {
            over: None,
            pointer: None,
        }
    }

    /// Attach release geometry
    pub fn with_pointer(mut self, pointer: PointerGeometry) -> Self {
        self.pointer = Some(pointer);
        self
    }
}

/// Owns the board state and the drag session, and routes drag intents
pub struct BoardEngine {
    board: Board,
    session: DragSession,
}

impl BoardEngine {
    /// Create an engine over an externally configured board
    pub fn new(board: Board) -> Self {
        Self {
            board,
            session: DragSession::default(),
        }
    }

    /// Create an engine over the built-in starter board
    pub fn with_starter_board() -> Self {
        Self::new(defaults::starter_board())
    }

    /// The current board state
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The current drag session
    pub fn session(&self) -> &DragSession {
        &self.session
    }

    /// The task currently being dragged, hydrated for overlay rendering
    pub fn dragging(&self) -> Option<&Task> {
        self.session.active().and_then(|id| self.board.task(id))
    }

    /// Record a drag-start for the given task
    pub fn drag_start(&mut self, task: TaskId) {
        self.session.start(task);
    }

    /// Complete the active drag: reconcile the board against the drop target
    /// and replace the state atomically. The session returns to idle whether
    /// or not the drop was accepted. Without an active session this is a
    /// no-op.
    pub fn drag_end(&mut self, event: DragEnd) {
        if let Some(active) = self.session.end() {
            self.board = reconcile(
                &self.board,
                &active,
                event.over.as_ref(),
                event.pointer.as_ref(),
            );
        }
    }

    /// Abandon the active drag without invoking reconciliation
    pub fn drag_cancel(&mut self) {
        self.session.cancel();
    }
}

impl Default for BoardEngine {
    fn default() -> Self {
        Self::with_starter_board()
    }
}
