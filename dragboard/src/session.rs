//! Drag-session state machine.
//!
//! Tracks which task, if any, is currently being relocated. Exactly one drag
//! may be in flight at a time; ending or cancelling is always terminal for
//! the session regardless of whether the drop is accepted.

use crate::types::TaskId;

/// The transient record of the task currently being dragged
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragSession {
    /// No drag in flight
    #[default]
    Idle,
    /// A drag is in flight for the given task
    Active(TaskId),
}

impl DragSession {
    /// Record a drag-start for the given task.
    ///
    /// Starting while another drag is active overwrites it, an implicit
    /// cancel of the previous drag. Correct presentation-layer usage never
    /// hits this path.
    pub fn start(&mut self, task: TaskId) {
        if let Self::Active(previous) = self {
            tracing::debug!(
                previous = %previous,
                task = %task,
                "drag started while another was active; cancelling the previous drag"
            );
        }
        *self = Self::Active(task);
    }

    /// End the session, returning the task that was active, if any
    pub fn end(&mut self) -> Option<TaskId> {
        match std::mem::take(self) {
            Self::Active(task) => Some(task),
            Self::Idle => None,
        }
    }

    /// Cancel the session without yielding the active task
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }

    /// The task currently being dragged, if any
    pub fn active(&self) -> Option<&TaskId> {
        match self {
            Self::Active(task) => Some(task),
            Self::Idle => None,
        }
    }

    /// Check whether no drag is in flight
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
