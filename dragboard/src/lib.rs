//! Drag-reconciliation engine for a kanban-style task board
//!
//! This crate is the state-management core of a drag-and-drop task board: an
//! ordered collection of columns, each holding an ordered collection of
//! tasks, plus the logic that reworks that structure when the user drops a
//! dragged card within a column, across columns, or into an empty column.
//!
//! ## Overview
//!
//! - **Pure state, no rendering** - the presentation layer feeds drag intents
//!   in and renders the ordered data that comes back out
//! - **Copy-on-write updates** - a reconciliation rebuilds only the one or
//!   two affected columns; all others stay reference-identical
//! - **Typed drop targets** - task and column ids live in disjoint spaces,
//!   so target resolution never guesses
//! - **No-op over error** - unknown ids, self-drops, and drops outside every
//!   target silently preserve the prior state
//!
//! ## Basic Usage
//!
//! ```rust
//! use dragboard::{Board, BoardEngine, Column, DragEnd, Task};
//!
//! # fn main() -> dragboard::Result<()> {
//! let board = Board::new(vec![
//!     Column::new("todo", "To Do").with_tasks(vec![Task::new("Ship the feature")]),
//!     Column::new("done", "Done"),
//! ])?;
//! let mut engine = BoardEngine::new(board);
//!
//! let card = engine.board().columns()[0].tasks[0].id.clone();
//! engine.drag_start(card);
//! engine.drag_end(DragEnd::over_column("done"));
//!
//! assert_eq!(engine.board().columns()[1].tasks.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod auto_color;
pub mod defaults;
mod engine;
mod error;
mod reconcile;
mod session;
pub mod types;

pub use engine::{BoardEngine, DragEnd};
pub use error::{BoardError, Result};
pub use reconcile::{reconcile, DropTarget};
pub use session::DragSession;

// Re-export commonly used types
pub use types::{Assignee, Board, Column, ColumnId, PointerGeometry, Priority, Rect, Task, TaskId};
