//! Core types for the board engine

mod board;
mod geometry;
mod ids;
mod task;

// Re-export all types
pub use board::{Board, Column};
pub use geometry::{PointerGeometry, Rect};
pub use ids::{ColumnId, TaskId};
pub use task::{Assignee, Priority, Task};
