//! Integration tests for drag reconciliation through the engine facade

use dragboard::{
    Board, BoardEngine, Column, DragEnd, PointerGeometry, Rect, Task,
};
use std::collections::HashSet;
use std::sync::Arc;

fn setup() -> BoardEngine {
    let board = Board::new(vec![
        Column::new("todo", "To Do").with_tasks(vec![
            Task::new("Task 1").with_id("t1"),
            Task::new("Task 2").with_id("t2"),
        ]),
        Column::new("in-progress", "In Progress")
            .with_tasks(vec![Task::new("Task 3").with_id("t3")]),
        Column::new("done", "Done"),
    ])
    .unwrap();

    BoardEngine::new(board)
}

fn column_ids(engine: &BoardEngine, column: &str) -> Vec<String> {
    engine
        .board()
        .find_column(&column.into())
        .unwrap()
        .tasks
        .iter()
        .map(|t| t.id.to_string())
        .collect()
}

/// Every task id lives in exactly one column and every column is numbered
/// 0..len without gaps.
fn assert_invariants(engine: &BoardEngine) {
    let mut seen = HashSet::new();
    for column in engine.board().columns() {
        for (i, task) in column.tasks.iter().enumerate() {
            assert_eq!(task.order, i, "order gap in column {}", column.id);
            assert!(
                seen.insert(task.id.clone()),
                "task {} appears in more than one column",
                task.id
            );
        }
    }
}

#[test]
fn test_cross_column_move_into_empty_column() {
    let mut engine = setup();

    engine.drag_start("t1".into());
    engine.drag_end(DragEnd::over_column("done"));

    assert_eq!(column_ids(&engine, "todo"), ["t2"]);
    assert_eq!(column_ids(&engine, "done"), ["t1"]);
    assert_eq!(engine.board().find_column(&"done".into()).unwrap().tasks[0].order, 0);
    assert_invariants(&engine);
}

#[test]
fn test_insert_before_vs_after_midpoint() {
    // t3 occupies pixel rows 100-140; midpoint 120
    let rect = Rect::new(100.0, 40.0);

    let mut engine = setup();
    engine.drag_start("t1".into());
    engine.drag_end(DragEnd::over_task("t3").with_pointer(PointerGeometry::new(105.0, rect)));
    assert_eq!(column_ids(&engine, "in-progress"), ["t1", "t3"]);
    assert_invariants(&engine);

    let mut engine = setup();
    engine.drag_start("t1".into());
    engine.drag_end(DragEnd::over_task("t3").with_pointer(PointerGeometry::new(135.0, rect)));
    assert_eq!(column_ids(&engine, "in-progress"), ["t3", "t1"]);
    assert_invariants(&engine);
}

#[test]
fn test_same_column_reorder_renumbers() {
    let board = Board::new(vec![Column::new("todo", "To Do").with_tasks(vec![
        Task::new("Task 1").with_id("t1"),
        Task::new("Task 2").with_id("t2"),
        Task::new("Task 3").with_id("t3"),
    ])])
    .unwrap();
    let mut engine = BoardEngine::new(board);

    // Drop t1 below t3's midpoint
    engine.drag_start("t1".into());
    engine.drag_end(
        DragEnd::over_task("t3").with_pointer(PointerGeometry::new(135.0, Rect::new(100.0, 40.0))),
    );

    assert_eq!(column_ids(&engine, "todo"), ["t2", "t3", "t1"]);
    let orders: Vec<usize> = engine
        .board()
        .find_column(&"todo".into())
        .unwrap()
        .tasks
        .iter()
        .map(|t| t.order)
        .collect();
    assert_eq!(orders, [0, 1, 2]);
}

#[test]
fn test_noop_laws() {
    // Self-drop
    let mut engine = setup();
    let before = engine.board().clone();
    engine.drag_start("t1".into());
    engine.drag_end(DragEnd::over_task("t1"));
    assert_eq!(engine.board(), &before);

    // Unknown dragged task
    let mut engine = setup();
    let before = engine.board().clone();
    engine.drag_start("missing".into());
    engine.drag_end(DragEnd::over_column("done"));
    assert_eq!(engine.board(), &before);

    // Dropped outside everything
    let mut engine = setup();
    let before = engine.board().clone();
    engine.drag_start("t1".into());
    engine.drag_end(DragEnd::outside());
    assert_eq!(engine.board(), &before);
}

#[test]
fn test_session_returns_to_idle_on_every_outcome() {
    let mut engine = setup();

    engine.drag_start("t1".into());
    engine.drag_end(DragEnd::over_column("done"));
    assert!(engine.session().is_idle());

    engine.drag_start("t2".into());
    engine.drag_end(DragEnd::outside());
    assert!(engine.session().is_idle());

    engine.drag_start("t2".into());
    engine.drag_cancel();
    assert!(engine.session().is_idle());
}

#[test]
fn test_cancel_never_reconciles() {
    let mut engine = setup();
    let before = engine.board().clone();

    engine.drag_start("t1".into());
    engine.drag_cancel();

    assert_eq!(engine.board(), &before);
    for (b, a) in before.columns().iter().zip(engine.board().columns()) {
        assert!(Arc::ptr_eq(b, a), "cancel must not rebuild any column");
    }
}

#[test]
fn test_overlay_preview_hydration() {
    let mut engine = setup();
    assert!(engine.dragging().is_none());

    engine.drag_start("t3".into());
    let preview = engine.dragging().unwrap();
    assert_eq!(preview.title, "Task 3");

    engine.drag_end(DragEnd::outside());
    assert!(engine.dragging().is_none());
}

#[test]
fn test_invariants_hold_across_a_drag_storm() {
    let mut engine = setup();
    let rect = Rect::new(0.0, 40.0);

    let gestures: &[(&str, DragEnd)] = &[
        ("t1", DragEnd::over_column("done")),
        ("t2", DragEnd::over_task("t3").with_pointer(PointerGeometry::new(35.0, rect))),
        ("t3", DragEnd::over_column("todo")),
        ("t1", DragEnd::over_task("t1")),
        ("missing", DragEnd::over_column("todo")),
        ("t2", DragEnd::outside()),
        ("t1", DragEnd::over_task("t3").with_pointer(PointerGeometry::new(5.0, rect))),
        ("t2", DragEnd::over_column("missing")),
    ];

    for (task, gesture) in gestures {
        engine.drag_start((*task).into());
        engine.drag_end(gesture.clone());
        assert_invariants(&engine);
        assert_eq!(engine.board().task_count(), 3, "no task may vanish or double");
    }
}

#[test]
fn test_board_round_trips_through_json() {
    let engine = setup();
    let json = serde_json::to_string(engine.board()).unwrap();
    let restored: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(&restored, engine.board());
}
