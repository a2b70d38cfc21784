//! Built-in starter board.
//!
//! The canonical three-column board consumers get when no external
//! configuration is supplied, seeded with a handful of sample cards.

use crate::types::{Assignee, Board, Column, Priority, Task};
use chrono::NaiveDate;

/// Deterministic date for built-in sample cards.
fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("invalid built-in date")
}

/// The starter columns: To Do / In Progress / Done with sample cards.
pub fn starter_columns() -> Vec<Column> {
    vec![
        Column::new("todo", "To Do")
            .with_color("8b7355")
            .with_tasks(vec![
                Task::new("Employee onboarding")
                    .with_id("employee-onboarding")
                    .with_description("Complete the onboarding process for new hires.")
                    .with_image("img/onboarding-cover.png"),
                Task::new("Design system audit")
                    .with_id("design-system-audit")
                    .with_description("Review and update the component library")
                    .with_priority(Priority::High)
                    .with_assignee(Assignee::new("Sarah Chen").with_avatar("avatars/sarah-chen.png"))
                    .with_tags(vec!["design".into(), "system".into()])
                    .with_due_date(date(2024, 1, 15))
                    .with_attachments(3)
                    .with_comments(7),
                Task::new("User research analysis")
                    .with_id("user-research-analysis")
                    .with_description("Analyze feedback from recent user interviews")
                    .with_priority(Priority::Medium)
                    .with_assignee(
                        Assignee::new("Alex Rivera").with_avatar("avatars/alex-rivera.png"),
                    )
                    .with_tags(vec!["research".into(), "ux".into()])
                    .with_due_date(date(2024, 1, 18))
                    .with_comments(4),
            ]),
        Column::new("in-progress", "In Progress")
            .with_tasks(vec![Task::new("Sprint planning").with_id("sprint-planning")]),
        Column::new("done", "Done"),
    ]
}

/// The starter board
pub fn starter_board() -> Board {
    Board::new(starter_columns()).expect("starter board violates board invariants")
}
