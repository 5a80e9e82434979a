//! Dense integer ordering of tasks within a column.
//!
//! Both functions are pure: they take a column by value and hand back the
//! renumbered column. Positions after either call are exactly `0..n`.

use super::Task;

/// Rewrites positions to `0..n` following the current order.
#[must_use]
pub fn renumber(tasks: Vec<Task>) -> Vec<Task> {
    (0_u32..)
        .zip(tasks)
        .map(|(position, mut task)| {
            task.set_position(position);
            task
        })
        .collect()
}

/// Places `task` at `index` (clamped to the column length) and renumbers.
///
/// Any existing entry with the same identifier is removed first, so the
/// same call serves moves within a column and arrivals from elsewhere.
#[must_use]
pub fn insert_at(tasks: Vec<Task>, task: Task, index: usize) -> Vec<Task> {
    let mut column: Vec<Task> = tasks
        .into_iter()
        .filter(|existing| existing.id() != task.id())
        .collect();
    let clamped = index.min(column.len());
    column.insert(clamped, task);
    renumber(column)
}

/// Returns whether positions are exactly `0..n` in slice order.
#[must_use]
pub fn is_dense(tasks: &[Task]) -> bool {
    (0_u32..).zip(tasks).all(|(expected, task)| task.position() == expected)
}
