//! Unit tests for the task bounded context.


use crate::status::domain::StatusId;
use crate::task::domain::Task;

fn task(title: &str, status_id: StatusId, position: u32) -> Task {
    Task::new(title, status_id, position).expect("valid task")
}

fn titles(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(Task::title).collect()
}

fn positions(tasks: &[Task]) -> Vec<u32> {
    tasks.iter().map(Task::position).collect()
}
