//! Domain model for task cards and their ordering within columns.
//!
//! Task positions are dense zero-based ranks per column. The position
//! algebra in [`renumber`] and [`insert_at`] restores that invariant after
//! every move, and [`BoardTasks`] applies it to a whole board.

mod board;
mod error;
mod ids;
mod position;
mod task;

pub use board::{BoardTasks, TaskLocation};
pub use error::TaskDomainError;
pub use ids::TaskId;
pub use position::{insert_at, is_dense, renumber};
pub use task::{PersistedTaskData, Task};
