//! Display and collision orderings for a board's statuses.
//!
//! Stored positions never special-case the terminal status; only the
//! display ordering moves it to the end. Both orderings are derived from the
//! same slice so renumbering code can treat every status alike.

use super::{Status, StatusId};
use tracing::warn;

impl AsRef<Self> for Status {
    fn as_ref(&self) -> &Self {
        self
    }
}

/// Returns the terminal status, if any.
///
/// When several statuses claim `is_done`, the one with the lowest position
/// wins and the anomaly is logged. The remaining done-flagged statuses are
/// ordered as ordinary columns.
#[must_use]
pub fn terminal_status<T: AsRef<Status>>(statuses: &[T]) -> Option<&T> {
    let mut done = statuses.iter().filter(|item| item.as_ref().is_done());
    let mut terminal = done.next()?;
    let mut done_count = 1_usize;
    for candidate in done {
        done_count += 1;
        if candidate.as_ref().position() < terminal.as_ref().position() {
            terminal = candidate;
        }
    }

    if done_count > 1 {
        warn!(
            done_statuses = done_count,
            chosen = %terminal.as_ref().id(),
            "more than one status is flagged done; using the lowest position as terminal"
        );
    }
    Some(terminal)
}

/// Returns the identifier of the terminal status, if any.
#[must_use]
pub fn terminal_status_id<T: AsRef<Status>>(statuses: &[T]) -> Option<StatusId> {
    terminal_status(statuses).map(|item| item.as_ref().id())
}

/// Orders statuses for display: non-terminal columns by ascending position,
/// then the terminal column last regardless of its stored position.
#[must_use]
pub fn sort_for_display<T: AsRef<Status> + Clone>(statuses: &[T]) -> Vec<T> {
    display_order_with(statuses, terminal_status_id(statuses))
}

/// Display ordering with an already-resolved terminal status.
pub(crate) fn display_order_with<T: AsRef<Status> + Clone>(
    statuses: &[T],
    terminal_id: Option<StatusId>,
) -> Vec<T> {
    let mut ordered = sort_for_collision(statuses);
    if let Some(id) = terminal_id {
        if let Some(index) = ordered.iter().position(|item| item.as_ref().id() == id) {
            let terminal = ordered.remove(index);
            ordered.push(terminal);
        }
    }
    ordered
}

/// Orders every status, the terminal one included, purely by position.
///
/// Ties keep their input order.
#[must_use]
pub fn sort_for_collision<T: AsRef<Status> + Clone>(statuses: &[T]) -> Vec<T> {
    let mut ordered = statuses.to_vec();
    ordered.sort_by_key(|item| item.as_ref().position());
    ordered
}
