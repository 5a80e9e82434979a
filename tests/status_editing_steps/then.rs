//! Then steps for status editing BDD scenarios.

use super::world::{StatusEditingWorld, run_async};
use corkboard::status::{
    domain::{EditState, StatusEditError},
    ports::StatusSource,
};
use rstest_bdd_macros::then;

fn split(list: &str) -> Vec<&str> {
    list.split(", ").collect()
}

#[then(r#"the staged columns are "{columns}""#)]
fn staged_columns_are(world: &StatusEditingWorld, columns: String) -> Result<(), eyre::Report> {
    let session = world
        .session
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no edit session"))?;
    let staged: Vec<&str> = session
        .statuses()
        .into_iter()
        .filter(|record| !record.is_deleted())
        .map(|record| record.status().name().as_str())
        .collect();
    let expected = split(&columns);
    eyre::ensure!(staged == expected, "staged {staged:?}, expected {expected:?}");
    Ok(())
}

fn staged_state(world: &StatusEditingWorld, column: &str) -> Result<EditState, eyre::Report> {
    let status_id = world.status_id(column)?;
    world
        .session
        .as_ref()
        .and_then(|session| session.record(status_id))
        .map(|record| record.state())
        .ok_or_else(|| eyre::eyre!("column {column} is not staged"))
}

#[then(r#"staged column "{column}" is new"#)]
fn staged_column_is_new(world: &StatusEditingWorld, column: String) -> Result<(), eyre::Report> {
    let state = staged_state(world, &column)?;
    eyre::ensure!(state == EditState::Added, "column {column} is {state:?}");
    Ok(())
}

#[then(r#"staged column "{column}" is modified"#)]
fn staged_column_is_modified(
    world: &StatusEditingWorld,
    column: String,
) -> Result<(), eyre::Report> {
    let state = staged_state(world, &column)?;
    eyre::ensure!(state == EditState::Modified, "column {column} is {state:?}");
    Ok(())
}

#[then("no changes are pending")]
fn no_changes_pending(world: &StatusEditingWorld) -> Result<(), eyre::Report> {
    let session = world
        .session
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no edit session"))?;
    eyre::ensure!(!session.has_pending_changes(), "session has pending changes");
    Ok(())
}

#[then("the edit is rejected because the column is terminal")]
fn rejected_as_terminal(world: &StatusEditingWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        matches!(
            world.last_edit,
            Some(Err(StatusEditError::CannotDeleteTerminal(_)))
        ),
        "expected CannotDeleteTerminal, got {:?}",
        world.last_edit
    );
    Ok(())
}

#[then(r#"the edit is rejected because the column holds {count:usize} tasks"#)]
fn rejected_as_not_empty(world: &StatusEditingWorld, count: usize) -> Result<(), eyre::Report> {
    eyre::ensure!(
        matches!(
            world.last_edit,
            Some(Err(StatusEditError::StatusNotEmpty { task_count, .. })) if task_count == count
        ),
        "expected StatusNotEmpty with {count} tasks, got {:?}",
        world.last_edit
    );
    Ok(())
}

#[then(r#"the source received "{calls}""#)]
fn source_received(world: &StatusEditingWorld, calls: String) -> Result<(), eyre::Report> {
    let recorded = world.source.recorded()?;
    let expected = split(&calls);
    eyre::ensure!(
        recorded == expected,
        "source received {recorded:?}, expected {expected:?}"
    );
    Ok(())
}

#[then("the source received no calls")]
fn source_received_nothing(world: &StatusEditingWorld) -> Result<(), eyre::Report> {
    let recorded = world.source.recorded()?;
    eyre::ensure!(recorded.is_empty(), "source received {recorded:?}");
    eyre::ensure!(
        matches!(world.last_commit, Some(Ok(_))),
        "commit failed: {:?}",
        world.last_commit
    );
    Ok(())
}

#[then(r#"the stored columns are "{columns}""#)]
fn stored_columns_are(world: &StatusEditingWorld, columns: String) -> Result<(), eyre::Report> {
    let stored = run_async(world.service.reload(world.board_id))?;
    let names: Vec<&str> = stored.iter().map(|status| status.name().as_str()).collect();
    let expected = split(&columns);
    eyre::ensure!(names == expected, "stored {names:?}, expected {expected:?}");
    let positions: Vec<u32> = run_async(world.source.fetch_statuses(world.board_id))?
        .iter()
        .map(|status| status.position())
        .collect();
    eyre::ensure!(
        positions == (0_u32..).take(positions.len()).collect::<Vec<_>>(),
        "stored positions {positions:?} are not dense"
    );
    Ok(())
}
