//! When steps for status editing BDD scenarios.

use super::world::{StatusEditingWorld, run_async};
use rstest_bdd_macros::when;

#[when(r#"column "{name}" is added with color "{color}""#)]
fn column_added(
    world: &mut StatusEditingWorld,
    name: String,
    color: String,
) -> Result<(), eyre::Report> {
    let result = world.session()?.add_status(&name, &color).map(|_| ());
    world.last_edit = Some(result);
    Ok(())
}

#[when(r#"column "{column}" is deleted"#)]
fn column_deleted(world: &mut StatusEditingWorld, column: String) -> Result<(), eyre::Report> {
    let status_id = world.status_id(&column)?;
    let task_count = world.task_counts.get(&status_id).copied().unwrap_or_default();
    let result = world.session()?.request_delete(status_id, task_count);
    world.last_edit = Some(result);
    Ok(())
}

#[when(r#"the deletion of column "{column}" is undone"#)]
fn deletion_undone(world: &mut StatusEditingWorld, column: String) -> Result<(), eyre::Report> {
    let status_id = world.status_id(&column)?;
    let result = world.session()?.undo_delete(status_id);
    world.last_edit = Some(result);
    Ok(())
}

#[when("the changes are committed")]
fn changes_committed(world: &mut StatusEditingWorld) -> Result<(), eyre::Report> {
    world.session()?;
    let session = world
        .session
        .take()
        .ok_or_else(|| eyre::eyre!("edit session was not loaded"))?;
    let result = run_async(world.service.commit(session));
    world.last_commit = Some(result);
    Ok(())
}
