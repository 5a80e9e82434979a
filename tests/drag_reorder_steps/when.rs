//! When steps for drag reorder BDD scenarios.

use super::world::{DragWorld, below_cards, card_center, pointer_geometry, run_async};
use corkboard::task::domain::TaskId;
use rstest_bdd_macros::when;

fn drop_at(world: &mut DragWorld, task_id: TaskId, x: i32, y: i32) -> Result<(), eyre::Report> {
    let columns = world.columns()?;
    let geometry = pointer_geometry(&columns, x, y);
    let controller = world.controller()?;
    controller.on_drag_start(task_id)?;
    controller.on_drag_over(&geometry)?;
    let outcome = run_async(controller.on_drag_end(&geometry));
    world.last_outcome = Some(outcome);
    Ok(())
}

#[when(r#"task "{task}" is dropped on task "{target}""#)]
fn dropped_on_task(world: &mut DragWorld, task: String, target: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&task)?;
    let target_id = world.task_id(&target)?;
    let columns = world.columns()?;
    let (x, y) = card_center(&columns, target_id)?;
    drop_at(world, task_id, x, y)
}

#[when(r#"task "{task}" is dropped below the cards of column "{column}""#)]
fn dropped_below_cards(
    world: &mut DragWorld,
    task: String,
    column: String,
) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&task)?;
    let status_id = world.status_id(&column)?;
    let columns = world.columns()?;
    let (x, y) = below_cards(&columns, status_id)?;
    drop_at(world, task_id, x, y)
}
