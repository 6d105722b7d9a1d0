//! When steps for board reconciliation BDD scenarios.

use super::world::{BoardWorld, run_async};
use eyre::WrapErr;
use pinboard::board::domain::{DropTarget, TaskId};
use rstest_bdd_macros::when;

#[when(r#""{moved}" is dropped on "{reference}""#)]
fn drop_task_on_task(
    world: &mut BoardWorld,
    moved: String,
    reference: String,
) -> Result<(), eyre::Report> {
    let moved_id = world
        .task_by_title(&moved)
        .ok_or_else(|| eyre::eyre!("moved task {moved:?} not on the published board"))?;
    let reference_id = world
        .task_by_title(&reference)
        .ok_or_else(|| eyre::eyre!("reference task {reference:?} not on the published board"))?;

    run_async(
        world
            .service
            .move_task(&moved_id, &DropTarget::OnTask(reference_id)),
    )
    .wrap_err("move task")?;
    Ok(())
}

#[when("an unknown task is deleted")]
fn delete_unknown_task(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    run_async(world.service.delete_task(&TaskId::new("ghost")))
        .wrap_err("delete unknown task")?;
    Ok(())
}
