//! Given steps for board reconciliation BDD scenarios.

use super::world::{BoardWorld, run_async};
use eyre::WrapErr;
use pinboard::board::domain::{ColumnId, TaskDraft};
use rstest_bdd_macros::given;

#[given("a loaded board")]
fn loaded_board(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    run_async(world.service.load()).wrap_err("load initial board")?;
    Ok(())
}

#[given(r#"a task "{title}" in column "{column}""#)]
fn task_in_column(
    world: &mut BoardWorld,
    title: String,
    column: String,
) -> Result<(), eyre::Report> {
    run_async(
        world
            .service
            .add_task(&ColumnId::new(column), TaskDraft::new(title)),
    )
    .wrap_err("seed task into column")?;
    Ok(())
}

#[given("the store rejects the next reposition batch")]
fn arm_reposition_failure(world: &mut BoardWorld) {
    world.store.reject_next_reposition();
}
