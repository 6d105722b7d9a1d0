//! Command round-trip tests against the in-memory store.

use super::helpers::{col, rig, rig_sharing, task_at, titles};
use pinboard::board::domain::{DropTarget, Priority, TaskDraft};

#[tokio::test(flavor = "multi_thread")]
async fn load_seeds_default_columns_once() {
    let first = rig();
    let board = first.service.load().await.expect("load should succeed");
    let ids: Vec<_> = board
        .columns()
        .iter()
        .map(|column| column.id().as_str().to_owned())
        .collect();
    assert_eq!(ids, vec!["todo", "doing", "done"]);

    // A second load does not reseed or duplicate columns.
    let reloaded = first.service.load().await.expect("reload should succeed");
    assert_eq!(reloaded.columns().len(), 3);
}

#[tokio::test(flavor = "multi_thread")]
async fn full_command_flow_survives_reload_by_second_client() {
    let writer = rig();
    writer.service.load().await.expect("load should succeed");
    writer
        .service
        .add_task(
            &col("todo"),
            TaskDraft::new("Project setup")
                .with_priority(Priority::High)
                .with_assignee("KB"),
        )
        .await
        .expect("add should succeed");
    writer
        .service
        .add_task(&col("todo"), TaskDraft::new("Design columns"))
        .await
        .expect("add should succeed");
    writer
        .service
        .add_task(&col("doing"), TaskDraft::new("Drag & drop"))
        .await
        .expect("add should succeed");

    let board = writer.publisher.latest().expect("a board was published");
    let setup = task_at(&board, "todo", 0);
    writer
        .service
        .edit_task(&setup, TaskDraft::new("Project setup v2"))
        .await
        .expect("edit should succeed");
    writer
        .service
        .move_task(&setup, &DropTarget::OnColumn(col("done")))
        .await
        .expect("move should succeed");

    let reader = rig_sharing(&writer.store);
    let reloaded = reader.service.load().await.expect("load should succeed");

    assert_eq!(titles(&reloaded, "todo"), vec!["Design columns"]);
    assert_eq!(titles(&reloaded, "doing"), vec!["Drag & drop"]);
    assert_eq!(titles(&reloaded, "done"), vec!["Project setup v2"]);
    assert_eq!(
        reloaded,
        writer.publisher.latest().expect("a board was published")
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_record_from_store() {
    let writer = rig();
    writer.service.load().await.expect("load should succeed");
    writer
        .service
        .add_task(&col("done"), TaskDraft::new("Write README"))
        .await
        .expect("add should succeed");

    let board = writer.publisher.latest().expect("a board was published");
    let readme = task_at(&board, "done", 0);
    writer
        .service
        .delete_task(&readme)
        .await
        .expect("delete should succeed");

    let reader = rig_sharing(&writer.store);
    let reloaded = reader.service.load().await.expect("load should succeed");
    assert!(reloaded.task(&readme).is_none());
    assert!(titles(&reloaded, "done").is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn reloaded_board_upholds_structural_invariants() {
    let writer = rig();
    writer.service.load().await.expect("load should succeed");
    for (column, title) in [
        ("todo", "Project setup"),
        ("todo", "Design columns"),
        ("doing", "Drag & drop"),
        ("done", "Write README"),
    ] {
        writer
            .service
            .add_task(&col(column), TaskDraft::new(title))
            .await
            .expect("add should succeed");
    }

    let reader = rig_sharing(&writer.store);
    let reloaded = reader.service.load().await.expect("load should succeed");
    reloaded.verify().expect("board invariants should hold");
}
