//! Persisted ordering tests: repositioning writes survive a fresh fetch.

use super::helpers::{col, rig, rig_sharing, task_at, titles};
use pinboard::board::domain::{DropTarget, TaskDraft};

#[tokio::test(flavor = "multi_thread")]
async fn cross_column_move_is_ordered_after_reload() {
    let writer = rig();
    writer.service.load().await.expect("load should succeed");
    writer
        .service
        .add_task(&col("todo"), TaskDraft::new("Project setup"))
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
    let moved = task_at(&board, "todo", 0);
    let reference = task_at(&board, "doing", 0);
    writer
        .service
        .move_task(&moved, &DropTarget::OnTask(reference))
        .await
        .expect("move should succeed");

    let reader = rig_sharing(&writer.store);
    let reloaded = reader.service.load().await.expect("load should succeed");
    assert_eq!(titles(&reloaded, "todo"), vec!["Design columns"]);
    assert_eq!(
        titles(&reloaded, "doing"),
        vec!["Project setup", "Drag & drop"]
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn same_column_reorder_is_ordered_after_reload() {
    let writer = rig();
    writer.service.load().await.expect("load should succeed");
    for title in ["Project setup", "Design columns", "Write README"] {
        writer
            .service
            .add_task(&col("todo"), TaskDraft::new(title))
            .await
            .expect("add should succeed");
    }

    let board = writer.publisher.latest().expect("a board was published");
    let last = task_at(&board, "todo", 2);
    let first = task_at(&board, "todo", 0);
    writer
        .service
        .move_task(&last, &DropTarget::OnTask(first))
        .await
        .expect("move should succeed");

    let reader = rig_sharing(&writer.store);
    let reloaded = reader.service.load().await.expect("load should succeed");
    assert_eq!(
        titles(&reloaded, "todo"),
        vec!["Write README", "Project setup", "Design columns"]
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn repeated_moves_keep_sequences_consistent() {
    let writer = rig();
    writer.service.load().await.expect("load should succeed");
    for title in ["a", "b", "c"] {
        writer
            .service
            .add_task(&col("todo"), TaskDraft::new(title))
            .await
            .expect("add should succeed");
    }

    let board = writer.publisher.latest().expect("a board was published");
    let a = task_at(&board, "todo", 0);
    writer
        .service
        .move_task(&a, &DropTarget::OnColumn(col("doing")))
        .await
        .expect("move should succeed");
    writer
        .service
        .move_task(&a, &DropTarget::OnColumn(col("done")))
        .await
        .expect("move should succeed");
    writer
        .service
        .move_task(&a, &DropTarget::OnColumn(col("todo")))
        .await
        .expect("move should succeed");

    let reader = rig_sharing(&writer.store);
    let reloaded = reader.service.load().await.expect("load should succeed");
    assert_eq!(titles(&reloaded, "todo"), vec!["b", "c", "a"]);
    assert!(titles(&reloaded, "doing").is_empty());
    assert!(titles(&reloaded, "done").is_empty());
    reloaded.verify().expect("board invariants should hold");
}
