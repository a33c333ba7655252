//! Partial-update semantics against the in-memory store.

use crate::in_memory::helpers::{TestService, create_request, service, store};
use rstest::rstest;
use taskboard::task::{
    adapters::memory::InMemoryTaskStore,
    domain::{TaskId, UpdateTaskInput},
    ports::TaskStore,
    services::UpdateTaskRequest,
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_changes_only_the_four_mutable_attributes(service: TestService) {
    let created = service
        .create_task(create_request("Design review"))
        .await
        .expect("create should succeed");

    service
        .update_task(
            created.task_id(),
            UpdateTaskRequest::new("bob", "2024-01-01", "2024-01-03", "closed"),
        )
        .await
        .expect("update should succeed");

    let fetched = service
        .get_task(created.task_id())
        .await
        .expect("lookup")
        .expect("record should exist");

    assert_eq!(fetched.task_id(), created.task_id());
    assert_eq!(fetched.task_name(), "Design review");
    assert_eq!(fetched.assigned_to(), "bob");
    assert_eq!(fetched.start_date(), "2024-01-01");
    assert_eq!(fetched.end_date(), "2024-01-03");
    assert_eq!(fetched.status(), "closed");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_of_unknown_identifier_materialises_a_partial_record(store: InMemoryTaskStore) {
    let task_id = TaskId::new();
    let input = UpdateTaskInput::new("bob", "2024-01-01", "2024-01-03", "closed")
        .expect("valid update input");

    let updated = store.update_task(task_id, input).await.expect("update");

    assert_eq!(updated.task_id(), task_id);
    assert_eq!(updated.task_name(), "");
    assert_eq!(updated.assigned_to(), "bob");

    let fetched = store
        .get_task(task_id)
        .await
        .expect("lookup")
        .expect("partial record should exist");
    assert_eq!(fetched.task_name(), "");
    assert_eq!(fetched.status(), "closed");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn sequential_updates_apply_last_write_wins(service: TestService) {
    let created = service
        .create_task(create_request("Contended"))
        .await
        .expect("create should succeed");

    service
        .update_task(
            created.task_id(),
            UpdateTaskRequest::new("bob", "2024-01-01", "2024-01-03", "open"),
        )
        .await
        .expect("first update");
    service
        .update_task(
            created.task_id(),
            UpdateTaskRequest::new("carol", "2024-01-02", "2024-01-04", "closed"),
        )
        .await
        .expect("second update");

    let fetched = service
        .get_task(created.task_id())
        .await
        .expect("lookup")
        .expect("record should exist");
    assert_eq!(fetched.assigned_to(), "carol");
    assert_eq!(fetched.status(), "closed");
}
