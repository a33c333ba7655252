//! Full create/edit/delete walkthrough mirroring the presentation flow.

use crate::in_memory::helpers::{TestService, service};
use rstest::rstest;
use taskboard::task::services::{CreateTaskRequest, UpdateTaskRequest};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_edit_delete_walkthrough(service: TestService) {
    // POST /create
    let created = service
        .create_task(CreateTaskRequest::new(
            "Design review",
            "alice",
            "2024-01-01",
            "2024-01-02",
            "open",
        ))
        .await
        .expect("create should succeed");
    assert!(!created.task_id().to_string().is_empty());

    // GET /edit/:task_id
    let fetched = service
        .get_task(created.task_id())
        .await
        .expect("lookup")
        .expect("record should exist");
    assert_eq!(fetched.task_name(), "Design review");
    assert_eq!(fetched.assigned_to(), "alice");
    assert_eq!(fetched.start_date(), "2024-01-01");
    assert_eq!(fetched.end_date(), "2024-01-02");
    assert_eq!(fetched.status(), "open");

    // POST /update/:task_id
    service
        .update_task(
            created.task_id(),
            UpdateTaskRequest::new("bob", "2024-01-01", "2024-01-03", "closed"),
        )
        .await
        .expect("update should succeed");
    let edited = service
        .get_task(created.task_id())
        .await
        .expect("lookup")
        .expect("record should exist");
    assert_eq!(edited.assigned_to(), "bob");
    assert_eq!(edited.status(), "closed");
    assert_eq!(edited.task_name(), "Design review");

    // POST /delete/:task_id
    service
        .delete_task(created.task_id())
        .await
        .expect("delete should succeed");
    assert_eq!(
        service.get_task(created.task_id()).await.expect("lookup"),
        None
    );
}
