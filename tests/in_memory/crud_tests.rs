//! Round-trip, enumeration, and deletion tests against the in-memory store.

use crate::in_memory::helpers::{TestService, assert_ids_listed, create_request, service, store};
use rstest::rstest;
use taskboard::task::{
    adapters::memory::InMemoryTaskStore,
    domain::{CreateTaskInput, TaskId},
    ports::{TableProvisioner, TaskStore, provision_at_startup},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_record_round_trips_through_lookup(service: TestService) {
    let created = service
        .create_task(create_request("Design review"))
        .await
        .expect("create should succeed");

    let fetched = service
        .get_task(created.task_id())
        .await
        .expect("lookup should succeed")
        .expect("record should exist");

    assert_eq!(fetched.task_name(), "Design review");
    assert_eq!(fetched.assigned_to(), "alice");
    assert_eq!(fetched.start_date(), "2024-01-01");
    assert_eq!(fetched.end_date(), "2024-01-02");
    assert_eq!(fetched.status(), "open");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn enumeration_contains_every_created_record(
    service: TestService,
) -> Result<(), eyre::Report> {
    let mut ids: Vec<TaskId> = Vec::new();
    for index in 0..25 {
        let created = service
            .create_task(create_request(&format!("Task {index}")))
            .await?;
        ids.push(created.task_id());
    }

    let listed = service.list_tasks().await?;
    assert_ids_listed(&listed, &ids)?;
    assert_eq!(listed.len(), 25);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_twice_succeeds_and_lookup_stays_absent(service: TestService) {
    let created = service
        .create_task(create_request("Disposable"))
        .await
        .expect("create should succeed");
    let task_id = created.task_id();

    service.delete_task(task_id).await.expect("first delete");
    assert_eq!(service.get_task(task_id).await.expect("lookup"), None);

    service.delete_task(task_id).await.expect("second delete");
    assert_eq!(service.get_task(task_id).await.expect("lookup"), None);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_an_unknown_identifier_is_not_an_error(service: TestService) {
    service
        .delete_task(TaskId::new())
        .await
        .expect("delete of unknown id should succeed");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn store_port_create_generates_the_identifier(store: InMemoryTaskStore) {
    let input = CreateTaskInput::new("Port-level", "dave", "2024-03-01", "2024-03-02", "open")
        .expect("valid input");
    let created = store.create_task(input).await.expect("create");

    assert!(!created.task_id().to_string().is_empty());
    let fetched = store
        .get_task(created.task_id())
        .await
        .expect("lookup")
        .expect("record should exist");
    assert_eq!(fetched, created);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn provisioning_is_idempotent_and_non_fatal(store: InMemoryTaskStore) {
    store.ensure_table().await.expect("first provisioning");
    store.ensure_table().await.expect("second provisioning");
    provision_at_startup(&store).await;

    assert!(store.list_tasks().await.expect("listing").is_empty());
}
