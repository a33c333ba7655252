//! Table provisioning tests against an embedded `PostgreSQL` server.

use crate::postgres::helpers::{
    BoxError, PostgresCluster, postgres_cluster, setup_store, test_runtime,
};
use rstest::rstest;
use taskboard::task::{
    domain::CreateTaskInput,
    ports::{TableProvisioner, TaskStore, provision_at_startup},
};

#[rstest]
#[ignore = "starts an embedded PostgreSQL server (downloads binaries on first use)"]
fn ensure_table_creates_the_missing_table(
    postgres_cluster: Result<PostgresCluster, BoxError>,
) -> Result<(), BoxError> {
    let cluster = postgres_cluster?;
    let context = setup_store(cluster)?;
    let rt = test_runtime()?;

    rt.block_on(context.provisioner.ensure_table())?;

    // The store is usable immediately after provisioning.
    let tasks = rt.block_on(context.store.list_tasks())?;
    assert!(tasks.is_empty());
    Ok(())
}

#[rstest]
#[ignore = "starts an embedded PostgreSQL server (downloads binaries on first use)"]
fn ensure_table_is_a_no_op_when_the_table_exists(
    postgres_cluster: Result<PostgresCluster, BoxError>,
) -> Result<(), BoxError> {
    let cluster = postgres_cluster?;
    let context = setup_store(cluster)?;
    let rt = test_runtime()?;

    rt.block_on(context.provisioner.ensure_table())?;
    let input = CreateTaskInput::new("Survivor", "alice", "2024-01-01", "2024-01-02", "open")?;
    let created = rt.block_on(context.store.create_task(input))?;

    // Second provisioning run must not touch the existing data.
    rt.block_on(context.provisioner.ensure_table())?;
    let fetched = rt.block_on(context.store.get_task(created.task_id()))?;
    assert_eq!(fetched, Some(created));
    Ok(())
}

#[rstest]
#[ignore = "starts an embedded PostgreSQL server (downloads binaries on first use)"]
fn startup_provisioning_runs_to_completion(
    postgres_cluster: Result<PostgresCluster, BoxError>,
) -> Result<(), BoxError> {
    let cluster = postgres_cluster?;
    let context = setup_store(cluster)?;
    let rt = test_runtime()?;

    rt.block_on(provision_at_startup(&context.provisioner));
    let tasks = rt.block_on(context.store.list_tasks())?;
    assert!(tasks.is_empty());
    Ok(())
}
