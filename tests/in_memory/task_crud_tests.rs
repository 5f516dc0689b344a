//! In-memory integration tests for task use cases.

use super::helpers::{TestService, assert_record, service_over, task_id, two_task_store};
use rstest::{fixture, rstest};
use taskport::task::{
    adapters::memory::{IdAssignment, TaskRecord, TaskRepositoryConfig, TaskStore},
    domain::{Task, TaskStatus},
    ports::{TaskUseCase, TaskUseCaseError},
};

#[fixture]
fn store() -> TaskStore {
    two_task_store().expect("fixture store is valid")
}

#[fixture]
fn wired(store: TaskStore) -> (TaskStore, TestService) {
    let service = service_over(&store, TaskRepositoryConfig::default());
    (store, service)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_new_task_extends_the_store(
    wired: (TaskStore, TestService),
) -> Result<(), eyre::Report> {
    let (store, service) = wired;

    let created = service.create_task("New Task".to_owned()).await?;

    assert_eq!(
        created,
        Task::new(task_id(3)?, "New Task", TaskStatus::Incomplete)
    );
    assert_eq!(store.len(), 3);
    assert_record(&store, task_id(3)?, "New Task", TaskStatus::Incomplete)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_replaces_name_and_status(
    wired: (TaskStore, TestService),
) -> Result<(), eyre::Report> {
    let (store, service) = wired;

    let updated = service
        .update_task("Updated".to_owned(), TaskStatus::Complete, task_id(1)?)
        .await?;

    assert_eq!(
        updated,
        Task::new(task_id(1)?, "Updated", TaskStatus::Complete)
    );
    assert_record(&store, task_id(1)?, "Updated", TaskStatus::Complete)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_leaves_only_the_other_task(
    wired: (TaskStore, TestService),
) -> Result<(), eyre::Report> {
    let (store, service) = wired;

    service.delete_task(task_id(2)?).await?;

    let ids: Vec<_> = store.snapshot().into_iter().map(|(id, _)| id).collect();
    assert_eq!(ids, vec![task_id(1)?]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_unknown_id_fails_without_changes(
    wired: (TaskStore, TestService),
) -> Result<(), eyre::Report> {
    let (store, service) = wired;
    let before = store.snapshot();

    let result = service
        .update_task("x".to_owned(), TaskStatus::Incomplete, task_id(999)?)
        .await;

    let missing = task_id(999)?;
    assert!(matches!(result, Err(TaskUseCaseError::NotFound(id)) if id == missing));
    assert_eq!(store.snapshot(), before);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_reflects_every_mutation(
    wired: (TaskStore, TestService),
) -> Result<(), eyre::Report> {
    let (_store, service) = wired;

    service.create("Third").await?;
    service
        .update_task("Task 1".to_owned(), TaskStatus::Complete, task_id(1)?)
        .await?;
    service.delete_task(task_id(2)?).await?;

    let mut tasks = service.list_tasks().await?;
    tasks.sort_by_key(Task::id);
    assert_eq!(
        tasks,
        vec![
            Task::new(task_id(1)?, "Task 1", TaskStatus::Complete),
            Task::new(task_id(3)?, "Third", TaskStatus::Incomplete),
        ]
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn malformed_status_surfaces_through_the_service() -> Result<(), eyre::Report> {
    let store = TaskStore::from_records([(task_id(1)?, TaskRecord::new("Broken", 9))]);
    let service = service_over(&store, TaskRepositoryConfig::default());

    let result = service.list_tasks().await;

    assert!(matches!(result, Err(TaskUseCaseError::InvalidStatusCode(_))));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn monotonic_ids_survive_deletions(store: TaskStore) -> Result<(), eyre::Report> {
    let config = TaskRepositoryConfig::new().with_id_assignment(IdAssignment::Monotonic);
    let service = service_over(&store, config);

    service.delete_task(task_id(1)?).await?;
    let first = service.create("A").await?;
    service.delete_task(first.id()).await?;
    let second = service.create("B").await?;

    assert_eq!(first.id(), task_id(3)?);
    assert_eq!(second.id(), task_id(4)?);
    assert!(!store.contains(task_id(3)?));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_creates_keep_every_record() -> Result<(), eyre::Report> {
    let store = TaskStore::new();
    let config = TaskRepositoryConfig::new().with_id_assignment(IdAssignment::Monotonic);
    let service = service_over(&store, config);

    let handles: Vec<_> = (0..16)
        .map(|n| {
            let worker = service.clone();
            tokio::spawn(async move { worker.create(format!("task {n}")).await })
        })
        .collect();
    for handle in handles {
        handle.await??;
    }

    assert_eq!(store.len(), 16);
    Ok(())
}
