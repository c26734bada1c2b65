//! Task operations.

use uuid::Uuid;

use crate::dtos::{Page, PageRequest, TaskRequestDto, TaskResponseDto, TaskSortField};
use crate::error::{AppResult, TaskManagerError};
use crate::filter::TaskCriteria;
use crate::store::Store;

pub async fn create_task<S: Store>(store: &S, dto: TaskRequestDto) -> AppResult<TaskResponseDto> {
    let created = store.insert_task(dto.into()).await?;
    Ok(created.into())
}

pub async fn get_task_by_id<S: Store>(store: &S, id: Uuid) -> AppResult<TaskResponseDto> {
    let task = store
        .find_task(id)
        .await?
        .ok_or(TaskManagerError::TaskNotFound(id))?;
    Ok(task.into())
}

/// Unfiltered, unpaged listing. Acceptable only because the system targets
/// small datasets; paged access goes through `search_tasks`.
pub async fn get_all_tasks<S: Store>(store: &S) -> AppResult<Vec<TaskResponseDto>> {
    let tasks = store.list_tasks().await?;
    Ok(tasks.into_iter().map(Into::into).collect())
}

/// Replace all mutable fields of the task in one call. The project link is
/// untouched; it belongs to the relationship coordinator.
pub async fn update_task<S: Store>(
    store: &S,
    id: Uuid,
    dto: TaskRequestDto,
) -> AppResult<TaskResponseDto> {
    let updated = store
        .update_task(id, dto.into())
        .await?
        .ok_or(TaskManagerError::TaskNotFound(id))?;
    Ok(updated.into())
}

pub async fn delete_task<S: Store>(store: &S, id: Uuid) -> AppResult<()> {
    if !store.task_exists(id).await? {
        return Err(TaskManagerError::TaskNotFound(id));
    }
    store.delete_task(id).await?;
    Ok(())
}

/// Paged, filtered search: compiles the criteria into filter clauses and
/// maps the resulting page into response shape.
pub async fn search_tasks<S: Store>(
    store: &S,
    criteria: TaskCriteria,
    page: PageRequest<TaskSortField>,
) -> AppResult<Page<TaskResponseDto>> {
    let clauses = criteria.clauses();
    let result = store.search_tasks(&clauses, page).await?;
    Ok(result.map(Into::into))
}
