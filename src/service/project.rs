//! Project operations and the task<->project relationship coordinator.
//!
//! The coordinator functions (`assign_task`, `unassign_task`) are the only
//! write path for the relationship: they load both entities, validate the
//! precondition, mutate the owning side and persist both rows as one unit of
//! work, keeping the foreign key and the derived task list in agreement.

use std::collections::HashMap;

use uuid::Uuid;

use crate::dtos::{
    Page, PageRequest, ProjectRequestDto, ProjectResponseDto, ProjectSortField,
};
use crate::error::{AppResult, TaskManagerError};
use crate::filter::ProjectCriteria;
use crate::models::{Project, Task};
use crate::store::Store;

pub async fn create_project<S: Store>(
    store: &S,
    dto: ProjectRequestDto,
) -> AppResult<ProjectResponseDto> {
    let created = store.insert_project(dto.into()).await?;
    // A freshly created project has no tasks yet.
    Ok(ProjectResponseDto::new(created, Vec::new()))
}

pub async fn get_project_by_id<S: Store>(store: &S, id: Uuid) -> AppResult<ProjectResponseDto> {
    let project = store
        .find_project(id)
        .await?
        .ok_or(TaskManagerError::ProjectNotFound(id))?;
    project_response(store, project).await
}

/// Unfiltered, unpaged listing with task lists resolved in one batch query.
pub async fn get_all_projects<S: Store>(store: &S) -> AppResult<Vec<ProjectResponseDto>> {
    let projects = store.list_projects().await?;
    let ids: Vec<Uuid> = projects.iter().map(|p| p.id).collect();
    let mut by_project = group_by_project(store.tasks_in_projects(&ids).await?);

    Ok(projects
        .into_iter()
        .map(|project| {
            let tasks = by_project.remove(&project.id).unwrap_or_default();
            ProjectResponseDto::new(project, tasks)
        })
        .collect())
}

pub async fn update_project<S: Store>(
    store: &S,
    id: Uuid,
    dto: ProjectRequestDto,
) -> AppResult<ProjectResponseDto> {
    let updated = store
        .update_project(id, dto.into())
        .await?
        .ok_or(TaskManagerError::ProjectNotFound(id))?;
    project_response(store, updated).await
}

/// Delete a project. Rejected while tasks are still assigned: no cascade and
/// no implicit unassignment.
pub async fn delete_project<S: Store>(store: &S, id: Uuid) -> AppResult<()> {
    if !store.project_exists(id).await? {
        return Err(TaskManagerError::ProjectNotFound(id));
    }
    if store.count_tasks_in_project(id).await? > 0 {
        return Err(TaskManagerError::ProjectNotEmpty(id));
    }
    store.delete_project(id).await?;
    Ok(())
}

pub async fn search_projects<S: Store>(
    store: &S,
    criteria: ProjectCriteria,
    page: PageRequest<ProjectSortField>,
) -> AppResult<Page<ProjectResponseDto>> {
    let clauses = criteria.clauses();
    let result = store.search_projects(&clauses, page).await?;

    let ids: Vec<Uuid> = result.content.iter().map(|p| p.id).collect();
    let mut by_project = group_by_project(store.tasks_in_projects(&ids).await?);

    Ok(result.map(|project| {
        let tasks = by_project.remove(&project.id).unwrap_or_default();
        ProjectResponseDto::new(project, tasks)
    }))
}

/// Link a task to a project. Loads both sides (Not-Found per entity), points
/// the task's foreign key at the project and persists both rows atomically.
/// Re-assigning an already linked pair rewrites the key to the same value,
/// so the operation is idempotent.
pub async fn assign_task<S: Store>(
    store: &S,
    project_id: Uuid,
    task_id: Uuid,
) -> AppResult<ProjectResponseDto> {
    let project = store
        .find_project(project_id)
        .await?
        .ok_or(TaskManagerError::ProjectNotFound(project_id))?;
    let mut task = store
        .find_task(task_id)
        .await?
        .ok_or(TaskManagerError::TaskNotFound(task_id))?;

    task.project_id = Some(project.id);
    store.save_assignment(&task, &project).await?;

    project_response(store, project).await
}

/// Remove a task from a project. Fails with InvalidAssignment when the task
/// is not currently linked to this project; nothing is written in that case.
pub async fn unassign_task<S: Store>(
    store: &S,
    project_id: Uuid,
    task_id: Uuid,
) -> AppResult<ProjectResponseDto> {
    let project = store
        .find_project(project_id)
        .await?
        .ok_or(TaskManagerError::ProjectNotFound(project_id))?;
    let mut task = store
        .find_task(task_id)
        .await?
        .ok_or(TaskManagerError::TaskNotFound(task_id))?;

    if task.project_id != Some(project.id) {
        return Err(TaskManagerError::InvalidAssignment {
            task_id,
            project_id,
        });
    }

    task.project_id = None;
    store.save_assignment(&task, &project).await?;

    project_response(store, project).await
}

/// Project the entity with its task list re-read from the store, so the
/// response reflects the state after any mutation in the same request.
async fn project_response<S: Store>(store: &S, project: Project) -> AppResult<ProjectResponseDto> {
    let tasks = store.tasks_in_project(project.id).await?;
    Ok(ProjectResponseDto::new(project, tasks))
}

fn group_by_project(tasks: Vec<Task>) -> HashMap<Uuid, Vec<Task>> {
    let mut grouped: HashMap<Uuid, Vec<Task>> = HashMap::new();
    for task in tasks {
        if let Some(project_id) = task.project_id {
            grouped.entry(project_id).or_default().push(task);
        }
    }
    grouped
}
