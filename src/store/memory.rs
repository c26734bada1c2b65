//! In-memory store used by the test suite.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use uuid::Uuid;

use crate::dtos::{Page, PageRequest, ProjectSortField, SortDirection, TaskSortField};
use crate::error::{AppResult, TaskManagerError};
use crate::filter::{self, ProjectClause, TaskClause};
use crate::models::{
    NewProject, NewTask, Project, ProjectChangeset, Task, TaskChangeset,
};

use super::Store;

/// Hash-map backed store interpreting the same filter clauses as `PgStore`.
/// A single lock region stands in for the transaction boundary, so the
/// two-sided assignment write is atomic here as well.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Default)]
struct Inner {
    tasks: HashMap<Uuid, Task>,
    projects: HashMap<Uuid, Project>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, Inner>> {
        self.inner
            .read()
            .map_err(|_| TaskManagerError::Internal("store lock poisoned".to_string()))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, Inner>> {
        self.inner
            .write()
            .map_err(|_| TaskManagerError::Internal("store lock poisoned".to_string()))
    }
}

fn sort_tasks(rows: &mut [Task], field: TaskSortField, direction: SortDirection) {
    rows.sort_by(|a, b| {
        let ordering = match field {
            TaskSortField::Id => a.id.cmp(&b.id),
            TaskSortField::Name => a.name.cmp(&b.name),
            TaskSortField::Priority => a.priority.cmp(&b.priority),
            TaskSortField::Status => a.status.cmp(&b.status),
            TaskSortField::DueDate => a.due_date.cmp(&b.due_date),
        };
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

fn sort_projects(rows: &mut [Project], field: ProjectSortField, direction: SortDirection) {
    rows.sort_by(|a, b| {
        let ordering = match field {
            ProjectSortField::Id => a.id.cmp(&b.id),
            ProjectSortField::Name => a.name.cmp(&b.name),
            ProjectSortField::Description => a.description.cmp(&b.description),
        };
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

fn slice_page<T, F>(mut rows: Vec<T>, page: PageRequest<F>) -> Page<T> {
    let total = rows.len() as i64;
    let offset = page.offset().min(total) as usize;
    rows = rows
        .into_iter()
        .skip(offset)
        .take(page.size.max(0) as usize)
        .collect();
    Page::new(rows, page.page, page.size, total)
}

#[async_trait]
impl Store for MemoryStore {
    async fn insert_task(&self, task: NewTask) -> AppResult<Task> {
        let created = Task {
            id: Uuid::new_v4(),
            name: task.name,
            description: task.description,
            priority: task.priority,
            status: task.status,
            due_date: task.due_date,
            project_id: None,
        };
        self.write()?.tasks.insert(created.id, created.clone());
        Ok(created)
    }

    async fn find_task(&self, id: Uuid) -> AppResult<Option<Task>> {
        Ok(self.read()?.tasks.get(&id).cloned())
    }

    async fn list_tasks(&self) -> AppResult<Vec<Task>> {
        let mut rows: Vec<Task> = self.read()?.tasks.values().cloned().collect();
        rows.sort_by_key(|t| t.id);
        Ok(rows)
    }

    async fn update_task(&self, id: Uuid, changes: TaskChangeset) -> AppResult<Option<Task>> {
        let mut guard = self.write()?;
        let Some(task) = guard.tasks.get_mut(&id) else {
            return Ok(None);
        };
        task.name = changes.name;
        task.description = changes.description;
        task.priority = changes.priority;
        task.status = changes.status;
        task.due_date = changes.due_date;
        Ok(Some(task.clone()))
    }

    async fn delete_task(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.write()?.tasks.remove(&id).is_some())
    }

    async fn task_exists(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.read()?.tasks.contains_key(&id))
    }

    async fn search_tasks(
        &self,
        clauses: &[TaskClause],
        page: PageRequest<TaskSortField>,
    ) -> AppResult<Page<Task>> {
        let mut rows: Vec<Task> = self
            .read()?
            .tasks
            .values()
            .filter(|task| filter::task_matches(task, clauses))
            .cloned()
            .collect();
        sort_tasks(&mut rows, page.sort_field, page.direction);
        Ok(slice_page(rows, page))
    }

    async fn insert_project(&self, project: NewProject) -> AppResult<Project> {
        let created = Project {
            id: Uuid::new_v4(),
            name: project.name,
            description: project.description,
        };
        self.write()?.projects.insert(created.id, created.clone());
        Ok(created)
    }

    async fn find_project(&self, id: Uuid) -> AppResult<Option<Project>> {
        Ok(self.read()?.projects.get(&id).cloned())
    }

    async fn list_projects(&self) -> AppResult<Vec<Project>> {
        let mut rows: Vec<Project> = self.read()?.projects.values().cloned().collect();
        rows.sort_by_key(|p| p.id);
        Ok(rows)
    }

    async fn update_project(
        &self,
        id: Uuid,
        changes: ProjectChangeset,
    ) -> AppResult<Option<Project>> {
        let mut guard = self.write()?;
        let Some(project) = guard.projects.get_mut(&id) else {
            return Ok(None);
        };
        project.name = changes.name;
        project.description = changes.description;
        Ok(Some(project.clone()))
    }

    async fn delete_project(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.write()?.projects.remove(&id).is_some())
    }

    async fn project_exists(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.read()?.projects.contains_key(&id))
    }

    async fn search_projects(
        &self,
        clauses: &[ProjectClause],
        page: PageRequest<ProjectSortField>,
    ) -> AppResult<Page<Project>> {
        let mut rows: Vec<Project> = self
            .read()?
            .projects
            .values()
            .filter(|project| filter::project_matches(project, clauses))
            .cloned()
            .collect();
        sort_projects(&mut rows, page.sort_field, page.direction);
        Ok(slice_page(rows, page))
    }

    async fn tasks_in_project(&self, project: Uuid) -> AppResult<Vec<Task>> {
        let mut rows: Vec<Task> = self
            .read()?
            .tasks
            .values()
            .filter(|task| task.project_id == Some(project))
            .cloned()
            .collect();
        rows.sort_by_key(|t| t.id);
        Ok(rows)
    }

    async fn tasks_in_projects(&self, projects: &[Uuid]) -> AppResult<Vec<Task>> {
        let mut rows: Vec<Task> = self
            .read()?
            .tasks
            .values()
            .filter(|task| {
                task.project_id
                    .is_some_and(|pid| projects.contains(&pid))
            })
            .cloned()
            .collect();
        rows.sort_by_key(|t| t.id);
        Ok(rows)
    }

    async fn count_tasks_in_project(&self, project: Uuid) -> AppResult<i64> {
        let count = self
            .read()?
            .tasks
            .values()
            .filter(|task| task.project_id == Some(project))
            .count();
        Ok(count as i64)
    }

    async fn save_assignment(&self, task: &Task, project: &Project) -> AppResult<()> {
        let mut guard = self.write()?;
        guard.tasks.insert(task.id, task.clone());
        guard.projects.insert(project.id, project.clone());
        Ok(())
    }
}
