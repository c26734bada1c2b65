//! Storage abstraction for tasks and projects.
//!
//! The service layer talks to a `Store` rather than to diesel directly, so
//! the predicate and relationship logic can be exercised against the
//! in-memory implementation. `PgStore` is the production backend; both
//! interpret the same filter clauses.

mod memory;
mod pg;

pub use memory::MemoryStore;
pub use pg::PgStore;

use async_trait::async_trait;
use uuid::Uuid;

use crate::dtos::{Page, PageRequest, ProjectSortField, TaskSortField};
use crate::error::AppResult;
use crate::filter::{ProjectClause, TaskClause};
use crate::models::{
    NewProject, NewTask, Project, ProjectChangeset, Task, TaskChangeset,
};

/// Record-by-id lookup, existence checks, clause-driven paged search, and
/// atomic persistence of the task<->project link.
#[async_trait]
pub trait Store: Send + Sync + 'static {
    /// Insert a task; the store assigns the id.
    async fn insert_task(&self, task: NewTask) -> AppResult<Task>;
    async fn find_task(&self, id: Uuid) -> AppResult<Option<Task>>;
    async fn list_tasks(&self) -> AppResult<Vec<Task>>;
    /// Replace all mutable fields. Returns `None` when the id does not exist.
    async fn update_task(&self, id: Uuid, changes: TaskChangeset) -> AppResult<Option<Task>>;
    /// Returns whether a row was deleted.
    async fn delete_task(&self, id: Uuid) -> AppResult<bool>;
    async fn task_exists(&self, id: Uuid) -> AppResult<bool>;
    async fn search_tasks(
        &self,
        clauses: &[TaskClause],
        page: PageRequest<TaskSortField>,
    ) -> AppResult<Page<Task>>;

    /// Insert a project; the store assigns the id.
    async fn insert_project(&self, project: NewProject) -> AppResult<Project>;
    async fn find_project(&self, id: Uuid) -> AppResult<Option<Project>>;
    async fn list_projects(&self) -> AppResult<Vec<Project>>;
    async fn update_project(
        &self,
        id: Uuid,
        changes: ProjectChangeset,
    ) -> AppResult<Option<Project>>;
    async fn delete_project(&self, id: Uuid) -> AppResult<bool>;
    async fn project_exists(&self, id: Uuid) -> AppResult<bool>;
    async fn search_projects(
        &self,
        clauses: &[ProjectClause],
        page: PageRequest<ProjectSortField>,
    ) -> AppResult<Page<Project>>;

    /// Tasks currently linked to the given project (the inverse side of the
    /// relationship, derived from the foreign key).
    async fn tasks_in_project(&self, project: Uuid) -> AppResult<Vec<Task>>;
    /// Tasks linked to any of the given projects, for batch projection.
    async fn tasks_in_projects(&self, projects: &[Uuid]) -> AppResult<Vec<Task>>;
    async fn count_tasks_in_project(&self, project: Uuid) -> AppResult<i64>;
    /// Persist both sides of an assignment change as one unit of work: the
    /// task row (owning side) and the project row are written together, so a
    /// partial update is never observable.
    async fn save_assignment(&self, task: &Task, project: &Project) -> AppResult<()>;
}
