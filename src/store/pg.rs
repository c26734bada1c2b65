//! PostgreSQL store backed by diesel-async.

use std::future::Future;
use std::pin::Pin;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::dtos::{
    Page, PageRequest, ProjectSortField, SortDirection, TaskSortField, escape_like_pattern,
};
use crate::error::{AppResult, TaskManagerError};
use crate::filter::{ProjectClause, TaskClause, TextField};
use crate::models::{
    NewProject, NewTask, Project, ProjectChangeset, Task, TaskChangeset,
};
use crate::{Conn, DbPool};

use super::Store;

type BoxedTaskQuery<'a> = crate::schema::tasks::BoxedQuery<'a, diesel::pg::Pg>;
type BoxedProjectQuery<'a> = crate::schema::projects::BoxedQuery<'a, diesel::pg::Pg>;

#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn conn(&self) -> AppResult<Conn<'_>> {
        self.pool
            .get()
            .await
            .map_err(|e| TaskManagerError::Pool(e.to_string()))
    }
}

/// Execute a closure within a database transaction.
/// Automatically rolls back on error. Commits on success.
/// Callers must wrap their async block with `Box::pin(async move { ... })`.
async fn run_in_transaction<'a, T: Send>(
    conn: &mut Conn<'a>,
    f: impl for<'c> FnOnce(
        &'c mut Conn<'a>,
    ) -> Pin<Box<dyn Future<Output = AppResult<T>> + Send + 'c>>,
) -> AppResult<T> {
    diesel::sql_query("BEGIN").execute(&mut *conn).await?;
    match f(conn).await {
        Ok(val) => {
            diesel::sql_query("COMMIT").execute(&mut *conn).await?;
            Ok(val)
        }
        Err(e) => {
            if let Err(rb_err) = diesel::sql_query("ROLLBACK").execute(&mut *conn).await {
                log::error!("Failed to rollback transaction: {}", rb_err);
            }
            Err(e)
        }
    }
}

fn like(needle: &str) -> String {
    format!("%{}%", escape_like_pattern(needle))
}

/// Translate filter clauses onto a boxed task query. Clauses stack as AND
/// filters; the search clause becomes a single OR group.
fn apply_task_clauses<'a>(
    mut query: BoxedTaskQuery<'a>,
    clauses: &[TaskClause],
) -> BoxedTaskQuery<'a> {
    use crate::schema::tasks::dsl::*;

    for clause in clauses {
        query = match clause {
            TaskClause::StatusEq(value) => query.filter(status.eq(*value)),
            TaskClause::PriorityEq(value) => query.filter(priority.eq(*value)),
            TaskClause::ProjectEq(value) => query.filter(project_id.eq(*value)),
            TaskClause::DueOnOrAfter(value) => query.filter(due_date.ge(*value)),
            TaskClause::DueOnOrBefore(value) => query.filter(due_date.le(*value)),
            TaskClause::Contains(TextField::Name, needle) => {
                query.filter(name.ilike(like(needle)))
            }
            TaskClause::Contains(TextField::Description, needle) => {
                query.filter(description.ilike(like(needle)))
            }
            TaskClause::SearchAny(needle) => {
                query.filter(name.ilike(like(needle)).or(description.ilike(like(needle))))
            }
            TaskClause::IdEq(value) => query.filter(id.eq(*value)),
        };
    }

    query
}

fn apply_project_clauses<'a>(
    mut query: BoxedProjectQuery<'a>,
    clauses: &[ProjectClause],
) -> BoxedProjectQuery<'a> {
    use crate::schema::projects::dsl::*;

    for clause in clauses {
        query = match clause {
            ProjectClause::IdEq(value) => query.filter(id.eq(*value)),
            ProjectClause::Contains(TextField::Name, needle) => {
                query.filter(name.ilike(like(needle)))
            }
            ProjectClause::Contains(TextField::Description, needle) => {
                query.filter(description.ilike(like(needle)))
            }
        };
    }

    query
}

fn order_tasks<'a>(
    query: BoxedTaskQuery<'a>,
    field: TaskSortField,
    direction: SortDirection,
) -> BoxedTaskQuery<'a> {
    use crate::schema::tasks::dsl::*;

    match (field, direction) {
        (TaskSortField::Id, SortDirection::Asc) => query.order(id.asc()),
        (TaskSortField::Id, SortDirection::Desc) => query.order(id.desc()),
        (TaskSortField::Name, SortDirection::Asc) => query.order(name.asc()),
        (TaskSortField::Name, SortDirection::Desc) => query.order(name.desc()),
        (TaskSortField::Priority, SortDirection::Asc) => query.order(priority.asc()),
        (TaskSortField::Priority, SortDirection::Desc) => query.order(priority.desc()),
        (TaskSortField::Status, SortDirection::Asc) => query.order(status.asc()),
        (TaskSortField::Status, SortDirection::Desc) => query.order(status.desc()),
        (TaskSortField::DueDate, SortDirection::Asc) => query.order(due_date.asc()),
        (TaskSortField::DueDate, SortDirection::Desc) => query.order(due_date.desc()),
    }
}

fn order_projects<'a>(
    query: BoxedProjectQuery<'a>,
    field: ProjectSortField,
    direction: SortDirection,
) -> BoxedProjectQuery<'a> {
    use crate::schema::projects::dsl::*;

    match (field, direction) {
        (ProjectSortField::Id, SortDirection::Asc) => query.order(id.asc()),
        (ProjectSortField::Id, SortDirection::Desc) => query.order(id.desc()),
        (ProjectSortField::Name, SortDirection::Asc) => query.order(name.asc()),
        (ProjectSortField::Name, SortDirection::Desc) => query.order(name.desc()),
        (ProjectSortField::Description, SortDirection::Asc) => query.order(description.asc()),
        (ProjectSortField::Description, SortDirection::Desc) => query.order(description.desc()),
    }
}

#[async_trait]
impl Store for PgStore {
    async fn insert_task(&self, task: NewTask) -> AppResult<Task> {
        use crate::schema::tasks::dsl::tasks;

        let mut conn = self.conn().await?;
        let created = diesel::insert_into(tasks)
            .values(task)
            .returning(Task::as_returning())
            .get_result(&mut conn)
            .await?;
        Ok(created)
    }

    async fn find_task(&self, id: Uuid) -> AppResult<Option<Task>> {
        use crate::schema::tasks::dsl::tasks;

        let mut conn = self.conn().await?;
        let task = tasks
            .find(id)
            .select(Task::as_select())
            .first(&mut conn)
            .await
            .optional()?;
        Ok(task)
    }

    async fn list_tasks(&self) -> AppResult<Vec<Task>> {
        use crate::schema::tasks::dsl::*;

        let mut conn = self.conn().await?;
        let rows = tasks
            .select(Task::as_select())
            .order(id.asc())
            .load(&mut conn)
            .await?;
        Ok(rows)
    }

    async fn update_task(&self, id: Uuid, changes: TaskChangeset) -> AppResult<Option<Task>> {
        use crate::schema::tasks::dsl::tasks;

        let mut conn = self.conn().await?;
        let updated = diesel::update(tasks.find(id))
            .set(changes)
            .returning(Task::as_returning())
            .get_result(&mut conn)
            .await
            .optional()?;
        Ok(updated)
    }

    async fn delete_task(&self, id: Uuid) -> AppResult<bool> {
        use crate::schema::tasks::dsl::tasks;

        let mut conn = self.conn().await?;
        let deleted = diesel::delete(tasks.find(id)).execute(&mut conn).await?;
        Ok(deleted > 0)
    }

    async fn task_exists(&self, id: Uuid) -> AppResult<bool> {
        use crate::schema::tasks::dsl::tasks;
        use diesel::dsl::{exists, select};

        let mut conn = self.conn().await?;
        let found = select(exists(tasks.find(id))).get_result(&mut conn).await?;
        Ok(found)
    }

    async fn search_tasks(
        &self,
        clauses: &[TaskClause],
        page: PageRequest<TaskSortField>,
    ) -> AppResult<Page<Task>> {
        use crate::schema::tasks::dsl::tasks;

        let mut conn = self.conn().await?;

        let total = apply_task_clauses(tasks.into_boxed(), clauses)
            .count()
            .get_result::<i64>(&mut conn)
            .await?;

        let rows = order_tasks(
            apply_task_clauses(tasks.into_boxed(), clauses),
            page.sort_field,
            page.direction,
        )
        .offset(page.offset())
        .limit(page.size)
        .load::<Task>(&mut conn)
        .await?;

        Ok(Page::new(rows, page.page, page.size, total))
    }

    async fn insert_project(&self, project: NewProject) -> AppResult<Project> {
        use crate::schema::projects::dsl::projects;

        let mut conn = self.conn().await?;
        let created = diesel::insert_into(projects)
            .values(project)
            .returning(Project::as_returning())
            .get_result(&mut conn)
            .await?;
        Ok(created)
    }

    async fn find_project(&self, id: Uuid) -> AppResult<Option<Project>> {
        use crate::schema::projects::dsl::projects;

        let mut conn = self.conn().await?;
        let project = projects
            .find(id)
            .select(Project::as_select())
            .first(&mut conn)
            .await
            .optional()?;
        Ok(project)
    }

    async fn list_projects(&self) -> AppResult<Vec<Project>> {
        use crate::schema::projects::dsl::*;

        let mut conn = self.conn().await?;
        let rows = projects
            .select(Project::as_select())
            .order(id.asc())
            .load(&mut conn)
            .await?;
        Ok(rows)
    }

    async fn update_project(
        &self,
        id: Uuid,
        changes: ProjectChangeset,
    ) -> AppResult<Option<Project>> {
        use crate::schema::projects::dsl::projects;

        let mut conn = self.conn().await?;
        let updated = diesel::update(projects.find(id))
            .set(changes)
            .returning(Project::as_returning())
            .get_result(&mut conn)
            .await
            .optional()?;
        Ok(updated)
    }

    async fn delete_project(&self, id: Uuid) -> AppResult<bool> {
        use crate::schema::projects::dsl::projects;

        let mut conn = self.conn().await?;
        let deleted = diesel::delete(projects.find(id)).execute(&mut conn).await?;
        Ok(deleted > 0)
    }

    async fn project_exists(&self, id: Uuid) -> AppResult<bool> {
        use crate::schema::projects::dsl::projects;
        use diesel::dsl::{exists, select};

        let mut conn = self.conn().await?;
        let found = select(exists(projects.find(id)))
            .get_result(&mut conn)
            .await?;
        Ok(found)
    }

    async fn search_projects(
        &self,
        clauses: &[ProjectClause],
        page: PageRequest<ProjectSortField>,
    ) -> AppResult<Page<Project>> {
        use crate::schema::projects::dsl::projects;

        let mut conn = self.conn().await?;

        let total = apply_project_clauses(projects.into_boxed(), clauses)
            .count()
            .get_result::<i64>(&mut conn)
            .await?;

        let rows = order_projects(
            apply_project_clauses(projects.into_boxed(), clauses),
            page.sort_field,
            page.direction,
        )
        .offset(page.offset())
        .limit(page.size)
        .load::<Project>(&mut conn)
        .await?;

        Ok(Page::new(rows, page.page, page.size, total))
    }

    async fn tasks_in_project(&self, project: Uuid) -> AppResult<Vec<Task>> {
        use crate::schema::tasks::dsl::*;

        let mut conn = self.conn().await?;
        let rows = tasks
            .filter(project_id.eq(project))
            .select(Task::as_select())
            .order(id.asc())
            .load(&mut conn)
            .await?;
        Ok(rows)
    }

    async fn tasks_in_projects(&self, project_ids: &[Uuid]) -> AppResult<Vec<Task>> {
        use crate::schema::tasks::dsl::*;

        if project_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.conn().await?;
        let rows = tasks
            .filter(project_id.eq_any(project_ids.to_vec()))
            .select(Task::as_select())
            .order(id.asc())
            .load(&mut conn)
            .await?;
        Ok(rows)
    }

    async fn count_tasks_in_project(&self, project: Uuid) -> AppResult<i64> {
        use crate::schema::tasks::dsl::*;

        let mut conn = self.conn().await?;
        let count = tasks
            .filter(project_id.eq(project))
            .count()
            .get_result::<i64>(&mut conn)
            .await?;
        Ok(count)
    }

    async fn save_assignment(&self, task: &Task, project: &Project) -> AppResult<()> {
        let mut conn = self.conn().await?;

        let task = task.clone();
        let project = project.clone();

        run_in_transaction(&mut conn, |conn| {
            Box::pin(async move {
                {
                    use crate::schema::tasks::dsl::*;
                    diesel::update(tasks.find(task.id))
                        .set((
                            name.eq(task.name),
                            description.eq(task.description),
                            priority.eq(task.priority),
                            status.eq(task.status),
                            due_date.eq(task.due_date),
                            project_id.eq(task.project_id),
                        ))
                        .execute(&mut *conn)
                        .await?;
                }
                {
                    use crate::schema::projects::dsl::*;
                    diesel::update(projects.find(project.id))
                        .set((name.eq(project.name), description.eq(project.description)))
                        .execute(&mut *conn)
                        .await?;
                }
                Ok(())
            })
        })
        .await
    }
}
