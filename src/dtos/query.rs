use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::Config;
use crate::filter::{ProjectCriteria, TaskCriteria};
use crate::models::{Priority, Status};

/// Sort direction for search endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Sortable task columns. The sort key space is closed because the store
/// needs statically-known order columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskSortField {
    #[default]
    Id,
    Name,
    Priority,
    Status,
    DueDate,
}

/// Sortable project columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectSortField {
    #[default]
    Id,
    Name,
    Description,
}

/// Wire-level sort keys for a sortable column set. Unknown keys fall back to
/// the default (id ascending).
pub trait SortKey: Default + Copy {
    fn parse(key: &str) -> Option<Self>;
}

impl SortKey for TaskSortField {
    fn parse(key: &str) -> Option<Self> {
        match key {
            "id" => Some(Self::Id),
            "name" => Some(Self::Name),
            "priority" => Some(Self::Priority),
            "status" => Some(Self::Status),
            "dueDate" | "due_date" => Some(Self::DueDate),
            _ => None,
        }
    }
}

impl SortKey for ProjectSortField {
    fn parse(key: &str) -> Option<Self> {
        match key {
            "id" => Some(Self::Id),
            "name" => Some(Self::Name),
            "description" => Some(Self::Description),
            _ => None,
        }
    }
}

/// Resolved paging and ordering, ready for the store.
#[derive(Debug, Clone, Copy)]
pub struct PageRequest<F> {
    pub page: i64,
    pub size: i64,
    pub sort_field: F,
    pub direction: SortDirection,
}

impl<F> PageRequest<F> {
    pub fn offset(&self) -> i64 {
        self.page.saturating_mul(self.size)
    }
}

/// Raw paging query params for search endpoints.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct PageQueryDto {
    /// Page number (0-indexed). Defaults to 0.
    pub page: Option<i64>,
    /// Items per page. Defaults to the configured value; values above the
    /// configured maximum are clamped.
    pub size: Option<i64>,
    /// `field` or `field,direction`, e.g. `name,desc`. Defaults to `id,asc`.
    pub sort: Option<String>,
}

impl PageQueryDto {
    /// Resolve raw query params into validated paging, enforcing config limits.
    pub fn resolve<F: SortKey>(self, config: &Config) -> PageRequest<F> {
        let mut size = self.size.unwrap_or(config.pagination.default_per_page);
        if size > config.pagination.max_per_page {
            size = config.pagination.max_per_page;
        }
        if size <= 0 {
            size = config.pagination.default_per_page;
        }

        let mut page = self.page.unwrap_or(0).max(0);

        // Prevent overflow when computing offset = page * size
        if page > 0 {
            let max_page = i64::MAX / size;
            if page > max_page {
                page = max_page;
            }
        }

        let (sort_field, direction) = parse_sort::<F>(self.sort.as_deref());

        PageRequest {
            page,
            size,
            sort_field,
            direction,
        }
    }
}

fn parse_sort<F: SortKey>(raw: Option<&str>) -> (F, SortDirection) {
    let Some(raw) = raw else {
        return (F::default(), SortDirection::Asc);
    };
    let mut parts = raw.splitn(2, ',');
    let field = parts
        .next()
        .map(str::trim)
        .and_then(F::parse)
        .unwrap_or_default();
    let direction = match parts.next().map(str::trim) {
        Some(d) if d.eq_ignore_ascii_case("desc") => SortDirection::Desc,
        _ => SortDirection::Asc,
    };
    (field, direction)
}

/// Task search filters. All optional and combined with AND logic; `search`
/// matches name OR description.
#[derive(Debug, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TaskFilterDto {
    /// Filter by task status. Example: "TODO", "IN_PROGRESS".
    pub status: Option<Status>,
    /// Filter by task priority. Example: "HIGH", "CRITICAL".
    pub priority: Option<Priority>,
    /// Filter by owning project id (exact match).
    pub project_id: Option<Uuid>,
    /// Inclusive lower bound on the due date (ISO date).
    pub due_date_from: Option<NaiveDate>,
    /// Inclusive upper bound on the due date (ISO date).
    pub due_date_to: Option<NaiveDate>,
    /// Convenience search matching name or description (substring).
    pub search: Option<String>,
    /// Filter by task name (substring).
    pub name: Option<String>,
    /// Filter by task id (exact match).
    pub id: Option<Uuid>,
}

impl TaskFilterDto {
    pub fn resolve(self) -> TaskCriteria {
        TaskCriteria {
            status: self.status,
            priority: self.priority,
            project_id: self.project_id,
            due_date_from: self.due_date_from,
            due_date_to: self.due_date_to,
            search: self.search,
            name: self.name,
            id: self.id,
        }
    }
}

/// Project search filters.
#[derive(Debug, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFilterDto {
    /// Filter by project id (exact match).
    pub id: Option<Uuid>,
    /// Filter by project name (substring).
    pub name: Option<String>,
    /// Filter by project description (substring).
    pub description: Option<String>,
}

impl ProjectFilterDto {
    pub fn resolve(self) -> ProjectCriteria {
        ProjectCriteria {
            id: self.id,
            name: self.name,
            description: self.description,
        }
    }
}
