use chrono::NaiveDate;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Task urgency. The database enum declares the variants in ascending order,
/// so sorting by this column ranks `Low` before `Critical`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    diesel_derive_enum::DbEnum,
)]
#[db_enum(existing_type_path = "crate::schema::sql_types::PriorityKind")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    diesel_derive_enum::DbEnum,
)]
#[db_enum(existing_type_path = "crate::schema::sql_types::StatusKind")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Todo,
    InProgress,
    Blocked,
    Done,
}

/// A task row. `project_id` is the owning side of the task<->project
/// relationship; a project's task list is derived from it.
#[derive(Identifiable, Queryable, Selectable, Serialize, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Task {
    pub id: uuid::Uuid,
    pub name: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub status: Status,
    pub due_date: Option<NaiveDate>,
    pub project_id: Option<uuid::Uuid>,
}

/// Insertable task. The id is assigned by the store; tasks are always
/// created unassigned and linked to a project afterwards.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::tasks)]
pub struct NewTask {
    pub name: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub status: Status,
    pub due_date: Option<NaiveDate>,
}

/// Full-replacement update for a task. `treat_none_as_null` because an
/// update overwrites every mutable field, including clearing the optional
/// ones; the project link is not touched by field updates.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = crate::schema::tasks)]
#[diesel(treat_none_as_null = true)]
pub struct TaskChangeset {
    pub name: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub status: Status,
    pub due_date: Option<NaiveDate>,
}

#[derive(Identifiable, Queryable, Selectable, Serialize, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::projects)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Project {
    pub id: uuid::Uuid,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::projects)]
pub struct NewProject {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = crate::schema::projects)]
#[diesel(treat_none_as_null = true)]
pub struct ProjectChangeset {
    pub name: String,
    pub description: Option<String>,
}
