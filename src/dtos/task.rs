use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{NewTask, Priority, Status, Task, TaskChangeset};

/// Input DTO for creating or replacing a task. Update replaces every mutable
/// field with this payload, including clearing the optional ones; the
/// project link is managed exclusively through the assignment endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRequestDto {
    pub name: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub status: Status,
    /// Must be today or later at validation time, when present.
    pub due_date: Option<NaiveDate>,
}

/// Task as exposed on the wire. Carries the bare project id rather than an
/// embedded project so the projection never recurses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponseDto {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub status: Status,
    pub due_date: Option<NaiveDate>,
    pub project_id: Option<Uuid>,
}

impl From<Task> for TaskResponseDto {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            name: task.name,
            description: task.description,
            priority: task.priority,
            status: task.status,
            due_date: task.due_date,
            project_id: task.project_id,
        }
    }
}

impl From<TaskRequestDto> for NewTask {
    fn from(dto: TaskRequestDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            priority: dto.priority,
            status: dto.status,
            due_date: dto.due_date,
        }
    }
}

impl From<TaskRequestDto> for TaskChangeset {
    fn from(dto: TaskRequestDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            priority: dto.priority,
            status: dto.status,
            due_date: dto.due_date,
        }
    }
}
