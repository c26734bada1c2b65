use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{NewProject, Project, ProjectChangeset, Task};

use super::TaskResponseDto;

/// Input DTO for creating or replacing a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRequestDto {
    pub name: String,
    pub description: Option<String>,
}

/// Project as exposed on the wire, with its task list flattened to task
/// responses (each carrying only the bare project id back).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponseDto {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub tasks: Vec<TaskResponseDto>,
}

impl ProjectResponseDto {
    /// Project the entity together with its already-loaded task list.
    pub fn new(project: Project, tasks: Vec<Task>) -> Self {
        Self {
            id: project.id,
            name: project.name,
            description: project.description,
            tasks: tasks.into_iter().map(TaskResponseDto::from).collect(),
        }
    }
}

impl From<ProjectRequestDto> for NewProject {
    fn from(dto: ProjectRequestDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
        }
    }
}

impl From<ProjectRequestDto> for ProjectChangeset {
    fn from(dto: ProjectRequestDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
        }
    }
}
