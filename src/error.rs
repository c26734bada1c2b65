//! Error types for the task manager service.
//!
//! `TaskManagerError` is the domain error used by services and stores;
//! `ApiError` is its HTTP-facing shape. Handlers convert with `From` so the
//! boundary decides status codes in exactly one place.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;
use uuid::Uuid;

/// Main error type for task manager operations.
#[derive(Error, Debug)]
pub enum TaskManagerError {
    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] diesel::result::Error),

    /// Connection pool errors
    #[error("Connection pool error: {0}")]
    Pool(String),

    #[error("Task not found with ID: {0}")]
    TaskNotFound(Uuid),

    #[error("Project not found with ID: {0}")]
    ProjectNotFound(Uuid),

    /// Unassign precondition failure: both entities exist, but the task is
    /// not linked to the named project.
    #[error("Task {task_id} is not assigned to project {project_id}")]
    InvalidAssignment { task_id: Uuid, project_id: Uuid },

    /// Deleting a project that still has tasks assigned.
    #[error("Project {0} still has tasks assigned")]
    ProjectNotEmpty(Uuid),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error (unexpected)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error type for API operations (converts to HTTP responses).
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(serde_json::json!({
            "error": self.to_string(),
            "status": status.as_u16()
        }))
    }
}

impl From<TaskManagerError> for ApiError {
    fn from(err: TaskManagerError) -> Self {
        match err {
            TaskManagerError::TaskNotFound(id) => {
                ApiError::NotFound(format!("Task not found with ID: {}", id))
            }
            TaskManagerError::ProjectNotFound(id) => {
                ApiError::NotFound(format!("Project not found with ID: {}", id))
            }
            TaskManagerError::InvalidAssignment {
                task_id,
                project_id,
            } => ApiError::BadRequest(format!(
                "Task {} is not assigned to project {}",
                task_id, project_id
            )),
            TaskManagerError::ProjectNotEmpty(id) => ApiError::Conflict(format!(
                "Project {} still has tasks assigned; unassign or delete them first",
                id
            )),
            TaskManagerError::Validation(e) => ApiError::BadRequest(e),
            TaskManagerError::Database(e) => {
                log::error!("Database error: {}", e);
                ApiError::InternalServerError("Database error".to_string())
            }
            TaskManagerError::Pool(e) => {
                log::error!("Pool error: {}", e);
                ApiError::InternalServerError("Connection pool error".to_string())
            }
            _ => {
                log::error!("Internal error: {}", err);
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

/// Result type alias for domain operations.
pub type AppResult<T> = Result<T, TaskManagerError>;

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
