//! Input validation for task and project payloads.
//!
//! Validation runs in the handlers before any persistence attempt and
//! reports every failed field at once.

mod project;
mod task;

pub use project::validate_project;
pub use task::validate_task;

/// Validation error with details about what failed.
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of validation - either Ok or a list of errors.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

pub(crate) const NAME_MIN_CHARS: usize = 3;
pub(crate) const NAME_MAX_CHARS: usize = 100;
pub(crate) const DESCRIPTION_MAX_CHARS: usize = 500;

pub(crate) fn check_name(name: &str, errors: &mut Vec<ValidationError>) {
    let length = name.chars().count();
    if length < NAME_MIN_CHARS || length > NAME_MAX_CHARS {
        errors.push(ValidationError {
            field: "name".to_string(),
            message: "Name must be between 3 and 100 characters".to_string(),
        });
    }
}

pub(crate) fn check_description(description: Option<&str>, errors: &mut Vec<ValidationError>) {
    if let Some(description) = description {
        if description.chars().count() > DESCRIPTION_MAX_CHARS {
            errors.push(ValidationError {
                field: "description".to_string(),
                message: "Description cannot exceed 500 characters".to_string(),
            });
        }
    }
}
