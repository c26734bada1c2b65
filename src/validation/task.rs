use chrono::Utc;

use crate::dtos::TaskRequestDto;

use super::{ValidationError, ValidationResult, check_description, check_name};

/// Validates a task payload before creation or update.
pub fn validate_task(dto: &TaskRequestDto) -> ValidationResult {
    let mut errors = Vec::new();

    check_name(&dto.name, &mut errors);
    check_description(dto.description.as_deref(), &mut errors);

    // The due date is checked against "today" at validation time only; it is
    // not re-validated after persistence.
    if let Some(due_date) = dto.due_date {
        if due_date < Utc::now().date_naive() {
            errors.push(ValidationError {
                field: "dueDate".to_string(),
                message: "Due date must be in the future or present".to_string(),
            });
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
