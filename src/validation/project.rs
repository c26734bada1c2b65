use crate::dtos::ProjectRequestDto;

use super::{ValidationResult, check_description, check_name};

/// Validates a project payload before creation or update.
pub fn validate_project(dto: &ProjectRequestDto) -> ValidationResult {
    let mut errors = Vec::new();

    check_name(&dto.name, &mut errors);
    check_description(dto.description.as_deref(), &mut errors);

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
