use actix_web::{HttpResponse, web};
use uuid::Uuid;

use crate::{dtos, error::ApiError, service, store::Store, validation};

use super::AppState;
use super::response::validation_error_response;

/// Create a project.
pub async fn create_project<S: Store + Clone>(
    state: web::Data<AppState<S>>,
    form: web::Json<dtos::ProjectRequestDto>,
) -> actix_web::Result<HttpResponse> {
    if let Err(errors) = validation::validate_project(&form) {
        return Ok(validation_error_response(&errors));
    }

    let created = service::project::create_project(&state.store, form.into_inner())
        .await
        .map_err(ApiError::from)?;
    Ok(HttpResponse::Created().json(created))
}

/// Get a project by ID, with its task list.
pub async fn get_project<S: Store + Clone>(
    state: web::Data<AppState<S>>,
    id: web::Path<Uuid>,
) -> actix_web::Result<HttpResponse> {
    let project = service::project::get_project_by_id(&state.store, *id)
        .await
        .map_err(ApiError::from)?;
    Ok(HttpResponse::Ok().json(project))
}

/// List every project, unfiltered and unpaged.
pub async fn get_all_projects<S: Store + Clone>(
    state: web::Data<AppState<S>>,
) -> actix_web::Result<HttpResponse> {
    let projects = service::project::get_all_projects(&state.store)
        .await
        .map_err(ApiError::from)?;
    Ok(HttpResponse::Ok().json(projects))
}

/// Replace a project's mutable fields.
pub async fn update_project<S: Store + Clone>(
    state: web::Data<AppState<S>>,
    id: web::Path<Uuid>,
    form: web::Json<dtos::ProjectRequestDto>,
) -> actix_web::Result<HttpResponse> {
    if let Err(errors) = validation::validate_project(&form) {
        return Ok(validation_error_response(&errors));
    }

    let updated = service::project::update_project(&state.store, *id, form.into_inner())
        .await
        .map_err(ApiError::from)?;
    Ok(HttpResponse::Ok().json(updated))
}

/// Delete a project. Rejected with 409 while tasks are still assigned.
pub async fn delete_project<S: Store + Clone>(
    state: web::Data<AppState<S>>,
    id: web::Path<Uuid>,
) -> actix_web::Result<HttpResponse> {
    service::project::delete_project(&state.store, *id)
        .await
        .map_err(ApiError::from)?;
    Ok(HttpResponse::NoContent().finish())
}

/// Search projects with filtering, pagination and sorting.
pub async fn search_projects<S: Store + Clone>(
    state: web::Data<AppState<S>>,
    filter: web::Query<dtos::ProjectFilterDto>,
    page: web::Query<dtos::PageQueryDto>,
) -> actix_web::Result<HttpResponse> {
    let criteria = filter.into_inner().resolve();
    let page = page
        .into_inner()
        .resolve::<dtos::ProjectSortField>(&state.config);

    let result = service::project::search_projects(&state.store, criteria, page)
        .await
        .map_err(ApiError::from)?;
    Ok(HttpResponse::Ok().json(result))
}

/// Assign a task to a project and return the updated project.
pub async fn assign_task<S: Store + Clone>(
    state: web::Data<AppState<S>>,
    path: web::Path<(Uuid, Uuid)>,
) -> actix_web::Result<HttpResponse> {
    let (project_id, task_id) = path.into_inner();
    let project = service::project::assign_task(&state.store, project_id, task_id)
        .await
        .map_err(ApiError::from)?;
    Ok(HttpResponse::Ok().json(project))
}

/// Unassign a task from a project and return the updated project.
pub async fn unassign_task<S: Store + Clone>(
    state: web::Data<AppState<S>>,
    path: web::Path<(Uuid, Uuid)>,
) -> actix_web::Result<HttpResponse> {
    let (project_id, task_id) = path.into_inner();
    let project = service::project::unassign_task(&state.store, project_id, task_id)
        .await
        .map_err(ApiError::from)?;
    Ok(HttpResponse::Ok().json(project))
}
