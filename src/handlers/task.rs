use actix_web::{HttpResponse, web};
use uuid::Uuid;

use crate::{dtos, error::ApiError, service, store::Store, validation};

use super::AppState;
use super::response::validation_error_response;

/// Create a task.
pub async fn create_task<S: Store + Clone>(
    state: web::Data<AppState<S>>,
    form: web::Json<dtos::TaskRequestDto>,
) -> actix_web::Result<HttpResponse> {
    if let Err(errors) = validation::validate_task(&form) {
        return Ok(validation_error_response(&errors));
    }

    let created = service::task::create_task(&state.store, form.into_inner())
        .await
        .map_err(ApiError::from)?;
    Ok(HttpResponse::Created().json(created))
}

/// Get a task by ID.
pub async fn get_task<S: Store + Clone>(
    state: web::Data<AppState<S>>,
    id: web::Path<Uuid>,
) -> actix_web::Result<HttpResponse> {
    let task = service::task::get_task_by_id(&state.store, *id)
        .await
        .map_err(ApiError::from)?;
    Ok(HttpResponse::Ok().json(task))
}

/// List every task, unfiltered and unpaged.
pub async fn get_all_tasks<S: Store + Clone>(
    state: web::Data<AppState<S>>,
) -> actix_web::Result<HttpResponse> {
    let tasks = service::task::get_all_tasks(&state.store)
        .await
        .map_err(ApiError::from)?;
    Ok(HttpResponse::Ok().json(tasks))
}

/// Replace all mutable fields of a task.
pub async fn update_task<S: Store + Clone>(
    state: web::Data<AppState<S>>,
    id: web::Path<Uuid>,
    form: web::Json<dtos::TaskRequestDto>,
) -> actix_web::Result<HttpResponse> {
    if let Err(errors) = validation::validate_task(&form) {
        return Ok(validation_error_response(&errors));
    }

    let updated = service::task::update_task(&state.store, *id, form.into_inner())
        .await
        .map_err(ApiError::from)?;
    Ok(HttpResponse::Ok().json(updated))
}

/// Delete a task.
pub async fn delete_task<S: Store + Clone>(
    state: web::Data<AppState<S>>,
    id: web::Path<Uuid>,
) -> actix_web::Result<HttpResponse> {
    service::task::delete_task(&state.store, *id)
        .await
        .map_err(ApiError::from)?;
    Ok(HttpResponse::NoContent().finish())
}

/// Search tasks with filtering, pagination and sorting.
pub async fn search_tasks<S: Store + Clone>(
    state: web::Data<AppState<S>>,
    filter: web::Query<dtos::TaskFilterDto>,
    page: web::Query<dtos::PageQueryDto>,
) -> actix_web::Result<HttpResponse> {
    let criteria = filter.into_inner().resolve();
    let page = page
        .into_inner()
        .resolve::<dtos::TaskSortField>(&state.config);

    let result = service::task::search_tasks(&state.store, criteria, page)
        .await
        .map_err(ApiError::from)?;
    Ok(HttpResponse::Ok().json(result))
}
