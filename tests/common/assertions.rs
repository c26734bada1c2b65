use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use task_manager::dtos::{Page, ProjectResponseDto, TaskResponseDto};
use uuid::Uuid;

/// POST /api/tasks with the given payload, assert 201, return the created task.
pub async fn create_task_ok<S, B>(app: &S, payload: &serde_json::Value) -> TaskResponseDto
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = actix_web::test::TestRequest::post()
        .uri("/api/tasks")
        .set_json(payload)
        .to_request();
    let resp = actix_web::test::call_service(app, req).await;
    assert_eq!(
        resp.status(),
        StatusCode::CREATED,
        "POST /api/tasks should return 201 Created"
    );
    actix_web::test::read_body_json(resp).await
}

/// POST /api/projects with the given payload, assert 201, return the project.
pub async fn create_project_ok<S, B>(app: &S, payload: &serde_json::Value) -> ProjectResponseDto
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = actix_web::test::TestRequest::post()
        .uri("/api/projects")
        .set_json(payload)
        .to_request();
    let resp = actix_web::test::call_service(app, req).await;
    assert_eq!(
        resp.status(),
        StatusCode::CREATED,
        "POST /api/projects should return 201 Created"
    );
    actix_web::test::read_body_json(resp).await
}

/// GET /api/tasks/{id}, assert 200, return the task.
pub async fn get_task_ok<S, B>(app: &S, task_id: Uuid) -> TaskResponseDto
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = actix_web::test::TestRequest::get()
        .uri(&format!("/api/tasks/{}", task_id))
        .to_request();
    let resp = actix_web::test::call_service(app, req).await;
    assert!(
        resp.status().is_success(),
        "GET /api/tasks/{} returned {}",
        task_id,
        resp.status()
    );
    actix_web::test::read_body_json(resp).await
}

/// GET /api/projects/{id}, assert 200, return the project with its tasks.
pub async fn get_project_ok<S, B>(app: &S, project_id: Uuid) -> ProjectResponseDto
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = actix_web::test::TestRequest::get()
        .uri(&format!("/api/projects/{}", project_id))
        .to_request();
    let resp = actix_web::test::call_service(app, req).await;
    assert!(
        resp.status().is_success(),
        "GET /api/projects/{} returned {}",
        project_id,
        resp.status()
    );
    actix_web::test::read_body_json(resp).await
}

/// POST /api/projects/{pid}/tasks/{tid}, assert 200, return the project.
pub async fn assign_ok<S, B>(app: &S, project_id: Uuid, task_id: Uuid) -> ProjectResponseDto
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = actix_web::test::TestRequest::post()
        .uri(&format!("/api/projects/{}/tasks/{}", project_id, task_id))
        .to_request();
    let resp = actix_web::test::call_service(app, req).await;
    assert_eq!(
        resp.status(),
        StatusCode::OK,
        "assign should return 200 OK"
    );
    actix_web::test::read_body_json(resp).await
}

/// DELETE /api/projects/{pid}/tasks/{tid}, assert 200, return the project.
pub async fn unassign_ok<S, B>(app: &S, project_id: Uuid, task_id: Uuid) -> ProjectResponseDto
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = actix_web::test::TestRequest::delete()
        .uri(&format!("/api/projects/{}/tasks/{}", project_id, task_id))
        .to_request();
    let resp = actix_web::test::call_service(app, req).await;
    assert_eq!(
        resp.status(),
        StatusCode::OK,
        "unassign should return 200 OK"
    );
    actix_web::test::read_body_json(resp).await
}

/// GET /api/tasks/search with the given query string, assert 200.
pub async fn search_tasks_ok<S, B>(app: &S, query: &str) -> Page<TaskResponseDto>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = actix_web::test::TestRequest::get()
        .uri(&format!("/api/tasks/search{}", query))
        .to_request();
    let resp = actix_web::test::call_service(app, req).await;
    assert_eq!(
        resp.status(),
        StatusCode::OK,
        "GET /api/tasks/search{} returned {}",
        query,
        resp.status()
    );
    actix_web::test::read_body_json(resp).await
}

/// GET /api/projects/search with the given query string, assert 200.
pub async fn search_projects_ok<S, B>(app: &S, query: &str) -> Page<ProjectResponseDto>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = actix_web::test::TestRequest::get()
        .uri(&format!("/api/projects/search{}", query))
        .to_request();
    let resp = actix_web::test::call_service(app, req).await;
    assert_eq!(
        resp.status(),
        StatusCode::OK,
        "GET /api/projects/search{} returned {}",
        query,
        resp.status()
    );
    actix_web::test::read_body_json(resp).await
}

/// Issue an arbitrary request and return only the status code.
pub async fn status_of<S, B>(app: &S, req: Request) -> StatusCode
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    actix_web::test::call_service(app, req).await.status()
}
