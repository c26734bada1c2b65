//! HTTP handlers for the task manager API.
//!
//! Handlers are generic over the store so the same route table serves the
//! Postgres store in production and the in-memory store in tests.

mod project;
pub mod response;
mod task;

use std::sync::Arc;

use actix_web::web;

use crate::config::Config;
use crate::store::Store;

pub use project::{
    assign_task, create_project, delete_project, get_all_projects, get_project, search_projects,
    unassign_task, update_project,
};
pub use task::{
    create_task, delete_task, get_all_tasks, get_task, search_tasks, update_task,
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState<S: Store> {
    pub store: S,
    pub config: Arc<Config>,
}

impl<S: Store> AppState<S> {
    pub fn new(store: S, config: Config) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}

/// Register all routes. `/search` is registered ahead of `/{id}` so the
/// literal segment wins.
pub fn configure<S: Store + Clone>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/tasks")
            .route("", web::post().to(task::create_task::<S>))
            .route("", web::get().to(task::get_all_tasks::<S>))
            .route("/search", web::get().to(task::search_tasks::<S>))
            .route("/{id}", web::get().to(task::get_task::<S>))
            .route("/{id}", web::put().to(task::update_task::<S>))
            .route("/{id}", web::delete().to(task::delete_task::<S>)),
    )
    .service(
        web::scope("/api/projects")
            .route("", web::post().to(project::create_project::<S>))
            .route("", web::get().to(project::get_all_projects::<S>))
            .route("/search", web::get().to(project::search_projects::<S>))
            .route("/{id}", web::get().to(project::get_project::<S>))
            .route("/{id}", web::put().to(project::update_project::<S>))
            .route("/{id}", web::delete().to(project::delete_project::<S>))
            .route(
                "/{project_id}/tasks/{task_id}",
                web::post().to(project::assign_task::<S>),
            )
            .route(
                "/{project_id}/tasks/{task_id}",
                web::delete().to(project::unassign_task::<S>),
            ),
    );
}
