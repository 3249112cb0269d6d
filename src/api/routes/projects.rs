//! This module defines the HTTP routes for project registration.
use crate::{
    api::controllers::projects,
    models::{AppState, ProjectCreateRequest},
};
use actix_web::{get, post, web, Responder};

/// Registers a project from its IDL and reward settings.
#[post("/projects")]
async fn create_project(
    request: web::Json<ProjectCreateRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    projects::create_project(request.into_inner(), &data).await
}

/// Lists registered projects.
#[get("/projects")]
async fn list_projects(data: web::Data<AppState>) -> impl Responder {
    projects::list_projects(&data).await
}

/// Retrieves a project by program id.
#[get("/projects/{program_id}")]
async fn get_project(program_id: web::Path<String>, data: web::Data<AppState>) -> impl Responder {
    projects::get_project(program_id.into_inner(), &data).await
}

/// Previews how the accounts of a method are bound.
#[get("/projects/{program_id}/methods/{method}")]
async fn get_method_config(
    path: web::Path<(String, String)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (program_id, method) = path.into_inner();
    projects::get_method_config(program_id, method, &data).await
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(create_project);
    cfg.service(list_projects);
    cfg.service(get_method_config);
    cfg.service(get_project);
}
