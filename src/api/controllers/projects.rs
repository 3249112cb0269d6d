//! Project registration handlers.
use actix_web::HttpResponse;
use log::info;

use crate::{
    domain::fetch_method_config,
    models::{
        ApiError, ApiResponse, AppState, ProjectCreateRequest, ProjectRepoModel, ProjectSummary,
        TransactionBuildError,
    },
};

/// Registers a project; the program id is taken from the IDL.
pub async fn create_project(
    request: ProjectCreateRequest,
    state: &AppState,
) -> Result<HttpResponse, ApiError> {
    let project = ProjectRepoModel::try_from(request)?;
    let project = state.project_repository.create(project).await?;

    info!(
        "Registered project '{}' for program {}",
        project.project_name, project.program_id
    );

    Ok(HttpResponse::Created().json(ApiResponse::success(project)))
}

pub async fn list_projects(state: &AppState) -> Result<HttpResponse, ApiError> {
    let projects: Vec<ProjectSummary> = state
        .project_repository
        .list_all()
        .await?
        .into_iter()
        .map(ProjectSummary::from)
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(projects)))
}

pub async fn get_project(program_id: String, state: &AppState) -> Result<HttpResponse, ApiError> {
    let project = state.project_repository.get_by_id(program_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(project)))
}

/// Shows how each account of `method` would be bound when a blink is redeemed.
pub async fn get_method_config(
    program_id: String,
    method: String,
    state: &AppState,
) -> Result<HttpResponse, ApiError> {
    let project = state.project_repository.get_by_id(program_id).await?;

    let config = fetch_method_config(&project.idl, &method, state.transaction_builder.policy())
        .map_err(|e| match e {
            TransactionBuildError::NotFound(msg) => ApiError::NotFound(msg),
            other => ApiError::BadRequest(other.to_string()),
        })?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(config)))
}
