//! Blink creation and lookup handlers.
use actix_web::HttpResponse;
use futures::future::try_join_all;
use log::info;

use crate::{
    models::{
        ApiError, ApiResponse, AppState, BlinkCreateRequest, BlinkRepoModel, BlinkResponse,
    },
};

async fn join_project(blink: BlinkRepoModel, state: &AppState) -> Result<BlinkResponse, ApiError> {
    let project = state
        .project_repository
        .get_by_id(blink.program_id.clone())
        .await?;
    Ok(BlinkResponse::new(blink, &project))
}

/// Creates a blink for one of the methods a registered project offers.
pub async fn create_blink(
    request: BlinkCreateRequest,
    state: &AppState,
) -> Result<HttpResponse, ApiError> {
    let blink = BlinkRepoModel::try_from(request)?;
    let project = state
        .project_repository
        .get_by_id(blink.program_id.clone())
        .await?;
    blink.validate_against(&project)?;

    let blink = state.blink_repository.create(blink).await?;
    info!(
        "Created blink {} for '{}' of program {}",
        blink.ref_code, blink.method_signature, blink.program_id
    );

    Ok(HttpResponse::Created().json(ApiResponse::success(BlinkResponse::new(blink, &project))))
}

pub async fn list_blinks(state: &AppState) -> Result<HttpResponse, ApiError> {
    let blinks = state.blink_repository.list_all().await?;
    let responses = try_join_all(blinks.into_iter().map(|blink| join_project(blink, state))).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(responses)))
}

pub async fn get_blink(ref_code: String, state: &AppState) -> Result<HttpResponse, ApiError> {
    let blink = state.blink_repository.get_by_id(ref_code).await?;
    let response = join_project(blink, state).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}
