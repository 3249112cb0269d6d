//! This module defines the HTTP routes for blink creation and lookup.
use crate::{
    api::controllers::blinks,
    models::{AppState, BlinkCreateRequest},
};
use actix_web::{get, post, web, Responder};

/// Creates a blink for a method of a registered project.
#[post("/blinks")]
async fn create_blink(
    request: web::Json<BlinkCreateRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    blinks::create_blink(request.into_inner(), &data).await
}

/// Lists blinks joined with their project's IDL and reward settings.
#[get("/blinks")]
async fn list_blinks(data: web::Data<AppState>) -> impl Responder {
    blinks::list_blinks(&data).await
}

/// Retrieves a blink by referral code.
#[get("/blinks/{ref_code}")]
async fn get_blink(ref_code: web::Path<String>, data: web::Data<AppState>) -> impl Responder {
    blinks::get_blink(ref_code.into_inner(), &data).await
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(create_blink);
    cfg.service(list_blinks);
    cfg.service(get_blink);
}
