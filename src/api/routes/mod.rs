//! # API Routes Module
//!
//! Configures HTTP routes for the referral network API.
//!
//! ## Routes
//!
//! * `/health` - Health check endpoint
//! * `/api/actions/network/{ref_code}` - Solana Actions endpoints of a blink
//! * `/api/v1/projects` - Project registration
//! * `/api/v1/blinks` - Blink creation and lookup

pub mod actions;
pub mod blinks;
pub mod health;
pub mod projects;

use actix_web::web;

use crate::models::ApiError;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::init)
        .configure(actions::init)
        .service(
            web::scope("/api/v1")
                .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                    ApiError::BadRequest(err.to_string()).into()
                }))
                .configure(projects::init)
                .configure(blinks::init),
        );
}
