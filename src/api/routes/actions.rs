//! Solana Actions routes served for each blink.
//!
//! Every response, errors included, carries the Actions CORS headers so Blink
//! clients can call the endpoints cross-origin.
use actix_web::{
    http::Method, middleware::DefaultHeaders, web, HttpRequest, HttpResponse, Responder,
};

use crate::{
    api::controllers::actions,
    constants::{ACTIONS_CORS_HEADERS, ACTIONS_PATH_PREFIX},
    models::{ActionPostRequest, AppState, TransactionBuildError},
};

fn cors_headers() -> DefaultHeaders {
    ACTIONS_CORS_HEADERS
        .iter()
        .fold(DefaultHeaders::new(), |headers, header| headers.add(*header))
}

/// Returns the blink metadata rendered by Blink clients.
async fn get_action(
    ref_code: web::Path<String>,
    req: HttpRequest,
    data: web::Data<AppState>,
) -> impl Responder {
    let origin = {
        let info = req.connection_info();
        format!("{}://{}", info.scheme(), info.host())
    };
    actions::get_action(ref_code.into_inner(), origin, &data).await
}

/// Builds the unsigned transaction for the requesting wallet.
async fn create_action_transaction(
    ref_code: web::Path<String>,
    request: web::Json<ActionPostRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    actions::create_action_transaction(ref_code.into_inner(), request.into_inner(), &data).await
}

/// CORS preflight.
async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(ACTIONS_PATH_PREFIX)
            .wrap(cors_headers())
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                TransactionBuildError::MalformedInput(err.to_string()).into()
            }))
            .service(
                web::resource("/{ref_code}")
                    .route(web::get().to(get_action))
                    .route(web::post().to(create_action_transaction))
                    .route(web::method(Method::OPTIONS).to(preflight)),
            ),
    );
}
