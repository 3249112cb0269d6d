use crate::integration::common::{sample_app_state, StubProvider};
use actix_web::{http::StatusCode, test, App};
use referral_network::{api::routes::configure_routes, models::ResolutionPolicy};
use solana_sdk::hash::Hash;
use std::sync::Arc;

#[actix_web::test]
async fn test_health_endpoint() {
    let provider = Arc::new(StubProvider::new(Hash::new_unique()));
    let app = test::init_service(
        App::new()
            .app_data(sample_app_state(provider, ResolutionPolicy::Strict).await)
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, "OK");
}
