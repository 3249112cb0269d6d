use crate::integration::common::{
    sample_app_state, StubProvider, SAMPLE_PROGRAM_ID, SAMPLE_REF_CODE,
};
use actix_web::{http::StatusCode, test, App};
use referral_network::{
    api::routes::configure_routes, domain::decode_transaction, models::ResolutionPolicy,
};
use serde_json::json;
use sha2::{Digest, Sha256};
use solana_sdk::{hash::Hash, pubkey::Pubkey};
use solana_system_interface::program as system_program;
use std::{str::FromStr, sync::Arc};

fn action_uri(ref_code: &str) -> String {
    format!("/api/actions/network/{ref_code}")
}

#[actix_web::test]
async fn test_action_metadata_for_sample_blink() {
    let provider = Arc::new(StubProvider::new(Hash::new_unique()));
    let app = test::init_service(
        App::new()
            .app_data(sample_app_state(provider.clone(), ResolutionPolicy::Strict).await)
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get()
        .uri(&action_uri(SAMPLE_REF_CODE))
        .insert_header(("host", "blinks.example"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .unwrap()
            .to_str()
            .unwrap(),
        "*"
    );
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["title"], "Join Sonic World");
    assert_eq!(body["icon"], "http://blinks.example/icon.png");
    assert!(body["description"]
        .as_str()
        .unwrap()
        .contains("Referred by sonic-welcome"));
    assert_eq!(
        body["links"]["actions"][0]["href"],
        action_uri(SAMPLE_REF_CODE)
    );
    assert_eq!(provider.calls(), 0);
}

#[actix_web::test]
async fn test_post_builds_join_transaction_for_caller() {
    let blockhash = Hash::new_unique();
    let provider = Arc::new(StubProvider::new(blockhash));
    let app = test::init_service(
        App::new()
            .app_data(sample_app_state(provider.clone(), ResolutionPolicy::Strict).await)
            .configure(configure_routes),
    )
    .await;
    let caller = Pubkey::new_unique();
    let program_id = Pubkey::from_str(SAMPLE_PROGRAM_ID).unwrap();

    let req = test::TestRequest::post()
        .uri(&action_uri(SAMPLE_REF_CODE))
        .set_json(json!({ "account": caller.to_string() }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    let tx = decode_transaction(body["transaction"].as_str().unwrap()).unwrap();
    assert_eq!(provider.calls(), 1);

    let message = &tx.message;
    assert_eq!(message.header().num_required_signatures, 1);
    assert_eq!(tx.signatures.len(), 1);
    assert_eq!(message.static_account_keys()[0], caller);
    assert_eq!(*message.recent_blockhash(), blockhash);

    let ix = &message.instructions()[0];
    let keys = message.static_account_keys();
    let accounts: Vec<Pubkey> = ix
        .accounts
        .iter()
        .map(|index| keys[usize::from(*index)])
        .collect();
    let (greeting, _) =
        Pubkey::find_program_address(&[b"greeting".as_ref(), caller.as_ref()], &program_id);
    assert_eq!(accounts, vec![greeting, caller, system_program::id()]);
    assert_eq!(keys[usize::from(ix.program_id_index)], program_id);

    let expected: [u8; 8] = Sha256::digest(b"global:join_sonic_world")[..8]
        .try_into()
        .unwrap();
    assert_eq!(ix.data, expected.to_vec());
}

#[actix_web::test]
async fn test_post_is_deterministic_for_same_blockhash() {
    let provider = Arc::new(StubProvider::new(Hash::new_unique()));
    let app = test::init_service(
        App::new()
            .app_data(sample_app_state(provider, ResolutionPolicy::Strict).await)
            .configure(configure_routes),
    )
    .await;
    let caller = Pubkey::new_unique().to_string();

    let mut encoded = Vec::new();
    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri(&action_uri(SAMPLE_REF_CODE))
            .set_json(json!({ "account": caller }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        encoded.push(body["transaction"].as_str().unwrap().to_string());
    }

    assert_eq!(encoded[0], encoded[1]);
}

#[actix_web::test]
async fn test_post_when_rpc_unreachable() {
    let provider = Arc::new(StubProvider::unreachable());
    let app = test::init_service(
        App::new()
            .app_data(sample_app_state(provider, ResolutionPolicy::Strict).await)
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri(&action_uri(SAMPLE_REF_CODE))
        .set_json(json!({ "account": Pubkey::new_unique().to_string() }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(resp
        .headers()
        .contains_key("access-control-allow-methods"));
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("connection refused"));
}

#[actix_web::test]
async fn test_post_with_invalid_account_skips_rpc() {
    let provider = Arc::new(StubProvider::new(Hash::new_unique()));
    let app = test::init_service(
        App::new()
            .app_data(sample_app_state(provider.clone(), ResolutionPolicy::Strict).await)
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri(&action_uri(SAMPLE_REF_CODE))
        .set_json(json!({ "account": "0OIl" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(provider.calls(), 0);
}
