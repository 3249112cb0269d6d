use crate::integration::common::{sample_app_state, StubProvider, SAMPLE_PROGRAM_ID};
use actix_web::{http::StatusCode, test, App};
use referral_network::{
    api::routes::configure_routes, domain::decode_transaction, models::ResolutionPolicy,
};
use serde_json::{json, Value};
use solana_sdk::{hash::Hash, pubkey::Pubkey};
use std::sync::Arc;

fn voting_idl(program_id: &Pubkey) -> Value {
    json!({
        "address": program_id.to_string(),
        "metadata": { "name": "voting", "version": "0.1.0", "spec": "0.1.0" },
        "instructions": [{
            "name": "cast_vote",
            "discriminator": [1, 2, 3, 4, 5, 6, 7, 8],
            "accounts": [
                { "name": "voter", "writable": true, "signer": true },
                {
                    "name": "tally",
                    "writable": true,
                    "pda": { "seeds": [{ "kind": "const", "value": [116, 97, 108, 108, 121] }] }
                },
                { "name": "recipient", "writable": true }
            ],
            "args": []
        }]
    })
}

fn voting_project(program_id: &Pubkey) -> Value {
    json!({
        "project_name": "Voting",
        "idl": voting_idl(program_id),
        "method_signatures": ["cast_vote"],
        "method_settings": [{
            "method_name": "cast_vote",
            "strategy": "long_term",
            "referral_reward": 0.002,
            "drip_days": 7
        }],
        "escrow_amount": 2.0
    })
}

#[actix_web::test]
async fn test_sample_registry_is_listed() {
    let provider = Arc::new(StubProvider::new(Hash::new_unique()));
    let app = test::init_service(
        App::new()
            .app_data(sample_app_state(provider, ResolutionPolicy::Strict).await)
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/projects").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"][0]["program_id"], SAMPLE_PROGRAM_ID);
    assert_eq!(
        body["data"][0]["method_signatures"],
        json!(["join_sonic_world", "send_a_message"])
    );

    let req = test::TestRequest::get()
        .uri(&format!(
            "/api/v1/projects/{SAMPLE_PROGRAM_ID}/methods/send_a_message"
        ))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let accounts = body["data"]["accounts"].as_array().unwrap();
    assert_eq!(accounts.len(), 2);
    assert_eq!(accounts[0]["kind"]["type"], "pda");
    assert_eq!(accounts[1]["kind"]["type"], "signer");
}

#[actix_web::test]
async fn test_register_project_and_blink_then_redeem_leniently() {
    let provider = Arc::new(StubProvider::new(Hash::new_unique()));
    let app = test::init_service(
        App::new()
            .app_data(sample_app_state(provider, ResolutionPolicy::Lenient).await)
            .configure(configure_routes),
    )
    .await;
    let program_id = Pubkey::new_unique();

    let req = test::TestRequest::post()
        .uri("/api/v1/projects")
        .set_json(voting_project(&program_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/api/v1/blinks")
        .set_json(json!({
            "ref_code": "dave_7",
            "program_id": program_id.to_string(),
            "method_signature": "cast_vote"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::get()
        .uri("/api/v1/blinks/dave_7")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["method_settings"]["drip_days"], 7);
    assert_eq!(body["data"]["idl_content"]["address"], program_id.to_string());

    let caller = Pubkey::new_unique();
    let req = test::TestRequest::post()
        .uri("/api/actions/network/dave_7")
        .set_json(json!({ "account": caller.to_string() }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let tx = decode_transaction(body["transaction"].as_str().unwrap()).unwrap();
    let keys = tx.message.static_account_keys();
    let ix = &tx.message.instructions()[0];
    let accounts: Vec<Pubkey> = ix
        .accounts
        .iter()
        .map(|index| keys[usize::from(*index)])
        .collect();
    let (tally, _) = Pubkey::find_program_address(&[b"tally".as_ref()], &program_id);
    assert_eq!(accounts, vec![caller, tally, caller]);
    assert_eq!(ix.data, vec![1u8, 2, 3, 4, 5, 6, 7, 8]);
}

#[actix_web::test]
async fn test_strict_redeem_rejects_unclassified_account() {
    let provider = Arc::new(StubProvider::new(Hash::new_unique()));
    let app = test::init_service(
        App::new()
            .app_data(sample_app_state(provider.clone(), ResolutionPolicy::Strict).await)
            .configure(configure_routes),
    )
    .await;
    let program_id = Pubkey::new_unique();

    let req = test::TestRequest::post()
        .uri("/api/v1/projects")
        .set_json(voting_project(&program_id))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CREATED
    );
    let req = test::TestRequest::post()
        .uri("/api/v1/blinks")
        .set_json(json!({
            "ref_code": "erin",
            "program_id": program_id.to_string(),
            "method_signature": "cast_vote"
        }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CREATED
    );

    let req = test::TestRequest::post()
        .uri("/api/actions/network/erin")
        .set_json(json!({ "account": Pubkey::new_unique().to_string() }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Unsupported account kind for 'recipient'");
    assert_eq!(provider.calls(), 0);
}

#[actix_web::test]
async fn test_registration_errors() {
    let provider = Arc::new(StubProvider::new(Hash::new_unique()));
    let app = test::init_service(
        App::new()
            .app_data(sample_app_state(provider, ResolutionPolicy::Strict).await)
            .configure(configure_routes),
    )
    .await;

    let mut project = voting_project(&Pubkey::new_unique());
    project["escrow_amount"] = json!(0.01);
    let req = test::TestRequest::post()
        .uri("/api/v1/projects")
        .set_json(project)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);

    let mut project = voting_project(&Pubkey::new_unique());
    project["idl"]["instructions"][0]["args"] = json!([{ "name": "choice", "type": "u8" }]);
    let req = test::TestRequest::post()
        .uri("/api/v1/projects")
        .set_json(project)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("'cast_vote' takes arguments"));

    let req = test::TestRequest::post()
        .uri("/api/v1/blinks")
        .set_json(json!({
            "ref_code": "has spaces",
            "program_id": SAMPLE_PROGRAM_ID,
            "method_signature": "join_sonic_world"
        }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );

    let req = test::TestRequest::post()
        .uri("/api/v1/blinks")
        .set_json(json!({ "ref_code": "missing-fields" }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );

    let req = test::TestRequest::get()
        .uri("/api/v1/blinks/nobody")
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );
}
