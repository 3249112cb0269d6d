//! Fixtures shared by unit tests.
use std::sync::Arc;

use serde_json::json;
use solana_sdk::hash::Hash;

use crate::{
    domain::TransactionBuilder,
    models::{
        AppState, BlinkRepoModel, IdlDocument, MethodSettings, ProjectRepoModel,
        ResolutionPolicy, RewardStrategy,
    },
    repositories::{InMemoryBlinkRepository, InMemoryProjectRepository, Repository},
    services::{MockSolanaProviderTrait, SolanaProviderTrait},
};

pub const MOCK_PROGRAM_ID: &str = "FREdSFWyTgXXXXw2tsVZX9gv1HBGE1MLELVUDKbpGkm4";
pub const MOCK_REF_CODE: &str = "alice-01";

pub fn mock_idl_value() -> serde_json::Value {
    json!({
        "address": MOCK_PROGRAM_ID,
        "metadata": { "name": "hsw", "version": "0.1.0", "spec": "0.1.0" },
        "instructions": [{
            "name": "join_sonic_world",
            "discriminator": [66, 241, 195, 3, 50, 81, 91, 197],
            "accounts": [
                {
                    "name": "greeting_account",
                    "writable": true,
                    "pda": { "seeds": [
                        { "kind": "const", "value": [103, 114, 101, 101, 116, 105, 110, 103] },
                        { "kind": "account", "path": "user" }
                    ]}
                },
                { "name": "user", "writable": true, "signer": true },
                { "name": "system_program", "address": "11111111111111111111111111111111" }
            ],
            "args": []
        }, {
            "name": "send_a_message",
            "accounts": [
                { "name": "user", "signer": true },
                { "name": "recipient", "writable": true }
            ],
            "args": []
        }]
    })
}

pub fn mock_method_settings() -> MethodSettings {
    MethodSettings {
        method_name: "join_sonic_world".to_string(),
        strategy: RewardStrategy::ShortTerm,
        referral_reward: 0.01,
        drip_days: None,
        enable_volume_boost: false,
        volume_threshold: None,
        volume_bonus: None,
        enable_time_boost: false,
        time_target: None,
        time_window: None,
        time_bonus: None,
    }
}

pub fn mock_project() -> ProjectRepoModel {
    ProjectRepoModel {
        program_id: MOCK_PROGRAM_ID.to_string(),
        project_name: "Sonic World".to_string(),
        idl: IdlDocument::from_value(mock_idl_value()).unwrap(),
        method_signatures: vec!["join_sonic_world".to_string(), "send_a_message".to_string()],
        method_settings: vec![mock_method_settings()],
        escrow_amount: 1.0,
    }
}

pub fn mock_blink(ref_code: &str, method: &str) -> BlinkRepoModel {
    BlinkRepoModel {
        ref_code: ref_code.to_string(),
        program_id: MOCK_PROGRAM_ID.to_string(),
        method_signature: method.to_string(),
    }
}

/// Provider that always answers with `blockhash`.
pub fn mock_provider(blockhash: Hash) -> MockSolanaProviderTrait {
    let mut provider = MockSolanaProviderTrait::new();
    provider
        .expect_get_latest_blockhash()
        .returning(move || Box::pin(async move { Ok(blockhash) }));
    provider
}

/// App state holding the mock project and one blink per offered method.
pub async fn create_mock_app_state(provider: Arc<dyn SolanaProviderTrait>) -> AppState {
    let project_repository = InMemoryProjectRepository::new();
    project_repository.create(mock_project()).await.unwrap();

    let blink_repository = InMemoryBlinkRepository::new();
    blink_repository
        .create(mock_blink(MOCK_REF_CODE, "join_sonic_world"))
        .await
        .unwrap();
    blink_repository
        .create(mock_blink("bob-02", "send_a_message"))
        .await
        .unwrap();

    AppState {
        project_repository: Arc::new(project_repository),
        blink_repository: Arc::new(blink_repository),
        transaction_builder: Arc::new(TransactionBuilder::new(
            provider,
            ResolutionPolicy::Strict,
        )),
        action_icon_path: "/icon.png".to_string(),
    }
}
