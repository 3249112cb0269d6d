//! Shared fixtures: a stub RPC provider and app state built from a registry file.
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use actix_web::web;
use async_trait::async_trait;
use referral_network::{
    config::load_config,
    domain::TransactionBuilder,
    models::{AppState, ResolutionPolicy},
    repositories::{InMemoryBlinkRepository, InMemoryProjectRepository, Repository},
    services::{SolanaProviderError, SolanaProviderTrait},
};
use solana_sdk::{hash::Hash, signature::Signature, transaction::VersionedTransaction};

pub const SAMPLE_PROGRAM_ID: &str = "FREdSFWyTgXXXXw2tsVZX9gv1HBGE1MLELVUDKbpGkm4";
pub const SAMPLE_REF_CODE: &str = "sonic-welcome";

pub fn sample_config_path() -> String {
    format!("{}/config/config.json", env!("CARGO_MANIFEST_DIR"))
}

/// Provider returning a fixed blockhash, or failing every call when `blockhash` is `None`.
pub struct StubProvider {
    blockhash: Option<Hash>,
    calls: AtomicUsize,
}

impl StubProvider {
    pub fn new(blockhash: Hash) -> Self {
        Self {
            blockhash: Some(blockhash),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            blockhash: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SolanaProviderTrait for StubProvider {
    async fn get_latest_blockhash(&self) -> Result<Hash, SolanaProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.blockhash
            .ok_or_else(|| SolanaProviderError::NetworkError("connection refused".to_string()))
    }

    async fn send_versioned_transaction(
        &self,
        _transaction: &VersionedTransaction,
    ) -> Result<Signature, SolanaProviderError> {
        Err(SolanaProviderError::RpcError(
            "sending is not supported by the stub".to_string(),
        ))
    }
}

/// Builds app state seeded from the registry file at `path`.
pub async fn app_state_from_file(
    path: &str,
    provider: Arc<StubProvider>,
    policy: ResolutionPolicy,
) -> web::Data<AppState> {
    let registry = load_config(path).unwrap();

    let project_repository = Arc::new(InMemoryProjectRepository::new());
    let blink_repository = Arc::new(InMemoryBlinkRepository::new());
    for project in registry.projects {
        project_repository.create(project).await.unwrap();
    }
    for blink in registry.blinks {
        blink_repository.create(blink).await.unwrap();
    }

    web::Data::new(AppState {
        project_repository,
        blink_repository,
        transaction_builder: Arc::new(TransactionBuilder::new(provider, policy)),
        action_icon_path: "/icon.png".to_string(),
    })
}

/// App state seeded from the sample registry shipped with the service.
pub async fn sample_app_state(
    provider: Arc<StubProvider>,
    policy: ResolutionPolicy,
) -> web::Data<AppState> {
    app_state_from_file(&sample_config_path(), provider, policy).await
}
