//! Solana Provider Module
//!
//! Thin abstraction over the non-blocking Solana `RpcClient`. Transaction
//! building only needs a recent blockhash; submission is exposed for callers
//! that hold a signed transaction.
use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use log::debug;
#[cfg(test)]
use mockall::automock;
use reqwest::Url;
use serde::Serialize;
use solana_client::{
    client_error::{ClientError, ClientErrorKind},
    nonblocking::rpc_client::RpcClient,
};
use solana_sdk::{
    commitment_config::CommitmentConfig, hash::Hash, signature::Signature,
    transaction::VersionedTransaction,
};
use thiserror::Error;

/// Errors that can occur when interacting with the Solana provider.
#[derive(Error, Debug, Serialize, PartialEq)]
pub enum SolanaProviderError {
    /// Connection issues and timeouts.
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("RPC error: {0}")]
    RpcError(String),

    #[error("Request error (HTTP {status_code}): {error}")]
    RequestError { error: String, status_code: u16 },

    /// Invalid RPC url or client setup.
    #[error("Network configuration error: {0}")]
    NetworkConfiguration(String),

    #[error("Invalid transaction: {0}")]
    InvalidTransaction(String),
}

impl SolanaProviderError {
    /// Classifies a Solana RPC client error into the appropriate variant.
    pub fn from_rpc_error(error: ClientError) -> Self {
        match error.kind() {
            ClientErrorKind::Io(_) => SolanaProviderError::NetworkError(error.to_string()),
            ClientErrorKind::Reqwest(reqwest_err) => match reqwest_err.status() {
                Some(status) => SolanaProviderError::RequestError {
                    error: error.to_string(),
                    status_code: status.as_u16(),
                },
                // connect errors and timeouts carry no status
                None => SolanaProviderError::NetworkError(error.to_string()),
            },
            ClientErrorKind::TransactionError(_) | ClientErrorKind::SigningError(_) => {
                SolanaProviderError::InvalidTransaction(error.to_string())
            }
            _ => SolanaProviderError::RpcError(error.to_string()),
        }
    }
}

#[async_trait]
#[cfg_attr(test, automock)]
pub trait SolanaProviderTrait: Send + Sync {
    /// Retrieves the latest blockhash.
    async fn get_latest_blockhash(&self) -> Result<Hash, SolanaProviderError>;

    /// Sends a signed versioned transaction to the network.
    async fn send_versioned_transaction(
        &self,
        transaction: &VersionedTransaction,
    ) -> Result<Signature, SolanaProviderError>;
}

pub struct SolanaProvider {
    client: Arc<RpcClient>,
}

impl SolanaProvider {
    pub fn new(url: &str, timeout_seconds: u64) -> Result<Self, SolanaProviderError> {
        Self::new_with_commitment(url, timeout_seconds, CommitmentConfig::confirmed())
    }

    /// Creates a provider after validating the RPC url.
    pub fn new_with_commitment(
        url: &str,
        timeout_seconds: u64,
        commitment: CommitmentConfig,
    ) -> Result<Self, SolanaProviderError> {
        let parsed = Url::parse(url).map_err(|e| {
            SolanaProviderError::NetworkConfiguration(format!("Invalid RPC url {url}: {e}"))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(SolanaProviderError::NetworkConfiguration(format!(
                "Unsupported RPC url scheme: {}",
                parsed.scheme()
            )));
        }
        if timeout_seconds == 0 {
            return Err(SolanaProviderError::NetworkConfiguration(
                "RPC timeout must be greater than zero".to_string(),
            ));
        }

        let client = RpcClient::new_with_timeout_and_commitment(
            url.to_string(),
            Duration::from_secs(timeout_seconds),
            commitment,
        );
        Ok(Self {
            client: Arc::new(client),
        })
    }

    pub fn url(&self) -> String {
        self.client.url()
    }
}

#[async_trait]
impl SolanaProviderTrait for SolanaProvider {
    async fn get_latest_blockhash(&self) -> Result<Hash, SolanaProviderError> {
        let blockhash = self
            .client
            .get_latest_blockhash()
            .await
            .map_err(SolanaProviderError::from_rpc_error)?;
        debug!("Fetched latest blockhash {} from {}", blockhash, self.url());
        Ok(blockhash)
    }

    async fn send_versioned_transaction(
        &self,
        transaction: &VersionedTransaction,
    ) -> Result<Signature, SolanaProviderError> {
        self.client
            .send_transaction(transaction)
            .await
            .map_err(SolanaProviderError::from_rpc_error)
    }
}
