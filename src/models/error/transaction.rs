use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use log::error;
use serde::Serialize;
use thiserror::Error;

use super::RepositoryError;
use crate::{
    models::{ActionError, IdlError},
    services::SolanaProviderError,
};

/// Errors raised while turning a blink into an unsigned transaction.
///
/// Every variant is reported to action clients as a `500` carrying a
/// `{ "message": ... }` body; no partial transaction is ever returned.
#[derive(Error, Debug, Serialize, PartialEq)]
pub enum TransactionBuildError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unsupported account kind for '{0}'")]
    UnsupportedAccountKind(String),

    #[error("Unsupported seed for account '{account}': {kind} '{path}'")]
    UnsupportedSeed {
        account: String,
        kind: String,
        path: String,
    },

    #[error("Missing account '{0}'")]
    MissingAccount(String),

    #[error("Instruction '{0}' takes arguments, which blinks cannot supply")]
    UnsupportedInstructionArgs(String),

    #[error("Failed to build transaction: {0}")]
    Build(String),
}

impl From<SolanaProviderError> for TransactionBuildError {
    fn from(error: SolanaProviderError) -> Self {
        TransactionBuildError::Network(error.to_string())
    }
}

impl From<RepositoryError> for TransactionBuildError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound(msg) => TransactionBuildError::NotFound(msg),
            RepositoryError::ConstraintViolation(msg) => TransactionBuildError::Build(msg),
        }
    }
}

impl From<IdlError> for TransactionBuildError {
    fn from(error: IdlError) -> Self {
        TransactionBuildError::MalformedInput(error.to_string())
    }
}

impl ResponseError for TransactionBuildError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        error!("Error processing action request: {}", self);
        HttpResponse::InternalServerError().json(ActionError {
            message: self.to_string(),
        })
    }
}
