use thiserror::Error;

use super::ApiError;

#[derive(Debug, Error, PartialEq)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Constraint violated: {0}")]
    ConstraintViolation(String),
}

impl From<RepositoryError> for ApiError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound(msg) => ApiError::NotFound(msg),
            RepositoryError::ConstraintViolation(msg) => ApiError::BadRequest(msg),
        }
    }
}
