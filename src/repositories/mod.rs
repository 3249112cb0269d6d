//! # Repository Module
//!
//! Storage of registered projects and blinks behind the `Repository` trait.

use crate::models::{BlinkRepoModel, ProjectRepoModel, RepositoryError};
use async_trait::async_trait;

mod blink;
pub use blink::*;

mod project;
pub use project::*;

#[cfg(test)]
use mockall::automock;

#[async_trait]
#[cfg_attr(test, automock)]
pub trait Repository<T, ID> {
    async fn create(&self, entity: T) -> Result<T, RepositoryError>;
    async fn get_by_id(&self, id: ID) -> Result<T, RepositoryError>;
    async fn list_all(&self) -> Result<Vec<T>, RepositoryError>;
    async fn update(&self, id: ID, entity: T) -> Result<T, RepositoryError>;
    async fn delete_by_id(&self, id: ID) -> Result<(), RepositoryError>;
    async fn count(&self) -> Result<usize, RepositoryError>;
}

/// Projects keyed by program id.
pub type ProjectRepository = dyn Repository<ProjectRepoModel, String> + Send + Sync;

/// Blinks keyed by referral code.
pub type BlinkRepository = dyn Repository<BlinkRepoModel, String> + Send + Sync;
