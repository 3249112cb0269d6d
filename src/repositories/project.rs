//! In-memory storage of registered projects, keyed by program id.
use crate::models::{ProjectRepoModel, RepositoryError};
use crate::repositories::Repository;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::{Mutex, MutexGuard};

#[derive(Debug)]
pub struct InMemoryProjectRepository {
    store: Mutex<HashMap<String, ProjectRepoModel>>,
}

impl InMemoryProjectRepository {
    pub fn new() -> Self {
        Self {
            store: Mutex::new(HashMap::new()),
        }
    }

    async fn acquire_lock<T>(lock: &Mutex<T>) -> Result<MutexGuard<T>, RepositoryError> {
        Ok(lock.lock().await)
    }
}

impl Default for InMemoryProjectRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Repository<ProjectRepoModel, String> for InMemoryProjectRepository {
    async fn create(&self, project: ProjectRepoModel) -> Result<ProjectRepoModel, RepositoryError> {
        let mut store = Self::acquire_lock(&self.store).await?;
        if store.contains_key(&project.program_id) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "Project for program {} already exists",
                project.program_id
            )));
        }
        store.insert(project.program_id.clone(), project.clone());
        Ok(project)
    }

    async fn get_by_id(&self, id: String) -> Result<ProjectRepoModel, RepositoryError> {
        let store = Self::acquire_lock(&self.store).await?;
        store.get(&id).cloned().ok_or_else(|| {
            RepositoryError::NotFound(format!("Project for program {} not found", id))
        })
    }

    async fn list_all(&self) -> Result<Vec<ProjectRepoModel>, RepositoryError> {
        let store = Self::acquire_lock(&self.store).await?;
        let mut projects: Vec<ProjectRepoModel> = store.values().cloned().collect();
        projects.sort_by(|a, b| a.program_id.cmp(&b.program_id));
        Ok(projects)
    }

    async fn update(
        &self,
        id: String,
        project: ProjectRepoModel,
    ) -> Result<ProjectRepoModel, RepositoryError> {
        let mut store = Self::acquire_lock(&self.store).await?;
        match store.get_mut(&id) {
            Some(existing) => {
                let mut updated = project;
                updated.program_id = id;
                *existing = updated.clone();
                Ok(updated)
            }
            None => Err(RepositoryError::NotFound(format!(
                "Project for program {} not found",
                id
            ))),
        }
    }

    async fn delete_by_id(&self, id: String) -> Result<(), RepositoryError> {
        let mut store = Self::acquire_lock(&self.store).await?;
        match store.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepositoryError::NotFound(format!(
                "Project for program {} not found",
                id
            ))),
        }
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        let store = Self::acquire_lock(&self.store).await?;
        Ok(store.len())
    }
}
