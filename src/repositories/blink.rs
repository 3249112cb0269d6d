//! In-memory storage of blinks, keyed by referral code.
use crate::models::{BlinkRepoModel, RepositoryError};
use crate::repositories::Repository;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::{Mutex, MutexGuard};

#[derive(Debug)]
pub struct InMemoryBlinkRepository {
    store: Mutex<HashMap<String, BlinkRepoModel>>,
}

impl InMemoryBlinkRepository {
    pub fn new() -> Self {
        Self {
            store: Mutex::new(HashMap::new()),
        }
    }

    async fn acquire_lock<T>(lock: &Mutex<T>) -> Result<MutexGuard<T>, RepositoryError> {
        Ok(lock.lock().await)
    }
}

impl Default for InMemoryBlinkRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Repository<BlinkRepoModel, String> for InMemoryBlinkRepository {
    async fn create(&self, blink: BlinkRepoModel) -> Result<BlinkRepoModel, RepositoryError> {
        let mut store = Self::acquire_lock(&self.store).await?;
        if store.contains_key(&blink.ref_code) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "Blink with referral code {} already exists",
                blink.ref_code
            )));
        }
        store.insert(blink.ref_code.clone(), blink.clone());
        Ok(blink)
    }

    async fn get_by_id(&self, id: String) -> Result<BlinkRepoModel, RepositoryError> {
        let store = Self::acquire_lock(&self.store).await?;
        store.get(&id).cloned().ok_or_else(|| {
            RepositoryError::NotFound(format!("Blink with referral code {} not found", id))
        })
    }

    async fn list_all(&self) -> Result<Vec<BlinkRepoModel>, RepositoryError> {
        let store = Self::acquire_lock(&self.store).await?;
        let mut blinks: Vec<BlinkRepoModel> = store.values().cloned().collect();
        blinks.sort_by(|a, b| a.ref_code.cmp(&b.ref_code));
        Ok(blinks)
    }

    async fn update(
        &self,
        id: String,
        blink: BlinkRepoModel,
    ) -> Result<BlinkRepoModel, RepositoryError> {
        let mut store = Self::acquire_lock(&self.store).await?;
        match store.get_mut(&id) {
            Some(existing) => {
                let mut updated = blink;
                updated.ref_code = id;
                *existing = updated.clone();
                Ok(updated)
            }
            None => Err(RepositoryError::NotFound(format!(
                "Blink with referral code {} not found",
                id
            ))),
        }
    }

    async fn delete_by_id(&self, id: String) -> Result<(), RepositoryError> {
        let mut store = Self::acquire_lock(&self.store).await?;
        store.remove(&id).map(|_| ()).ok_or_else(|| {
            RepositoryError::NotFound(format!("Blink with referral code {} not found", id))
        })
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        let store = Self::acquire_lock(&self.store).await?;
        Ok(store.len())
    }
}
