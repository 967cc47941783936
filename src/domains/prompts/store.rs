//! Record store for prompts.
//!
//! [`PromptStore`] is the persistence seam: the service only ever asks the
//! store to find, create, update or delete records. [`MemoryPromptStore`]
//! is the default backend.

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use super::model::{NewPrompt, Prompt, PromptFields};

/// Errors reported by a prompt store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The record disappeared before the operation could be applied.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// The backend failed.
    #[error("Store backend failure: {0}")]
    Backend(String),
}

impl StoreError {
    /// Create a new "not found" error.
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    /// Create a new backend error.
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}

/// Storage operations the prompt service depends on.
#[async_trait]
pub trait PromptStore: Send + Sync {
    /// All records, in insertion order.
    async fn find_all(&self) -> Result<Vec<Prompt>, StoreError>;

    /// The record with `id`, if any.
    async fn find_by_id(&self, id: &str) -> Result<Option<Prompt>, StoreError>;

    /// Persist a new record and return it with its assigned identifier.
    async fn create(&self, prompt: NewPrompt) -> Result<Prompt, StoreError>;

    /// Merge `patch` into the stored copy of `prompt`.
    async fn update(&self, prompt: &Prompt, patch: PromptFields) -> Result<(), StoreError>;

    /// Remove `prompt`.
    async fn delete(&self, prompt: &Prompt) -> Result<(), StoreError>;
}

/// In-memory prompt store.
#[derive(Debug, Default)]
pub struct MemoryPromptStore {
    records: RwLock<Vec<Prompt>>,
}

impl MemoryPromptStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PromptStore for MemoryPromptStore {
    async fn find_all(&self) -> Result<Vec<Prompt>, StoreError> {
        Ok(self.records.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Prompt>, StoreError> {
        Ok(self.records.read().await.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, prompt: NewPrompt) -> Result<Prompt, StoreError> {
        let record = Prompt {
            id: Uuid::new_v4().to_string(),
            owner: prompt.owner,
            fields: prompt.fields,
        };
        debug!(id = %record.id, "Storing prompt");
        self.records.write().await.push(record.clone());
        Ok(record)
    }

    async fn update(&self, prompt: &Prompt, patch: PromptFields) -> Result<(), StoreError> {
        let mut records = self.records.write().await;
        let stored = records
            .iter_mut()
            .find(|p| p.id == prompt.id)
            .ok_or_else(|| StoreError::not_found(&prompt.id))?;
        stored.merge(patch);
        Ok(())
    }

    async fn delete(&self, prompt: &Prompt) -> Result<(), StoreError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|p| p.id != prompt.id);
        if records.len() == before {
            return Err(StoreError::not_found(&prompt.id));
        }
        Ok(())
    }
}
