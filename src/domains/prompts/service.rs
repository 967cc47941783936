//! Prompt service implementation.
//!
//! The PromptService is the access controller for prompt records. Every
//! mutating operation walks the same sequence: authenticate the caller,
//! fetch the record, check ownership, and only then ask the store to mutate.
//! A failure at any step ends the request with a classified [`PromptError`].
//!
//! The store, authenticator and sanitizer are injected so each can be
//! replaced independently.

use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::error::PromptError;
use super::model::{NewPrompt, Prompt, PromptFields, without_reserved};
use super::sanitize::FieldSanitizer;
use super::store::PromptStore;
use crate::core::security::{AuthError, Authenticator, Identity, require_ownership};

/// Access controller for prompt records.
#[derive(Clone)]
pub struct PromptService {
    store: Arc<dyn PromptStore>,
    authenticator: Arc<dyn Authenticator>,
    sanitizer: Arc<dyn FieldSanitizer>,
}

impl PromptService {
    /// Create a new PromptService over the given collaborators.
    pub fn new(
        store: Arc<dyn PromptStore>,
        authenticator: Arc<dyn Authenticator>,
        sanitizer: Arc<dyn FieldSanitizer>,
    ) -> Self {
        info!("Initializing PromptService");
        Self {
            store,
            authenticator,
            sanitizer,
        }
    }

    /// Resolve the caller behind a bearer credential.
    pub async fn authenticate(&self, credential: Option<&str>) -> Result<Identity, PromptError> {
        let credential = credential.ok_or(AuthError::MissingCredential)?;
        match self.authenticator.validate(credential).await {
            Ok(identity) => Ok(identity),
            Err(e) => {
                warn!("Rejected bearer credential: {}", e);
                Err(e.into())
            }
        }
    }

    /// List every prompt. No ownership filtering is applied.
    pub async fn list_prompts(&self) -> Result<Vec<Prompt>, PromptError> {
        let prompts = self.store.find_all().await?;
        debug!(count = prompts.len(), "Listed prompts");
        Ok(prompts)
    }

    /// Create a prompt owned by `caller`.
    ///
    /// Whatever `owner` the payload carries is replaced by the caller.
    #[instrument(skip(self, caller, payload), fields(caller = %caller))]
    pub async fn create_prompt(
        &self,
        caller: &Identity,
        payload: PromptFields,
    ) -> Result<Prompt, PromptError> {
        let prompt = self
            .store
            .create(NewPrompt::new(caller.clone(), payload))
            .await?;
        info!(id = %prompt.id, "Created prompt");
        Ok(prompt)
    }

    /// Delete the prompt `id` on behalf of its owner.
    #[instrument(skip(self, caller), fields(caller = %caller))]
    pub async fn delete_prompt(&self, caller: &Identity, id: &str) -> Result<(), PromptError> {
        let prompt = self.find_owned(caller, id).await?;
        self.store.delete(&prompt).await?;
        info!("Deleted prompt");
        Ok(())
    }

    /// Merge `patch` into the prompt `id` on behalf of its owner.
    ///
    /// Blank fields are stripped and any `owner` key is discarded before the
    /// record is even fetched, so the owner can never change through here.
    #[instrument(skip(self, caller, patch), fields(caller = %caller))]
    pub async fn update_prompt(
        &self,
        caller: &Identity,
        id: &str,
        patch: PromptFields,
    ) -> Result<(), PromptError> {
        let patch = without_reserved(self.sanitizer.strip(patch));

        let prompt = self.find_owned(caller, id).await?;
        self.store.update(&prompt, patch).await?;
        info!("Updated prompt");
        Ok(())
    }

    /// Fetch `id` and check that `caller` owns it.
    async fn find_owned(&self, caller: &Identity, id: &str) -> Result<Prompt, PromptError> {
        let prompt = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| PromptError::not_found(id))?;

        if let Err(e) = require_ownership(caller, &prompt) {
            warn!("Ownership check failed: {}", e);
            return Err(e.into());
        }
        Ok(prompt)
    }
}
