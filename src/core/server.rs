//! API server state and collaborator wiring.
//!
//! [`ApiServer`] is the shared state behind every route. It owns the
//! configuration and the prompt service, and it is where the default
//! collaborators (memory store, static tokens, blank stripping) are chosen.

use std::sync::Arc;
use tracing::info;

use super::config::Config;
use super::security::StaticTokenAuthenticator;
use crate::domains::prompts::{MemoryPromptStore, PromptService, RemoveBlanks};

/// Shared server state.
#[derive(Clone)]
pub struct ApiServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Access controller for the prompts resource.
    prompt_service: Arc<PromptService>,
}

impl ApiServer {
    /// Create a server with the default collaborators.
    pub fn new(config: Config) -> Self {
        let authenticator = StaticTokenAuthenticator::from_config(&config.auth);
        info!(
            "Using in-memory prompt store with {} configured token(s)",
            authenticator.len()
        );

        let prompt_service = PromptService::new(
            Arc::new(MemoryPromptStore::new()),
            Arc::new(authenticator),
            Arc::new(RemoveBlanks),
        );

        Self::with_prompt_service(config, prompt_service)
    }

    /// Create a server around an already wired prompt service.
    pub fn with_prompt_service(config: Config, prompt_service: PromptService) -> Self {
        Self {
            config: Arc::new(config),
            prompt_service: Arc::new(prompt_service),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the prompt service.
    pub fn prompt_service(&self) -> &Arc<PromptService> {
        &self.prompt_service
    }
}
