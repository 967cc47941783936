//! Bearer credential validation.
//!
//! The [`Authenticator`] trait is the seam between the API and whatever
//! backs its tokens. [`StaticTokenAuthenticator`] is the default backend and
//! resolves tokens from a fixed table loaded from configuration.

use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

use super::identity::Identity;
use crate::core::config::AuthConfig;

/// Errors raised while authenticating a caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No bearer credential was presented.
    #[error("Missing bearer token")]
    MissingCredential,

    /// The credential does not resolve to any identity.
    #[error("Invalid bearer token")]
    InvalidCredential,
}

/// Validates bearer credentials and yields the caller identity.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Resolve `credential` into the identity it was issued to.
    async fn validate(&self, credential: &str) -> Result<Identity, AuthError>;
}

/// Authenticator backed by a fixed token table.
#[derive(Clone, Default)]
pub struct StaticTokenAuthenticator {
    tokens: HashMap<String, Identity>,
}

impl StaticTokenAuthenticator {
    /// Create an authenticator with no known tokens.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the token table from configuration.
    pub fn from_config(config: &AuthConfig) -> Self {
        let mut auth = Self::new();
        for (token, user) in &config.tokens {
            auth.insert(token.clone(), Identity::new(user.clone()));
        }
        auth
    }

    /// Register `token` as issued to `identity`.
    pub fn insert(&mut self, token: impl Into<String>, identity: Identity) {
        self.tokens.insert(token.into(), identity);
    }

    /// Builder-style variant of [`insert`](Self::insert).
    pub fn with_token(mut self, token: impl Into<String>, identity: impl Into<Identity>) -> Self {
        self.insert(token, identity.into());
        self
    }

    /// Number of registered tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether no tokens are registered.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[async_trait]
impl Authenticator for StaticTokenAuthenticator {
    async fn validate(&self, credential: &str) -> Result<Identity, AuthError> {
        if credential.is_empty() {
            return Err(AuthError::MissingCredential);
        }
        self.tokens
            .get(credential)
            .cloned()
            .ok_or(AuthError::InvalidCredential)
    }
}

/// Tokens are secrets; only the identities are shown.
impl fmt::Debug for StaticTokenAuthenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticTokenAuthenticator")
            .field("identities", &self.tokens.values().collect::<Vec<_>>())
            .finish()
    }
}
