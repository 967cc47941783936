//! Prompts domain module.
//!
//! This module implements the `prompts` REST resource: owner-scoped records
//! that anyone may list but only their owner may change or delete.
//!
//! ## Architecture
//!
//! - `model.rs` - The prompt record and its server-controlled fields
//! - `store.rs` - The `PromptStore` seam and the in-memory store
//! - `sanitize.rs` - Blank-field stripping for update payloads
//! - `service.rs` - The access controller (authenticate, fetch, authorize, mutate)
//! - `routes.rs` - axum handlers mapping HTTP verbs onto the service

mod error;
pub mod model;
pub mod routes;
pub mod sanitize;
mod service;
pub mod store;

pub use error::{ErrorKind, PromptError};
pub use model::{NewPrompt, Prompt, PromptFields};
pub use routes::router;
pub use sanitize::{FieldSanitizer, RemoveBlanks};
pub use service::PromptService;
pub use store::{MemoryPromptStore, PromptStore, StoreError};
