//! Prompts API Library
//!
//! This crate provides a small REST API over owner-scoped prompt records.
//! Anyone may list prompts; creating one requires a bearer token, and only
//! the owner of a prompt may update or delete it.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, security checks, server state
//!   and the HTTP transport
//! - **domains**: Business logic organized by bounded contexts
//!   - **prompts**: The prompt record, its store, and the access controller
//!
//! # Example
//!
//! ```rust,no_run
//! use prompts_api::core::{ApiServer, Config, HttpTransport};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let transport = HttpTransport::new(config.http.clone());
//!     transport.run(ApiServer::new(config)).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use self::core::{ApiServer, Config, Error, Result};
