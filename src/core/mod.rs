//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the prompts API,
//! including error handling, configuration, server state, security checks,
//! and the HTTP transport.

pub mod config;
pub mod error;
pub mod security;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use security::{Authenticator, Identity};
pub use server::ApiServer;
pub use transport::{HttpConfig, HttpTransport};
