//! HTTP transport for the prompts API.
//!
//! The transport owns the listener lifecycle and the router: it binds the
//! configured address, mounts the prompt routes next to the health and info
//! endpoints, and serves them with axum until shutdown.

mod config;
mod error;
pub mod http;

pub use config::HttpConfig;
pub use error::{TransportError, TransportResult};
pub use http::{HttpTransport, build_router};
