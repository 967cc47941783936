//! Domains module containing business logic organized by bounded contexts.
//!
//! Each subdomain owns its model, storage seam, service and routes.

pub mod prompts;
