//! Caller identity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The identity of an authenticated caller.
///
/// Identities are opaque user references. They are compared for equality
/// against a record's owner and are never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    /// Create an identity from a user reference.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The underlying user reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Identity {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for Identity {
    fn from(id: String) -> Self {
        Self(id)
    }
}
