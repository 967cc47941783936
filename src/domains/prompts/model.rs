//! Prompt records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::security::{Identity, Owned};

/// Free-form domain fields of a prompt, as submitted by clients.
pub type PromptFields = Map<String, Value>;

/// Field holding the store-assigned identifier.
pub const ID_FIELD: &str = "_id";

/// Field holding the owning identity.
pub const OWNER_FIELD: &str = "owner";

/// A stored prompt.
///
/// `id` and `owner` are server-controlled. Everything else a client sent
/// lives in `fields` and is flattened into the record on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prompt {
    #[serde(rename = "_id")]
    pub id: String,
    pub owner: Identity,
    #[serde(flatten)]
    pub fields: PromptFields,
}

impl Prompt {
    /// Merge `patch` into the record's fields.
    ///
    /// Keys present in the patch overwrite stored values; keys absent from it
    /// are left untouched. Server-controlled keys are never taken from a patch.
    pub fn merge(&mut self, patch: PromptFields) {
        for (key, value) in without_reserved(patch) {
            self.fields.insert(key, value);
        }
    }
}

impl Owned for Prompt {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn owner(&self) -> &Identity {
        &self.owner
    }
}

/// A prompt about to be created; the store assigns its identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPrompt {
    pub owner: Identity,
    pub fields: PromptFields,
}

impl NewPrompt {
    /// Build a new prompt owned by `owner`.
    ///
    /// Any `owner` or `_id` the client put in `fields` is dropped.
    pub fn new(owner: Identity, fields: PromptFields) -> Self {
        Self {
            owner,
            fields: without_reserved(fields),
        }
    }
}

/// Remove server-controlled keys from client-submitted fields.
pub fn without_reserved(mut fields: PromptFields) -> PromptFields {
    fields.remove(OWNER_FIELD);
    fields.remove(ID_FIELD);
    fields
}
