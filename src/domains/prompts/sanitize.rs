//! Blank-field stripping for submitted payloads.

use serde_json::Value;

use super::model::PromptFields;

/// Cleans a client payload before it is applied to a record.
pub trait FieldSanitizer: Send + Sync {
    fn strip(&self, payload: PromptFields) -> PromptFields;
}

/// Drops fields whose value is an empty or whitespace-only string.
///
/// Only top-level fields are inspected; nested values are kept as submitted.
#[derive(Debug, Clone, Copy, Default)]
pub struct RemoveBlanks;

impl FieldSanitizer for RemoveBlanks {
    fn strip(&self, mut payload: PromptFields) -> PromptFields {
        payload.retain(|_, value| !is_blank(value));
        payload
    }
}

fn is_blank(value: &Value) -> bool {
    matches!(value, Value::String(s) if s.trim().is_empty())
}
