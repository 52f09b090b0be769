//! Input validation shared by the service and the HTTP adapter.

use crate::error::CoreError;

/// Maximum length of a user-supplied favorite description, in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 1000;

/// Reject payloads that carry no content.
///
/// The payload is otherwise opaque: `null`, `{}`, `[]` and `""` are the only
/// shapes refused.
pub fn validate_payload(payload: &serde_json::Value) -> Result<(), CoreError> {
    let empty = match payload {
        serde_json::Value::Null => true,
        serde_json::Value::Object(map) => map.is_empty(),
        serde_json::Value::Array(items) => items.is_empty(),
        serde_json::Value::String(s) => s.is_empty(),
        serde_json::Value::Bool(_) | serde_json::Value::Number(_) => false,
    };
    if empty {
        return Err(CoreError::Validation("data is required".to_string()));
    }
    Ok(())
}

/// Enforce the description length limit.
pub fn validate_description(text: &str) -> Result<(), CoreError> {
    let len = text.chars().count();
    if len > MAX_DESCRIPTION_LENGTH {
        return Err(CoreError::Validation(format!(
            "description must be at most {MAX_DESCRIPTION_LENGTH} characters, got {len}"
        )));
    }
    Ok(())
}
