//! Locate the JSON array of question candidates inside a free-text model reply.

use serde_json::Value;

/// Extract raw candidates from `text`. Never fails: an unparseable reply is
/// logged and yields an empty sequence.
///
/// Tries the slice from the first `[` to the last `]`, then the whole reply
/// with code fences stripped.
pub fn extract(text: &str) -> Vec<Value> {
    if let Some(slice) = bracketed(text) {
        match serde_json::from_str::<Value>(slice) {
            Ok(value) => return candidates(value),
            Err(e) => log::debug!("Bracketed JSON did not parse: {}", e),
        }
    }

    match serde_json::from_str::<Value>(strip_code_fence(text)) {
        Ok(value) => candidates(value),
        Err(e) => {
            log::warn!(
                "No JSON found in model response ({} bytes): {}",
                text.len(),
                e
            );
            Vec::new()
        }
    }
}

/// Inclusive slice between the first `[` and the last `]`, if they are in order.
fn bracketed(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    (start < end).then(|| &text[start..=end])
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let inner = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}

fn candidates(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("questions") {
            Some(Value::Array(items)) => items,
            Some(other) => {
                map.insert("questions".to_string(), other);
                vec![Value::Object(map)]
            }
            None => vec![Value::Object(map)],
        },
        other => {
            log::warn!("Model response JSON is not an array or object: {}", other);
            Vec::new()
        }
    }
}
