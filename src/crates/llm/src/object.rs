//! Recovery of JSON objects from model completions.
//!
//! Models asked for an object often wrap it in a fenced block or a
//! sentence of prose. [`parse_json_object`] accepts those shapes and
//! rejects everything that is not a JSON object.

use crate::error::{LlmError, Result};
use serde_json::Value;

/// Parse a JSON object out of a completion.
///
/// Tried in order: the whole trimmed text, the first fenced code block
/// (with or without a `json` tag), and the span from the first `{` to the
/// last `}`.
///
/// ```rust
/// use llm::parse_json_object;
///
/// let value = parse_json_object("Sure!\n```json\n{\"amount\": 10}\n```").unwrap();
/// assert_eq!(value["amount"], 10);
/// ```
pub fn parse_json_object(text: &str) -> Result<Value> {
    let trimmed = text.trim();

    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        return expect_object(value);
    }

    if let Some(block) = fenced_block(trimmed) {
        if let Ok(value) = serde_json::from_str::<Value>(block) {
            return expect_object(value);
        }
    }

    if let (Some(start), Some(end)) = (trimmed.find('{'), trimmed.rfind('}')) {
        if start < end {
            if let Ok(value) = serde_json::from_str::<Value>(&trimmed[start..=end]) {
                return expect_object(value);
            }
        }
    }

    Err(LlmError::InvalidResponse(format!(
        "completion does not contain a JSON object: {}",
        preview(trimmed)
    )))
}

fn expect_object(value: Value) -> Result<Value> {
    if value.is_object() {
        Ok(value)
    } else {
        Err(LlmError::InvalidResponse(format!(
            "expected a JSON object, got: {}",
            preview(&value.to_string())
        )))
    }
}

fn fenced_block(text: &str) -> Option<&str> {
    let open = text.find("```")?;
    let after_fence = &text[open + 3..];
    // language tag runs to the end of the fence line
    let body_start = after_fence.find('\n').map(|i| i + 1).unwrap_or(0);
    let body = &after_fence[body_start..];
    let close = body.find("```")?;
    Some(body[..close].trim())
}

fn preview(text: &str) -> String {
    const MAX: usize = 120;
    if text.chars().count() <= MAX {
        text.to_string()
    } else {
        let cut: String = text.chars().take(MAX).collect();
        format!("{}...", cut)
    }
}
