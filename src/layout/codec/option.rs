//! Option object decoding.

use super::fields::{Fields, object};
use crate::layout::{domain::OptionObject, error::LayoutError};
use serde_json::Value;

/// Decodes an option found at `path`.
///
/// `text` and `value` are required; `text` and `description` are nested
/// text objects.
pub(crate) fn decode_option_at(value: &Value, path: &str) -> Result<OptionObject, LayoutError> {
    let fields = Fields::new(object(value, path)?, path, "option");
    let text = fields.required_text("text")?;
    let option_value = fields.required_str("value")?;
    Ok(OptionObject {
        text,
        value: option_value,
        description: fields.optional_text("description")?,
        url: fields.optional_str("url")?,
    })
}
