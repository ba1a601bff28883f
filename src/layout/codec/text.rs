//! Text object decoding.

use super::fields::{Fields, object};
use crate::layout::{
    domain::{MrkdwnText, PlainText, TextObject},
    error::{KindPosition, LayoutError},
};
use serde_json::Value;

/// Decodes a `plain_text` or `mrkdwn` object found at `path`.
///
/// The kind-specific flag is only set when present in the input, so an
/// absent `emoji` stays unset rather than becoming `false`.
pub(crate) fn decode_text_at(value: &Value, path: &str) -> Result<TextObject, LayoutError> {
    let fields = Fields::new(object(value, path)?, path, "text object");
    let kind = fields.required_str("type")?;
    match kind.as_str() {
        PlainText::KIND => Ok(TextObject::PlainText(PlainText {
            text: fields.required_str("text")?,
            emoji: fields.optional_bool("emoji")?,
        })),
        MrkdwnText::KIND => Ok(TextObject::Mrkdwn(MrkdwnText {
            text: fields.required_str("text")?,
            verbatim: fields.optional_bool("verbatim")?,
        })),
        _ => Err(LayoutError::unsupported(KindPosition::TextObject, kind)),
    }
}

/// Returns `true` if `kind` names a text object rather than an element.
pub(crate) fn is_text_kind(kind: &str) -> bool {
    kind == PlainText::KIND || kind == MrkdwnText::KIND
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("plain_text", true)]
    #[case("mrkdwn", true)]
    #[case("button", false)]
    #[case("image", false)]
    fn recognises_text_kinds(#[case] kind: &str, #[case] expected: bool) {
        assert_eq!(is_text_kind(kind), expected);
    }

    #[rstest]
    fn reports_nested_path_for_bad_flag() {
        let err = decode_text_at(
            &json!({"type": "plain_text", "text": "Hi", "emoji": "yes"}),
            "blocks[0].text",
        )
        .expect_err("emoji must be a boolean");
        assert_eq!(
            err,
            LayoutError::invalid_shape("blocks[0].text.emoji", "a boolean")
        );
    }
}
