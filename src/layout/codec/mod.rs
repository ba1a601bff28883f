//! Decoding of raw JSON into the typed layout model.
//!
//! Decoding is a recursive descent over [`serde_json::Value`]: surfaces
//! dispatch to blocks, blocks to elements and text objects, elements to
//! options. Each level picks a routine from a static table keyed by the
//! `type` discriminator. The first failure aborts the whole decode and is
//! returned with the dotted path of the offending value.
//!
//! Encoding needs no code here: every domain type derives `Serialize`.
//! `Deserialize` is implemented by routing through these decoders, so
//! `serde_json::from_value` and friends report the same failures.

mod block;
mod element;
mod fields;
mod option;
mod surface;
mod text;

pub use block::block_kinds;
pub use element::element_kinds;
pub use surface::RawPayload;

use crate::layout::{
    domain::{Block, Element, HomeTab, Message, Modal, OptionObject, Surface, TextObject},
    error::LayoutError,
};
use serde::{Deserialize, Deserializer, de};
use serde_json::Value;

/// Decodes a standalone text object.
///
/// # Errors
///
/// Returns [`LayoutError`] if `value` is not a well-formed `plain_text` or
/// `mrkdwn` object.
pub fn decode_text_object(value: &Value) -> Result<TextObject, LayoutError> {
    text::decode_text_at(value, "text")
}

/// Decodes a standalone option.
///
/// # Errors
///
/// Returns [`LayoutError`] if `value` lacks `text` or `value`, or nests a
/// malformed text object.
pub fn decode_option(value: &Value) -> Result<OptionObject, LayoutError> {
    option::decode_option_at(value, "option")
}

/// Decodes a standalone element.
///
/// # Errors
///
/// Returns [`LayoutError::UnsupportedKind`] for an unknown `type`, or the
/// first failure in the element's own fields.
pub fn decode_element(value: &Value) -> Result<Element, LayoutError> {
    element::decode_element_at(value, "element")
}

/// Decodes a standalone block.
///
/// # Errors
///
/// Returns [`LayoutError::UnsupportedKind`] for an unknown `type`, or the
/// first failure in the block's own fields.
pub fn decode_block(value: &Value) -> Result<Block, LayoutError> {
    block::decode_block_at(value, "block")
}

macro_rules! deserialize_via_decoder {
    ($ty:ty, |$value:ident| $decode:expr) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let $value = Value::deserialize(deserializer)?;
                $decode.map_err(de::Error::custom)
            }
        }
    };
}

deserialize_via_decoder!(TextObject, |value| decode_text_object(&value));
deserialize_via_decoder!(OptionObject, |value| decode_option(&value));
deserialize_via_decoder!(Element, |value| decode_element(&value));
deserialize_via_decoder!(Block, |value| decode_block(&value));
deserialize_via_decoder!(Message, |value| Message::from_payload(&value));
deserialize_via_decoder!(Modal, |value| Modal::from_payload(&value));
deserialize_via_decoder!(HomeTab, |value| HomeTab::from_payload(&value));
deserialize_via_decoder!(Surface, |value| Surface::from_payload(&value));
