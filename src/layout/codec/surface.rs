//! Surface decoding: the entry point that turns a raw payload into a
//! message, modal or home tab.
//!
//! Blocks are decoded first, in order, stopping at the first failure. The
//! decoded sequence then goes through the surface's checked replacement so
//! the block ceiling applies, and only then are the top-level fields copied.

use super::{
    block::decode_blocks_at,
    fields::{Fields, object},
};
use crate::layout::{
    constraints::LayoutConstraints,
    domain::{Block, HomeTab, Message, Modal, ResponseType, Surface, SurfaceKind},
    error::{KindPosition, LayoutError},
};
use serde_json::{Map, Value};
use std::borrow::Cow;

const ROOT: &str = "payload";

const MESSAGE_KEYS: &[&str] = &[
    "type",
    "blocks",
    "response_type",
    "replace_original",
    "delete_original",
    "metadata",
];

const MODAL_KEYS: &[&str] = &[
    "type",
    "title",
    "blocks",
    "submit",
    "close",
    "private_metadata",
    "callback_id",
    "clear_on_close",
    "notify_on_close",
    "external_id",
];

const HOME_KEYS: &[&str] = &[
    "type",
    "blocks",
    "private_metadata",
    "callback_id",
    "external_id",
];

/// A payload as received: JSON text or an already parsed value.
#[derive(Debug, Clone, Copy)]
pub enum RawPayload<'a> {
    /// JSON text, parsed before decoding.
    Json(&'a str),
    /// A parsed JSON value.
    Value(&'a Value),
}

impl<'a> From<&'a str> for RawPayload<'a> {
    fn from(json: &'a str) -> Self {
        Self::Json(json)
    }
}

impl<'a> From<&'a String> for RawPayload<'a> {
    fn from(json: &'a String) -> Self {
        Self::Json(json.as_str())
    }
}

impl<'a> From<&'a Value> for RawPayload<'a> {
    fn from(value: &'a Value) -> Self {
        Self::Value(value)
    }
}

impl<'a> RawPayload<'a> {
    fn parse(self) -> Result<Cow<'a, Value>, LayoutError> {
        match self {
            Self::Json(json) => serde_json::from_str(json)
                .map(Cow::Owned)
                .map_err(|err| LayoutError::InvalidJson(err.to_string())),
            Self::Value(value) => Ok(Cow::Borrowed(value)),
        }
    }
}

/// Wraps the top-level object of a payload.
fn root<'a>(value: &'a Value, owner: &str) -> Result<Fields<'a>, LayoutError> {
    Ok(Fields::new(object(value, ROOT)?, "", owner))
}

/// Decodes the block sequence, treating an absent or null `blocks` as empty.
fn decode_surface_blocks(fields: &Fields<'_>) -> Result<Vec<Block>, LayoutError> {
    fields
        .optional_array("blocks")?
        .map_or_else(|| Ok(Vec::new()), |items| decode_blocks_at(items, &fields.at("blocks")))
}

/// Rejects a `type` that names a different surface. An absent `type` is
/// accepted; returns whether one was present.
fn check_surface_type(fields: &Fields<'_>, expected: &str) -> Result<bool, LayoutError> {
    match fields.optional_str("type")? {
        Some(kind) if kind != expected => Err(LayoutError::unsupported(KindPosition::Surface, kind)),
        found => Ok(found.is_some()),
    }
}

fn trace_unknown_keys(fields: &Fields<'_>, surface: SurfaceKind, known: &[&str]) {
    for key in fields.unknown_keys(known) {
        tracing::trace!(%surface, key, "ignoring unrecognised top-level key");
    }
}

fn decode_message(value: &Value, constraints: &LayoutConstraints) -> Result<Message, LayoutError> {
    let fields = root(value, "message")?;
    let tagged = check_surface_type(&fields, Message::TYPE)?;
    let blocks = decode_surface_blocks(&fields)?;
    let mut message = if tagged {
        Message::new().with_type_tag()
    } else {
        Message::new()
    };
    message.set_blocks_with(blocks, constraints)?;
    message.response_type = fields.optional_enum(
        "response_type",
        ResponseType::parse,
        ResponseType::ACCEPTED,
    )?;
    message.replace_original = fields.optional_bool("replace_original")?;
    message.delete_original = fields.optional_bool("delete_original")?;
    message.metadata = fields.optional_value("metadata");
    trace_unknown_keys(&fields, SurfaceKind::Message, MESSAGE_KEYS);
    tracing::debug!(blocks = message.blocks().len(), "decoded message");
    Ok(message)
}

fn decode_modal(value: &Value, constraints: &LayoutConstraints) -> Result<Modal, LayoutError> {
    let fields = root(value, "modal")?;
    check_surface_type(&fields, Modal::TYPE)?;
    let mut modal = Modal::new(fields.required_plain_text("title")?);
    let blocks = decode_surface_blocks(&fields)?;
    modal.set_blocks_with(blocks, constraints)?;
    modal.submit = fields.optional_plain_text("submit")?;
    modal.close = fields.optional_plain_text("close")?;
    modal.private_metadata = fields.optional_str("private_metadata")?;
    modal.callback_id = fields.optional_str("callback_id")?;
    modal.clear_on_close = fields.optional_bool("clear_on_close")?;
    modal.notify_on_close = fields.optional_bool("notify_on_close")?;
    modal.external_id = fields.optional_str("external_id")?;
    trace_unknown_keys(&fields, SurfaceKind::Modal, MODAL_KEYS);
    tracing::debug!(blocks = modal.blocks().len(), "decoded modal");
    Ok(modal)
}

fn decode_home_tab(value: &Value, constraints: &LayoutConstraints) -> Result<HomeTab, LayoutError> {
    let fields = root(value, "home tab")?;
    check_surface_type(&fields, HomeTab::TYPE)?;
    let blocks = decode_surface_blocks(&fields)?;
    let mut home = HomeTab::new();
    home.set_blocks_with(blocks, constraints)?;
    home.private_metadata = fields.optional_str("private_metadata")?;
    home.callback_id = fields.optional_str("callback_id")?;
    home.external_id = fields.optional_str("external_id")?;
    trace_unknown_keys(&fields, SurfaceKind::HomeTab, HOME_KEYS);
    tracing::debug!(blocks = home.blocks().len(), "decoded home tab");
    Ok(home)
}

fn decode_surface(value: &Value, constraints: &LayoutConstraints) -> Result<Surface, LayoutError> {
    let map: &Map<String, Value> = object(value, ROOT)?;
    match map.get("type") {
        None | Some(Value::Null) => decode_message(value, constraints).map(Surface::Message),
        Some(Value::String(kind)) => match kind.as_str() {
            Message::TYPE => decode_message(value, constraints).map(Surface::Message),
            Modal::TYPE => decode_modal(value, constraints).map(Surface::Modal),
            HomeTab::TYPE => decode_home_tab(value, constraints).map(Surface::HomeTab),
            other => Err(LayoutError::unsupported(KindPosition::Surface, other)),
        },
        Some(_) => Err(LayoutError::invalid_shape("type", "a string")),
    }
}

macro_rules! impl_from_payload {
    ($ty:ty, $decode:ident) => {
        impl $ty {
            /// Decodes a payload under Slack's limits.
            ///
            /// # Errors
            ///
            /// Returns the first [`LayoutError`] met while walking the
            /// payload, or [`LayoutError::LimitExceeded`] if it carries more
            /// blocks than the surface allows.
            pub fn from_payload<'a>(
                payload: impl Into<RawPayload<'a>>,
            ) -> Result<Self, LayoutError> {
                Self::from_payload_with(payload, &LayoutConstraints::SLACK)
            }

            /// Decodes a payload under the given limits.
            ///
            /// # Errors
            ///
            /// As [`Self::from_payload`].
            pub fn from_payload_with<'a>(
                payload: impl Into<RawPayload<'a>>,
                constraints: &LayoutConstraints,
            ) -> Result<Self, LayoutError> {
                let value = payload.into().parse()?;
                $decode(&value, constraints)
            }
        }
    };
}

impl_from_payload!(Message, decode_message);
impl_from_payload!(Modal, decode_modal);
impl_from_payload!(HomeTab, decode_home_tab);
impl_from_payload!(Surface, decode_surface);
