//! Surfaces: the top-level containers that own an ordered block sequence.
//!
//! A surface is a message, a modal or a home tab. Block order is render
//! order and is preserved through decoding, mutation and building.
//!
//! The block ceiling of each surface kind is enforced on full replacement
//! ([`Message::set_blocks`] and friends, which the decoder uses) and again
//! by `build`, immediately before encoding. [`Message::push_block`] appends
//! without checking so a surface can be assembled interactively; `build`
//! remains the final gate.

use super::{Block, PlainText};
use crate::layout::{constraints::LayoutConstraints, error::LayoutError};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// The kinds of surface that hold blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceKind {
    /// A chat message.
    Message,
    /// A modal view.
    Modal,
    /// An app home tab.
    HomeTab,
}

impl fmt::Display for SurfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Message => "message",
            Self::Modal => "modal",
            Self::HomeTab => "home tab",
        };
        f.write_str(label)
    }
}

/// Who sees a message posted in response to an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    /// Everyone in the channel.
    InChannel,
    /// Only the invoking user.
    Ephemeral,
}

impl ResponseType {
    /// Every accepted wire value, for error messages.
    pub const ACCEPTED: &'static str = "in_channel, ephemeral";

    /// Parses a wire value.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "in_channel" => Some(Self::InChannel),
            "ephemeral" => Some(Self::Ephemeral),
            _ => None,
        }
    }
}

/// Rejects a block sequence longer than the surface kind allows.
fn check_block_limit(
    surface: SurfaceKind,
    actual: usize,
    constraints: &LayoutConstraints,
) -> Result<(), LayoutError> {
    let max = constraints.block_limit(surface);
    if actual > max {
        tracing::debug!(%surface, actual, max, "block ceiling exceeded");
        return Err(LayoutError::LimitExceeded {
            surface,
            max,
            actual,
        });
    }
    Ok(())
}

macro_rules! impl_block_surface {
    ($ty:ty, $kind:expr) => {
        impl $ty {
            /// The surface kind, which selects the block ceiling.
            pub const KIND: SurfaceKind = $kind;

            /// Returns the blocks in render order.
            #[must_use]
            pub fn blocks(&self) -> &[Block] {
                &self.blocks
            }

            /// Appends a block without checking the block ceiling.
            ///
            /// The ceiling is still enforced when the surface is built.
            pub fn push_block(&mut self, block: impl Into<Block>) -> &mut Self {
                self.blocks.push(block.into());
                self
            }

            /// Replaces every block, checking Slack's block ceiling.
            ///
            /// # Errors
            ///
            /// Returns [`LayoutError::LimitExceeded`] if `blocks` is longer
            /// than the ceiling; the surface is left unchanged.
            pub fn set_blocks(&mut self, blocks: Vec<Block>) -> Result<(), LayoutError> {
                self.set_blocks_with(blocks, &LayoutConstraints::SLACK)
            }

            /// Replaces every block, checking the given block ceiling.
            ///
            /// # Errors
            ///
            /// Returns [`LayoutError::LimitExceeded`] if `blocks` is longer
            /// than the ceiling; the surface is left unchanged.
            pub fn set_blocks_with(
                &mut self,
                blocks: Vec<Block>,
                constraints: &LayoutConstraints,
            ) -> Result<(), LayoutError> {
                check_block_limit(Self::KIND, blocks.len(), constraints)?;
                self.blocks = blocks;
                Ok(())
            }

            /// Encodes the surface to its wire JSON under Slack's limits.
            ///
            /// # Errors
            ///
            /// Returns [`LayoutError::LimitExceeded`] if the surface holds
            /// more blocks than its kind allows.
            pub fn build(&self) -> Result<Value, LayoutError> {
                self.build_with(&LayoutConstraints::SLACK)
            }

            /// Encodes the surface to its wire JSON under the given limits.
            ///
            /// # Errors
            ///
            /// Returns [`LayoutError::LimitExceeded`] if the surface holds
            /// more blocks than its kind allows.
            pub fn build_with(&self, constraints: &LayoutConstraints) -> Result<Value, LayoutError> {
                check_block_limit(Self::KIND, self.blocks.len(), constraints)?;
                Ok(serde_json::to_value(self)?)
            }
        }
    };
}

/// A chat message.
///
/// # Examples
///
/// ```
/// use blocksmith::layout::domain::{Divider, Header, Message, PlainText};
///
/// let mut message = Message::new();
/// message
///     .push_block(Header::new(PlainText::new("Release 1.4")))
///     .push_block(Divider::new());
///
/// let built = message.build().expect("within the block ceiling");
/// assert_eq!(built["blocks"][0]["type"], "header");
/// assert!(built.get("response_type").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Message {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    type_tag: Option<&'static str>,
    blocks: Vec<Block>,
    /// Visibility of an interaction response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_type: Option<ResponseType>,
    /// Whether the response replaces the message that triggered it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replace_original: Option<bool>,
    /// Whether the message that triggered the response is deleted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_original: Option<bool>,
    /// Application metadata, carried verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl Message {
    /// The wire `type` of a message, which is optional on the wire.
    pub const TYPE: &'static str = "message";

    /// Creates an empty message.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Emits `"type": "message"` when encoded.
    #[must_use]
    pub const fn with_type_tag(mut self) -> Self {
        self.type_tag = Some(Self::TYPE);
        self
    }

    /// Whether the encoded message carries an explicit `type`.
    #[must_use]
    pub const fn has_type_tag(&self) -> bool {
        self.type_tag.is_some()
    }
}

impl_block_surface!(Message, SurfaceKind::Message);

/// A modal view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "modal")]
pub struct Modal {
    /// The title bar text.
    pub title: PlainText,
    blocks: Vec<Block>,
    /// The submit button label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submit: Option<PlainText>,
    /// The close button label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close: Option<PlainText>,
    /// Opaque string echoed back in view payloads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_metadata: Option<String>,
    /// Identifies the view in interaction payloads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_id: Option<String>,
    /// Whether closing the modal clears the whole view stack.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clear_on_close: Option<bool>,
    /// Whether the app is notified when the modal is closed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_on_close: Option<bool>,
    /// A workspace-unique identifier for the view.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}

impl Modal {
    /// The wire `type` of a modal view.
    pub const TYPE: &'static str = "modal";

    /// Creates an empty modal with the given title.
    #[must_use]
    pub const fn new(title: PlainText) -> Self {
        Self {
            title,
            blocks: Vec::new(),
            submit: None,
            close: None,
            private_metadata: None,
            callback_id: None,
            clear_on_close: None,
            notify_on_close: None,
            external_id: None,
        }
    }

    /// Sets the submit button label.
    #[must_use]
    pub fn with_submit(mut self, submit: PlainText) -> Self {
        self.submit = Some(submit);
        self
    }

    /// Sets the close button label.
    #[must_use]
    pub fn with_close(mut self, close: PlainText) -> Self {
        self.close = Some(close);
        self
    }

    /// Sets the callback ID.
    #[must_use]
    pub fn with_callback_id(mut self, callback_id: impl Into<String>) -> Self {
        self.callback_id = Some(callback_id.into());
        self
    }
}

impl_block_surface!(Modal, SurfaceKind::Modal);

/// An app home tab.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "type", rename = "home")]
pub struct HomeTab {
    blocks: Vec<Block>,
    /// Opaque string echoed back in view payloads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_metadata: Option<String>,
    /// Identifies the view in interaction payloads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_id: Option<String>,
    /// A workspace-unique identifier for the view.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}

impl HomeTab {
    /// The wire `type` of a home tab view.
    pub const TYPE: &'static str = "home";

    /// Creates an empty home tab.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl_block_surface!(HomeTab, SurfaceKind::HomeTab);

/// Any surface, as recovered by `Surface::from_payload`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Surface {
    /// A chat message.
    Message(Message),
    /// A modal view.
    Modal(Modal),
    /// An app home tab.
    HomeTab(HomeTab),
}

impl Surface {
    /// Returns the surface kind.
    #[must_use]
    pub const fn kind(&self) -> SurfaceKind {
        match self {
            Self::Message(_) => SurfaceKind::Message,
            Self::Modal(_) => SurfaceKind::Modal,
            Self::HomeTab(_) => SurfaceKind::HomeTab,
        }
    }

    /// Returns the blocks in render order.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        match self {
            Self::Message(message) => message.blocks(),
            Self::Modal(modal) => modal.blocks(),
            Self::HomeTab(home) => home.blocks(),
        }
    }

    /// Encodes the surface under Slack's limits.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::LimitExceeded`] if the surface holds more
    /// blocks than its kind allows.
    pub fn build(&self) -> Result<Value, LayoutError> {
        self.build_with(&LayoutConstraints::SLACK)
    }

    /// Encodes the surface under the given limits.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::LimitExceeded`] if the surface holds more
    /// blocks than its kind allows.
    pub fn build_with(&self, constraints: &LayoutConstraints) -> Result<Value, LayoutError> {
        match self {
            Self::Message(message) => message.build_with(constraints),
            Self::Modal(modal) => modal.build_with(constraints),
            Self::HomeTab(home) => home.build_with(constraints),
        }
    }
}

impl From<Message> for Surface {
    fn from(message: Message) -> Self {
        Self::Message(message)
    }
}

impl From<Modal> for Surface {
    fn from(modal: Modal) -> Self {
        Self::Modal(modal)
    }
}

impl From<HomeTab> for Surface {
    fn from(home: HomeTab) -> Self {
        Self::HomeTab(home)
    }
}
