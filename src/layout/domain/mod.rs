//! Domain types for the layout subsystem.
//!
//! This module contains the typed Block Kit model: text objects, options,
//! elements, blocks and the surfaces that hold them. Every type is
//! value-shaped and serialises to its wire JSON via serde, omitting unset
//! optional fields.

mod block;
mod element;
mod input;
mod option;
mod select;
mod surface;
mod text;

pub use block::{
    Actions, Block, Context, ContextElement, Divider, File, Header, ImageBlock, Input, RichText,
    Section, Video,
};
pub use element::{
    Button, ButtonStyle, Checkboxes, Element, ImageElement, OverflowMenu, RadioButtons,
};
pub use input::{
    DatePicker, DatetimePicker, EmailInput, FileInput, NumberInput, PlainTextInput,
    RichTextInput, TimePicker, UrlInput,
};
pub use option::{OptionGroup, OptionObject};
pub use select::{
    ChannelsSelect, ConversationsSelect, ExternalSelect, MultiChannelsSelect,
    MultiConversationsSelect, MultiExternalSelect, MultiStaticSelect, MultiUsersSelect,
    StaticSelect, UsersSelect,
};
pub use surface::{HomeTab, Message, Modal, ResponseType, Surface, SurfaceKind};
pub use text::{MrkdwnText, PlainText, TextObject};
