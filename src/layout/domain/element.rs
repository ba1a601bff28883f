//! Block elements: the interactive and decorative leaves placed inside
//! section, actions, context and input blocks.
//!
//! Each element kind is its own struct carrying its wire `type` tag, and
//! [`Element`] closes over all of them. Pickers and text inputs live in the
//! `input` module; select menus live in the `select` module.

use super::{
    ChannelsSelect, ConversationsSelect, DatePicker, DatetimePicker, EmailInput, ExternalSelect,
    FileInput, MultiChannelsSelect, MultiConversationsSelect, MultiExternalSelect,
    MultiStaticSelect, MultiUsersSelect, NumberInput, OptionObject, PlainTextInput, RichTextInput,
    StaticSelect, TextObject, TimePicker, UrlInput, UsersSelect,
};
use serde::Serialize;
use std::fmt;

/// Any block element.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Element {
    /// `button`
    Button(Button),
    /// `checkboxes`
    Checkboxes(Checkboxes),
    /// `datepicker`
    DatePicker(DatePicker),
    /// `timepicker`
    TimePicker(TimePicker),
    /// `datetimepicker`
    DatetimePicker(DatetimePicker),
    /// `email_text_input`
    EmailInput(EmailInput),
    /// `number_input`
    NumberInput(NumberInput),
    /// `plain_text_input`
    PlainTextInput(PlainTextInput),
    /// `url_text_input`
    UrlInput(UrlInput),
    /// `radio_buttons`
    RadioButtons(RadioButtons),
    /// `static_select`
    StaticSelect(StaticSelect),
    /// `external_select`
    ExternalSelect(ExternalSelect),
    /// `users_select`
    UsersSelect(UsersSelect),
    /// `conversations_select`
    ConversationsSelect(ConversationsSelect),
    /// `channels_select`
    ChannelsSelect(ChannelsSelect),
    /// `multi_static_select`
    MultiStaticSelect(MultiStaticSelect),
    /// `multi_external_select`
    MultiExternalSelect(MultiExternalSelect),
    /// `multi_users_select`
    MultiUsersSelect(MultiUsersSelect),
    /// `multi_conversations_select`
    MultiConversationsSelect(MultiConversationsSelect),
    /// `multi_channels_select`
    MultiChannelsSelect(MultiChannelsSelect),
    /// `overflow`
    Overflow(OverflowMenu),
    /// `file_input`
    FileInput(FileInput),
    /// `rich_text_input`
    RichTextInput(RichTextInput),
    /// `image`
    Image(ImageElement),
}

impl Element {
    /// Returns the wire discriminator of this element.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Button(_) => "button",
            Self::Checkboxes(_) => "checkboxes",
            Self::DatePicker(_) => "datepicker",
            Self::TimePicker(_) => "timepicker",
            Self::DatetimePicker(_) => "datetimepicker",
            Self::EmailInput(_) => "email_text_input",
            Self::NumberInput(_) => "number_input",
            Self::PlainTextInput(_) => "plain_text_input",
            Self::UrlInput(_) => "url_text_input",
            Self::RadioButtons(_) => "radio_buttons",
            Self::StaticSelect(_) => "static_select",
            Self::ExternalSelect(_) => "external_select",
            Self::UsersSelect(_) => "users_select",
            Self::ConversationsSelect(_) => "conversations_select",
            Self::ChannelsSelect(_) => "channels_select",
            Self::MultiStaticSelect(_) => "multi_static_select",
            Self::MultiExternalSelect(_) => "multi_external_select",
            Self::MultiUsersSelect(_) => "multi_users_select",
            Self::MultiConversationsSelect(_) => "multi_conversations_select",
            Self::MultiChannelsSelect(_) => "multi_channels_select",
            Self::Overflow(_) => "overflow",
            Self::FileInput(_) => "file_input",
            Self::RichTextInput(_) => "rich_text_input",
            Self::Image(_) => "image",
        }
    }

    /// Returns the `action_id`, or `None` for the non-interactive image element.
    #[must_use]
    pub fn action_id(&self) -> Option<&str> {
        let action_id = match self {
            Self::Button(e) => &e.action_id,
            Self::Checkboxes(e) => &e.action_id,
            Self::DatePicker(e) => &e.action_id,
            Self::TimePicker(e) => &e.action_id,
            Self::DatetimePicker(e) => &e.action_id,
            Self::EmailInput(e) => &e.action_id,
            Self::NumberInput(e) => &e.action_id,
            Self::PlainTextInput(e) => &e.action_id,
            Self::UrlInput(e) => &e.action_id,
            Self::RadioButtons(e) => &e.action_id,
            Self::StaticSelect(e) => &e.action_id,
            Self::ExternalSelect(e) => &e.action_id,
            Self::UsersSelect(e) => &e.action_id,
            Self::ConversationsSelect(e) => &e.action_id,
            Self::ChannelsSelect(e) => &e.action_id,
            Self::MultiStaticSelect(e) => &e.action_id,
            Self::MultiExternalSelect(e) => &e.action_id,
            Self::MultiUsersSelect(e) => &e.action_id,
            Self::MultiConversationsSelect(e) => &e.action_id,
            Self::MultiChannelsSelect(e) => &e.action_id,
            Self::Overflow(e) => &e.action_id,
            Self::FileInput(e) => &e.action_id,
            Self::RichTextInput(e) => &e.action_id,
            Self::Image(_) => return None,
        };
        Some(action_id)
    }

    /// Returns the placeholder text, for kinds that carry one.
    #[must_use]
    pub const fn placeholder(&self) -> Option<&TextObject> {
        match self {
            Self::StaticSelect(e) => Some(&e.placeholder),
            Self::ExternalSelect(e) => Some(&e.placeholder),
            Self::UsersSelect(e) => Some(&e.placeholder),
            Self::ConversationsSelect(e) => Some(&e.placeholder),
            Self::ChannelsSelect(e) => Some(&e.placeholder),
            Self::MultiStaticSelect(e) => Some(&e.placeholder),
            Self::MultiExternalSelect(e) => Some(&e.placeholder),
            Self::MultiUsersSelect(e) => Some(&e.placeholder),
            Self::MultiConversationsSelect(e) => Some(&e.placeholder),
            Self::MultiChannelsSelect(e) => Some(&e.placeholder),
            Self::DatePicker(e) => e.placeholder.as_ref(),
            Self::TimePicker(e) => e.placeholder.as_ref(),
            Self::EmailInput(e) => e.placeholder.as_ref(),
            Self::NumberInput(e) => e.placeholder.as_ref(),
            Self::PlainTextInput(e) => e.placeholder.as_ref(),
            Self::UrlInput(e) => e.placeholder.as_ref(),
            Self::RichTextInput(e) => e.placeholder.as_ref(),
            Self::Button(_)
            | Self::Checkboxes(_)
            | Self::DatetimePicker(_)
            | Self::RadioButtons(_)
            | Self::Overflow(_)
            | Self::FileInput(_)
            | Self::Image(_) => None,
        }
    }
}

/// Visual emphasis of a [`Button`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    /// Green call-to-action styling.
    Primary,
    /// Red destructive-action styling.
    Danger,
}

impl ButtonStyle {
    /// Every accepted wire value, for error messages.
    pub const ACCEPTED: &'static str = "primary, danger";

    /// Parses a wire value.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "primary" => Some(Self::Primary),
            "danger" => Some(Self::Danger),
            _ => None,
        }
    }

    /// Returns the wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Danger => "danger",
        }
    }
}

impl fmt::Display for ButtonStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `button` element.
///
/// # Examples
///
/// ```
/// use blocksmith::layout::domain::{Button, ButtonStyle, TextObject};
///
/// let button = Button::new(TextObject::plain("Approve"), "approve_clicked")
///     .with_value("42")
///     .with_style(ButtonStyle::Primary);
/// assert_eq!(button.style, Some(ButtonStyle::Primary));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "button")]
pub struct Button {
    /// The button label.
    pub text: TextObject,
    /// Identifies the action in interaction payloads.
    pub action_id: String,
    /// A link opened in the user's browser.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// The value sent back in interaction payloads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Visual emphasis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ButtonStyle>,
    /// Label read by screen readers in place of `text`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessibility_label: Option<String>,
}

impl Button {
    /// Creates a button with the given label and action.
    #[must_use]
    pub fn new(text: TextObject, action_id: impl Into<String>) -> Self {
        Self {
            text,
            action_id: action_id.into(),
            url: None,
            value: None,
            style: None,
            accessibility_label: None,
        }
    }

    /// Sets the url.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the value.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Sets the style.
    #[must_use]
    pub const fn with_style(mut self, style: ButtonStyle) -> Self {
        self.style = Some(style);
        self
    }
}

/// A `checkboxes` group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "checkboxes")]
pub struct Checkboxes {
    /// Identifies the action in interaction payloads.
    pub action_id: String,
    /// The choices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<OptionObject>>,
    /// Choices selected on first render.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_options: Option<Vec<OptionObject>>,
    /// Whether the element receives focus when the view opens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_on_load: Option<bool>,
}

impl Checkboxes {
    /// Creates a checkbox group.
    #[must_use]
    pub fn new(action_id: impl Into<String>, options: Vec<OptionObject>) -> Self {
        Self {
            action_id: action_id.into(),
            options: Some(options),
            initial_options: None,
            focus_on_load: None,
        }
    }
}

/// A `radio_buttons` group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "radio_buttons")]
pub struct RadioButtons {
    /// Identifies the action in interaction payloads.
    pub action_id: String,
    /// The choices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<OptionObject>>,
    /// Choice selected on first render.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_option: Option<OptionObject>,
    /// Whether the element receives focus when the view opens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_on_load: Option<bool>,
}

impl RadioButtons {
    /// Creates a radio group.
    #[must_use]
    pub fn new(action_id: impl Into<String>, options: Vec<OptionObject>) -> Self {
        Self {
            action_id: action_id.into(),
            options: Some(options),
            initial_option: None,
            focus_on_load: None,
        }
    }
}

/// An `overflow` menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "overflow")]
pub struct OverflowMenu {
    /// Identifies the action in interaction payloads.
    pub action_id: String,
    /// The menu entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<OptionObject>>,
}

impl OverflowMenu {
    /// Creates an overflow menu.
    #[must_use]
    pub fn new(action_id: impl Into<String>, options: Vec<OptionObject>) -> Self {
        Self {
            action_id: action_id.into(),
            options: Some(options),
        }
    }
}

/// An `image` element, used as a section accessory or context entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "image")]
pub struct ImageElement {
    /// The image location.
    pub image_url: String,
    /// Text describing the image.
    pub alt_text: String,
}

impl ImageElement {
    /// Creates an image element.
    #[must_use]
    pub fn new(image_url: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
            alt_text: alt_text.into(),
        }
    }
}
