//! Select menus, single and multi.
//!
//! Every select requires an `action_id` and a `placeholder`. Static menus
//! carry their choices inline as either `options` or `option_groups`; the
//! other menus resolve their choices from the workspace or an external
//! data source.

use super::{OptionGroup, OptionObject, TextObject};
use serde::Serialize;

/// A `static_select` menu.
///
/// # Examples
///
/// ```
/// use blocksmith::layout::domain::{OptionObject, StaticSelect, TextObject};
///
/// let select = StaticSelect::new("env_chosen", TextObject::plain("Environment"))
///     .with_options(vec![OptionObject::new(TextObject::plain("Prod"), "prod")]);
/// assert!(select.option_groups.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "static_select")]
pub struct StaticSelect {
    /// Identifies the action in interaction payloads.
    pub action_id: String,
    /// Text shown before a choice is made.
    pub placeholder: TextObject,
    /// Ungrouped choices; exclusive with `option_groups`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<OptionObject>>,
    /// Grouped choices; exclusive with `options`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_groups: Option<Vec<OptionGroup>>,
    /// Choice selected on first render.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_option: Option<OptionObject>,
    /// Whether the element receives focus when the view opens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_on_load: Option<bool>,
}

impl StaticSelect {
    /// Creates a static select with no choices.
    #[must_use]
    pub fn new(action_id: impl Into<String>, placeholder: TextObject) -> Self {
        Self {
            action_id: action_id.into(),
            placeholder,
            options: None,
            option_groups: None,
            initial_option: None,
            focus_on_load: None,
        }
    }

    /// Sets the ungrouped choices.
    #[must_use]
    pub fn with_options(mut self, options: Vec<OptionObject>) -> Self {
        self.options = Some(options);
        self
    }

    /// Sets the grouped choices.
    #[must_use]
    pub fn with_option_groups(mut self, groups: Vec<OptionGroup>) -> Self {
        self.option_groups = Some(groups);
        self
    }
}

/// A `multi_static_select` menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "multi_static_select")]
pub struct MultiStaticSelect {
    /// Identifies the action in interaction payloads.
    pub action_id: String,
    /// Text shown before a choice is made.
    pub placeholder: TextObject,
    /// Ungrouped choices; exclusive with `option_groups`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<OptionObject>>,
    /// Grouped choices; exclusive with `options`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_groups: Option<Vec<OptionGroup>>,
    /// Choices selected on first render.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_options: Option<Vec<OptionObject>>,
    /// Maximum number of simultaneous choices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_selected_items: Option<u32>,
    /// Whether the element receives focus when the view opens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_on_load: Option<bool>,
}

impl MultiStaticSelect {
    /// Creates a multi static select with no choices.
    #[must_use]
    pub fn new(action_id: impl Into<String>, placeholder: TextObject) -> Self {
        Self {
            action_id: action_id.into(),
            placeholder,
            options: None,
            option_groups: None,
            initial_options: None,
            max_selected_items: None,
            focus_on_load: None,
        }
    }
}

/// An `external_select` menu, populated from the app's options endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "external_select")]
pub struct ExternalSelect {
    /// Identifies the action in interaction payloads.
    pub action_id: String,
    /// Text shown before a choice is made.
    pub placeholder: TextObject,
    /// Choice selected on first render.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_option: Option<OptionObject>,
    /// Characters typed before the options endpoint is queried.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_query_length: Option<u32>,
    /// Whether the element receives focus when the view opens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_on_load: Option<bool>,
}

impl ExternalSelect {
    /// Creates an external select.
    #[must_use]
    pub fn new(action_id: impl Into<String>, placeholder: TextObject) -> Self {
        Self {
            action_id: action_id.into(),
            placeholder,
            initial_option: None,
            min_query_length: None,
            focus_on_load: None,
        }
    }
}

/// A `multi_external_select` menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "multi_external_select")]
pub struct MultiExternalSelect {
    /// Identifies the action in interaction payloads.
    pub action_id: String,
    /// Text shown before a choice is made.
    pub placeholder: TextObject,
    /// Choices selected on first render.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_options: Option<Vec<OptionObject>>,
    /// Characters typed before the options endpoint is queried.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_query_length: Option<u32>,
    /// Maximum number of simultaneous choices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_selected_items: Option<u32>,
    /// Whether the element receives focus when the view opens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_on_load: Option<bool>,
}

impl MultiExternalSelect {
    /// Creates a multi external select.
    #[must_use]
    pub fn new(action_id: impl Into<String>, placeholder: TextObject) -> Self {
        Self {
            action_id: action_id.into(),
            placeholder,
            initial_options: None,
            min_query_length: None,
            max_selected_items: None,
            focus_on_load: None,
        }
    }
}

/// A `users_select` menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "users_select")]
pub struct UsersSelect {
    /// Identifies the action in interaction payloads.
    pub action_id: String,
    /// Text shown before a choice is made.
    pub placeholder: TextObject,
    /// User ID selected on first render.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_user: Option<String>,
    /// Whether the element receives focus when the view opens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_on_load: Option<bool>,
}

impl UsersSelect {
    /// Creates a users select.
    #[must_use]
    pub fn new(action_id: impl Into<String>, placeholder: TextObject) -> Self {
        Self {
            action_id: action_id.into(),
            placeholder,
            initial_user: None,
            focus_on_load: None,
        }
    }
}

/// A `multi_users_select` menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "multi_users_select")]
pub struct MultiUsersSelect {
    /// Identifies the action in interaction payloads.
    pub action_id: String,
    /// Text shown before a choice is made.
    pub placeholder: TextObject,
    /// User IDs selected on first render.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_users: Option<Vec<String>>,
    /// Maximum number of simultaneous choices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_selected_items: Option<u32>,
    /// Whether the element receives focus when the view opens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_on_load: Option<bool>,
}

impl MultiUsersSelect {
    /// Creates a multi users select.
    #[must_use]
    pub fn new(action_id: impl Into<String>, placeholder: TextObject) -> Self {
        Self {
            action_id: action_id.into(),
            placeholder,
            initial_users: None,
            max_selected_items: None,
            focus_on_load: None,
        }
    }
}

/// A `conversations_select` menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "conversations_select")]
pub struct ConversationsSelect {
    /// Identifies the action in interaction payloads.
    pub action_id: String,
    /// Text shown before a choice is made.
    pub placeholder: TextObject,
    /// Conversation ID selected on first render.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_conversation: Option<String>,
    /// Preselect the conversation the view was opened from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_to_current_conversation: Option<bool>,
    /// Whether the element receives focus when the view opens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_on_load: Option<bool>,
}

impl ConversationsSelect {
    /// Creates a conversations select.
    #[must_use]
    pub fn new(action_id: impl Into<String>, placeholder: TextObject) -> Self {
        Self {
            action_id: action_id.into(),
            placeholder,
            initial_conversation: None,
            default_to_current_conversation: None,
            focus_on_load: None,
        }
    }
}

/// A `multi_conversations_select` menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "multi_conversations_select")]
pub struct MultiConversationsSelect {
    /// Identifies the action in interaction payloads.
    pub action_id: String,
    /// Text shown before a choice is made.
    pub placeholder: TextObject,
    /// Conversation IDs selected on first render.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_conversations: Option<Vec<String>>,
    /// Preselect the conversation the view was opened from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_to_current_conversation: Option<bool>,
    /// Maximum number of simultaneous choices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_selected_items: Option<u32>,
    /// Whether the element receives focus when the view opens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_on_load: Option<bool>,
}

impl MultiConversationsSelect {
    /// Creates a multi conversations select.
    #[must_use]
    pub fn new(action_id: impl Into<String>, placeholder: TextObject) -> Self {
        Self {
            action_id: action_id.into(),
            placeholder,
            initial_conversations: None,
            default_to_current_conversation: None,
            max_selected_items: None,
            focus_on_load: None,
        }
    }
}

/// A `channels_select` menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "channels_select")]
pub struct ChannelsSelect {
    /// Identifies the action in interaction payloads.
    pub action_id: String,
    /// Text shown before a choice is made.
    pub placeholder: TextObject,
    /// Channel ID selected on first render.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_channel: Option<String>,
    /// Whether the element receives focus when the view opens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_on_load: Option<bool>,
}

impl ChannelsSelect {
    /// Creates a channels select.
    #[must_use]
    pub fn new(action_id: impl Into<String>, placeholder: TextObject) -> Self {
        Self {
            action_id: action_id.into(),
            placeholder,
            initial_channel: None,
            focus_on_load: None,
        }
    }
}

/// A `multi_channels_select` menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "multi_channels_select")]
pub struct MultiChannelsSelect {
    /// Identifies the action in interaction payloads.
    pub action_id: String,
    /// Text shown before a choice is made.
    pub placeholder: TextObject,
    /// Channel IDs selected on first render.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_channels: Option<Vec<String>>,
    /// Maximum number of simultaneous choices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_selected_items: Option<u32>,
    /// Whether the element receives focus when the view opens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_on_load: Option<bool>,
}

impl MultiChannelsSelect {
    /// Creates a multi channels select.
    #[must_use]
    pub fn new(action_id: impl Into<String>, placeholder: TextObject) -> Self {
        Self {
            action_id: action_id.into(),
            placeholder,
            initial_channels: None,
            max_selected_items: None,
            focus_on_load: None,
        }
    }
}
