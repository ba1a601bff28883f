//! Pickers and free-form input elements.

use super::TextObject;
use serde::Serialize;
use serde_json::Value;

/// A `datepicker` element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "datepicker")]
pub struct DatePicker {
    /// Identifies the action in interaction payloads.
    pub action_id: String,
    /// Text shown before a date is chosen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<TextObject>,
    /// Preselected date, formatted `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_date: Option<String>,
    /// Whether the element receives focus when the view opens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_on_load: Option<bool>,
}

impl DatePicker {
    /// Creates a date picker.
    #[must_use]
    pub fn new(action_id: impl Into<String>) -> Self {
        Self {
            action_id: action_id.into(),
            placeholder: None,
            initial_date: None,
            focus_on_load: None,
        }
    }
}

/// A `timepicker` element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "timepicker")]
pub struct TimePicker {
    /// Identifies the action in interaction payloads.
    pub action_id: String,
    /// Text shown before a time is chosen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<TextObject>,
    /// Preselected time, formatted `HH:mm`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_time: Option<String>,
    /// IANA time zone the picker reports in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    /// Whether the element receives focus when the view opens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_on_load: Option<bool>,
}

impl TimePicker {
    /// Creates a time picker.
    #[must_use]
    pub fn new(action_id: impl Into<String>) -> Self {
        Self {
            action_id: action_id.into(),
            placeholder: None,
            initial_time: None,
            timezone: None,
            focus_on_load: None,
        }
    }
}

/// A `datetimepicker` element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "datetimepicker")]
pub struct DatetimePicker {
    /// Identifies the action in interaction payloads.
    pub action_id: String,
    /// Preselected instant as a Unix timestamp in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_date_time: Option<i64>,
    /// Whether the element receives focus when the view opens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_on_load: Option<bool>,
}

impl DatetimePicker {
    /// Creates a date-time picker.
    #[must_use]
    pub fn new(action_id: impl Into<String>) -> Self {
        Self {
            action_id: action_id.into(),
            initial_date_time: None,
            focus_on_load: None,
        }
    }
}

/// An `email_text_input` element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "email_text_input")]
pub struct EmailInput {
    /// Identifies the action in interaction payloads.
    pub action_id: String,
    /// Text shown while the input is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<TextObject>,
    /// Prefilled address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<String>,
    /// Whether the element receives focus when the view opens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_on_load: Option<bool>,
}

impl EmailInput {
    /// Creates an email input.
    #[must_use]
    pub fn new(action_id: impl Into<String>) -> Self {
        Self {
            action_id: action_id.into(),
            placeholder: None,
            initial_value: None,
            focus_on_load: None,
        }
    }
}

/// A `url_text_input` element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "url_text_input")]
pub struct UrlInput {
    /// Identifies the action in interaction payloads.
    pub action_id: String,
    /// Text shown while the input is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<TextObject>,
    /// Prefilled url.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<String>,
    /// Whether the element receives focus when the view opens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_on_load: Option<bool>,
}

impl UrlInput {
    /// Creates a url input.
    #[must_use]
    pub fn new(action_id: impl Into<String>) -> Self {
        Self {
            action_id: action_id.into(),
            placeholder: None,
            initial_value: None,
            focus_on_load: None,
        }
    }
}

/// A `number_input` element.
///
/// Numeric bounds travel as strings on the wire and are kept that way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "number_input")]
pub struct NumberInput {
    /// Identifies the action in interaction payloads.
    pub action_id: String,
    /// Whether decimals are accepted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_decimal_allowed: Option<bool>,
    /// Prefilled number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<String>,
    /// Lowest accepted number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_value: Option<String>,
    /// Highest accepted number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_value: Option<String>,
    /// Text shown while the input is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<TextObject>,
    /// Whether the element receives focus when the view opens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_on_load: Option<bool>,
}

impl NumberInput {
    /// Creates a number input.
    #[must_use]
    pub fn new(action_id: impl Into<String>) -> Self {
        Self {
            action_id: action_id.into(),
            is_decimal_allowed: None,
            initial_value: None,
            min_value: None,
            max_value: None,
            placeholder: None,
            focus_on_load: None,
        }
    }
}

/// A `plain_text_input` element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "plain_text_input")]
pub struct PlainTextInput {
    /// Identifies the action in interaction payloads.
    pub action_id: String,
    /// Text shown while the input is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<TextObject>,
    /// Prefilled text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<String>,
    /// Whether the input spans several lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiline: Option<bool>,
    /// Minimum accepted length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,
    /// Maximum accepted length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    /// Whether the element receives focus when the view opens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_on_load: Option<bool>,
}

impl PlainTextInput {
    /// Creates a single-line text input.
    #[must_use]
    pub fn new(action_id: impl Into<String>) -> Self {
        Self {
            action_id: action_id.into(),
            placeholder: None,
            initial_value: None,
            multiline: None,
            min_length: None,
            max_length: None,
            focus_on_load: None,
        }
    }

    /// Sets the `multiline` flag.
    #[must_use]
    pub const fn with_multiline(mut self, multiline: bool) -> Self {
        self.multiline = Some(multiline);
        self
    }
}

/// A `file_input` element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "file_input")]
pub struct FileInput {
    /// Identifies the action in interaction payloads.
    pub action_id: String,
    /// Accepted file extensions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filetypes: Option<Vec<String>>,
    /// Maximum number of uploaded files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_files: Option<u32>,
}

impl FileInput {
    /// Creates a file input.
    #[must_use]
    pub fn new(action_id: impl Into<String>) -> Self {
        Self {
            action_id: action_id.into(),
            filetypes: None,
            max_files: None,
        }
    }
}

/// A `rich_text_input` element.
///
/// `initial_value` is a rich-text document and is carried as opaque JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "rich_text_input")]
pub struct RichTextInput {
    /// Identifies the action in interaction payloads.
    pub action_id: String,
    /// Text shown while the input is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<TextObject>,
    /// Prefilled rich-text document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<Value>,
    /// Whether the element receives focus when the view opens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_on_load: Option<bool>,
}

impl RichTextInput {
    /// Creates a rich-text input.
    #[must_use]
    pub fn new(action_id: impl Into<String>) -> Self {
        Self {
            action_id: action_id.into(),
            placeholder: None,
            initial_value: None,
            focus_on_load: None,
        }
    }
}
