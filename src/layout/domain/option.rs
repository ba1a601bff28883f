//! Option and option group composition objects used by menus and choice
//! elements.

use super::{PlainText, TextObject};
use serde::Serialize;

/// A selectable entry in a select menu, overflow menu, radio group or
/// checkbox group.
///
/// Named `OptionObject` so it does not shadow [`Option`].
///
/// # Examples
///
/// ```
/// use blocksmith::layout::domain::{OptionObject, TextObject};
///
/// let option = OptionObject::new(TextObject::plain("Staging"), "staging")
///     .with_description(TextObject::plain("Pre-production"));
/// assert_eq!(option.value, "staging");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionObject {
    /// The label shown for this option.
    pub text: TextObject,
    /// The value sent back in interaction payloads.
    pub value: String,
    /// Secondary text shown beneath the label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<TextObject>,
    /// A link opened when the option is chosen (overflow menus only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl OptionObject {
    /// Creates an option with no description or url.
    #[must_use]
    pub fn new(text: TextObject, value: impl Into<String>) -> Self {
        Self {
            text,
            value: value.into(),
            description: None,
            url: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: TextObject) -> Self {
        self.description = Some(description);
        self
    }

    /// Sets the url.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// A labelled group of options inside a static select menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionGroup {
    /// The group heading.
    pub label: PlainText,
    /// The options within the group.
    pub options: Vec<OptionObject>,
}

impl OptionGroup {
    /// Creates an option group.
    #[must_use]
    pub fn new(label: PlainText, options: Vec<OptionObject>) -> Self {
        Self { label, options }
    }
}
