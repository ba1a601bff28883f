//! Text composition objects.
//!
//! Slack renders two kinds of text: `plain_text`, which may expand emoji
//! shortcodes, and `mrkdwn`, which applies lightweight formatting. Both wrap
//! a string plus one optional kind-specific flag.

use serde::Serialize;

/// A text object embedded in a block or element.
///
/// # Serialisation
///
/// Each variant carries its own `type` tag:
///
/// ```json
/// { "type": "plain_text", "text": "Hello", "emoji": true }
/// { "type": "mrkdwn", "text": "*Hello*" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TextObject {
    /// Unformatted text.
    PlainText(PlainText),
    /// Markdown-formatted text.
    Mrkdwn(MrkdwnText),
}

impl TextObject {
    /// Creates a plain text object with no `emoji` flag.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::PlainText(PlainText::new(text))
    }

    /// Creates a mrkdwn text object with no `verbatim` flag.
    #[must_use]
    pub fn mrkdwn(text: impl Into<String>) -> Self {
        Self::Mrkdwn(MrkdwnText::new(text))
    }

    /// Returns the wrapped string.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::PlainText(plain) => &plain.text,
            Self::Mrkdwn(mrkdwn) => &mrkdwn.text,
        }
    }

    /// Returns the wire discriminator of this text object.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::PlainText(_) => PlainText::KIND,
            Self::Mrkdwn(_) => MrkdwnText::KIND,
        }
    }

    /// Returns the plain text variant, if this is one.
    #[must_use]
    pub const fn as_plain(&self) -> Option<&PlainText> {
        match self {
            Self::PlainText(plain) => Some(plain),
            Self::Mrkdwn(_) => None,
        }
    }

    /// Returns the length of the wrapped string in characters.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.text().chars().count()
    }
}

impl From<PlainText> for TextObject {
    fn from(plain: PlainText) -> Self {
        Self::PlainText(plain)
    }
}

impl From<MrkdwnText> for TextObject {
    fn from(mrkdwn: MrkdwnText) -> Self {
        Self::Mrkdwn(mrkdwn)
    }
}

/// A `plain_text` object.
///
/// `emoji` is three-state: unset is distinct from `false` and is omitted
/// when encoding.
///
/// # Examples
///
/// ```
/// use blocksmith::layout::domain::PlainText;
///
/// let text = PlainText::new("Deploy").with_emoji(true);
/// assert_eq!(text.emoji, Some(true));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "plain_text")]
pub struct PlainText {
    /// The text content.
    pub text: String,
    /// Whether emoji shortcodes are rendered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<bool>,
}

impl PlainText {
    /// The wire discriminator.
    pub const KIND: &'static str = "plain_text";

    /// Creates a plain text object with `emoji` unset.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emoji: None,
        }
    }

    /// Sets the `emoji` flag.
    #[must_use]
    pub const fn with_emoji(mut self, emoji: bool) -> Self {
        self.emoji = Some(emoji);
        self
    }
}

/// A `mrkdwn` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "mrkdwn")]
pub struct MrkdwnText {
    /// The text content.
    pub text: String,
    /// Whether links and mentions are left unprocessed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verbatim: Option<bool>,
}

impl MrkdwnText {
    /// The wire discriminator.
    pub const KIND: &'static str = "mrkdwn";

    /// Creates a mrkdwn object with `verbatim` unset.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            verbatim: None,
        }
    }

    /// Sets the `verbatim` flag.
    #[must_use]
    pub const fn with_verbatim(mut self, verbatim: bool) -> Self {
        self.verbatim = Some(verbatim);
        self
    }
}
