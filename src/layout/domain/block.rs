//! Layout blocks, the top-level units of a surface.
//!
//! Every block may carry a `block_id`. When absent, Slack generates one on
//! its side; this crate leaves it unset rather than inventing a value.

use super::{Element, PlainText, TextObject};
use serde::Serialize;
use serde_json::Value;

/// Any layout block.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Block {
    /// `section`
    Section(Section),
    /// `divider`
    Divider(Divider),
    /// `image`
    Image(ImageBlock),
    /// `actions`
    Actions(Actions),
    /// `context`
    Context(Context),
    /// `input`
    Input(Input),
    /// `file`
    File(File),
    /// `header`
    Header(Header),
    /// `video`
    Video(Video),
    /// `rich_text`
    RichText(RichText),
}

impl Block {
    /// Returns the wire discriminator of this block.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Section(_) => "section",
            Self::Divider(_) => "divider",
            Self::Image(_) => "image",
            Self::Actions(_) => "actions",
            Self::Context(_) => "context",
            Self::Input(_) => "input",
            Self::File(_) => "file",
            Self::Header(_) => "header",
            Self::Video(_) => "video",
            Self::RichText(_) => "rich_text",
        }
    }

    /// Returns the `block_id`, if one is set.
    #[must_use]
    pub fn block_id(&self) -> Option<&str> {
        let block_id = match self {
            Self::Section(b) => &b.block_id,
            Self::Divider(b) => &b.block_id,
            Self::Image(b) => &b.block_id,
            Self::Actions(b) => &b.block_id,
            Self::Context(b) => &b.block_id,
            Self::Input(b) => &b.block_id,
            Self::File(b) => &b.block_id,
            Self::Header(b) => &b.block_id,
            Self::Video(b) => &b.block_id,
            Self::RichText(b) => &b.block_id,
        };
        block_id.as_deref()
    }
}

macro_rules! impl_from_block {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Block {
                fn from(block: $ty) -> Self {
                    Self::$variant(block)
                }
            }
        )*
    };
}

impl_from_block!(
    Section(Section),
    Divider(Divider),
    Image(ImageBlock),
    Actions(Actions),
    Context(Context),
    Input(Input),
    File(File),
    Header(Header),
    Video(Video),
    RichText(RichText),
);

/// A `section` block: text, an optional two-column field grid and an
/// optional accessory element.
///
/// Slack expects at least one of `text` or `fields`; that is not enforced
/// here, so an empty section can be built and decoded.
///
/// # Examples
///
/// ```
/// use blocksmith::layout::domain::{Section, TextObject};
///
/// let section = Section::new()
///     .with_text(TextObject::mrkdwn("*Build passed*"))
///     .with_fields(vec![TextObject::plain("Branch"), TextObject::plain("main")]);
/// assert_eq!(section.fields.as_ref().map(Vec::len), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "type", rename = "section")]
pub struct Section {
    /// The main text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextObject>,
    /// Text rendered in a compact two-column grid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<TextObject>>,
    /// An element rendered beside the text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessory: Option<Element>,
    /// Whether long text is always shown in full.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expand: Option<bool>,
    /// Identifies the block in interaction payloads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
}

impl Section {
    /// Creates an empty section.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the main text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<TextObject>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Sets the field grid.
    #[must_use]
    pub fn with_fields(mut self, fields: Vec<TextObject>) -> Self {
        self.fields = Some(fields);
        self
    }

    /// Sets the accessory element.
    #[must_use]
    pub fn with_accessory(mut self, accessory: Element) -> Self {
        self.accessory = Some(accessory);
        self
    }

    /// Sets the block ID.
    #[must_use]
    pub fn with_block_id(mut self, block_id: impl Into<String>) -> Self {
        self.block_id = Some(block_id.into());
        self
    }
}

/// A `divider` block.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "type", rename = "divider")]
pub struct Divider {
    /// Identifies the block in interaction payloads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
}

impl Divider {
    /// Creates a divider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// An `image` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "image")]
pub struct ImageBlock {
    /// The image location.
    pub image_url: String,
    /// Text describing the image.
    pub alt_text: String,
    /// A caption shown above the image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<TextObject>,
    /// Identifies the block in interaction payloads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
}

impl ImageBlock {
    /// Creates an image block.
    #[must_use]
    pub fn new(image_url: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
            alt_text: alt_text.into(),
            title: None,
            block_id: None,
        }
    }

    /// Sets the caption.
    #[must_use]
    pub fn with_title(mut self, title: TextObject) -> Self {
        self.title = Some(title);
        self
    }
}

/// An `actions` block: a row of interactive elements.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "actions")]
pub struct Actions {
    /// The interactive elements.
    pub elements: Vec<Element>,
    /// Identifies the block in interaction payloads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
}

impl Actions {
    /// Creates an actions block.
    #[must_use]
    pub const fn new(elements: Vec<Element>) -> Self {
        Self {
            elements,
            block_id: None,
        }
    }
}

/// An entry in a [`Context`] block: either a text object or an element.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ContextElement {
    /// A text object.
    Text(TextObject),
    /// An element (typically an image).
    Element(Element),
}

impl From<TextObject> for ContextElement {
    fn from(text: TextObject) -> Self {
        Self::Text(text)
    }
}

impl From<Element> for ContextElement {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

/// A `context` block: small, muted text and images.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "context")]
pub struct Context {
    /// The entries, in render order.
    pub elements: Vec<ContextElement>,
    /// Identifies the block in interaction payloads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
}

impl Context {
    /// Creates a context block.
    #[must_use]
    pub const fn new(elements: Vec<ContextElement>) -> Self {
        Self {
            elements,
            block_id: None,
        }
    }
}

/// An `input` block: a labelled form field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "input")]
pub struct Input {
    /// The field label.
    pub label: TextObject,
    /// The input element.
    pub element: Element,
    /// Helper text shown beneath the element.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<TextObject>,
    /// Whether the field may be left empty on submission.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optional: Option<bool>,
    /// Whether the element dispatches block actions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dispatch_action: Option<bool>,
    /// Identifies the block in interaction payloads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
}

impl Input {
    /// Creates an input block.
    #[must_use]
    pub const fn new(label: TextObject, element: Element) -> Self {
        Self {
            label,
            element,
            hint: None,
            optional: None,
            dispatch_action: None,
            block_id: None,
        }
    }

    /// Sets the hint.
    #[must_use]
    pub fn with_hint(mut self, hint: TextObject) -> Self {
        self.hint = Some(hint);
        self
    }

    /// Sets the `optional` flag.
    #[must_use]
    pub const fn with_optional(mut self, optional: bool) -> Self {
        self.optional = Some(optional);
        self
    }
}

/// A `file` block referencing a remote file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "file")]
pub struct File {
    /// The external ID the file was registered with.
    pub external_id: String,
    /// Where the file lives; Slack only accepts `remote`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Identifies the block in interaction payloads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
}

impl File {
    /// Creates a file block.
    #[must_use]
    pub fn new(external_id: impl Into<String>) -> Self {
        Self {
            external_id: external_id.into(),
            source: None,
            block_id: None,
        }
    }
}

/// A `header` block. Its text is always `plain_text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "header")]
pub struct Header {
    /// The heading text.
    pub text: PlainText,
    /// Identifies the block in interaction payloads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
}

impl Header {
    /// Creates a header block.
    #[must_use]
    pub const fn new(text: PlainText) -> Self {
        Self {
            text,
            block_id: None,
        }
    }

    /// Sets the block ID.
    #[must_use]
    pub fn with_block_id(mut self, block_id: impl Into<String>) -> Self {
        self.block_id = Some(block_id.into());
        self
    }
}

/// A `video` block embedding an externally hosted player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "video")]
pub struct Video {
    /// The video title.
    pub title: TextObject,
    /// The embeddable player url.
    pub video_url: String,
    /// A link opened from the title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_url: Option<String>,
    /// A description shown beneath the title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<TextObject>,
    /// The preview image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    /// Text describing the preview image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
    /// The author's display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    /// The hosting provider's name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_name: Option<String>,
    /// The hosting provider's icon.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_icon_url: Option<String>,
    /// Identifies the block in interaction payloads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
}

impl Video {
    /// Creates a video block with only the required fields.
    #[must_use]
    pub fn new(title: TextObject, video_url: impl Into<String>) -> Self {
        Self {
            title,
            video_url: video_url.into(),
            title_url: None,
            description: None,
            thumbnail_url: None,
            alt_text: None,
            author_name: None,
            provider_name: None,
            provider_icon_url: None,
            block_id: None,
        }
    }
}

/// A `rich_text` block.
///
/// The rich-text element tree is carried verbatim as opaque JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "rich_text")]
pub struct RichText {
    /// The rich-text sections, untouched.
    pub elements: Vec<Value>,
    /// Identifies the block in interaction payloads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
}

impl RichText {
    /// Creates a rich-text block.
    #[must_use]
    pub const fn new(elements: Vec<Value>) -> Self {
        Self {
            elements,
            block_id: None,
        }
    }
}
