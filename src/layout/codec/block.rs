//! Block decoding, dispatched on the `type` discriminator like elements.

use super::{
    element::decode_element_at,
    fields::{Fields, object},
    text::{decode_text_at, is_text_kind},
};
use crate::layout::{
    domain::{
        Actions, Block, Context, ContextElement, Divider, Element, File, Header, ImageBlock, Input,
        RichText, Section, Video,
    },
    error::{KindPosition, LayoutError},
};
use serde_json::Value;

type BlockDecoder = fn(&Fields<'_>) -> Result<Block, LayoutError>;

/// Every supported block kind and its decode routine.
const BLOCK_DECODERS: &[(&str, BlockDecoder)] = &[
    ("section", decode_section),
    ("divider", decode_divider),
    ("image", decode_image),
    ("actions", decode_actions),
    ("context", decode_context),
    ("input", decode_input),
    ("file", decode_file),
    ("header", decode_header),
    ("video", decode_video),
    ("rich_text", decode_rich_text),
];

/// Returns every block discriminator the decoder accepts.
#[must_use]
pub fn block_kinds() -> impl Iterator<Item = &'static str> {
    BLOCK_DECODERS.iter().map(|(kind, _)| *kind)
}

/// Decodes a block found at `path`.
pub(crate) fn decode_block_at(value: &Value, path: &str) -> Result<Block, LayoutError> {
    let map = object(value, path)?;
    let kind = Fields::new(map, path, "block").required_str("type")?;
    let decoder = BLOCK_DECODERS
        .iter()
        .find(|(candidate, _)| *candidate == kind)
        .map(|(_, decoder)| *decoder)
        .ok_or_else(|| LayoutError::unsupported(KindPosition::Block, kind.as_str()))?;
    decoder(&Fields::new(map, path, format!("{kind} block")))
}

/// Decodes a list of blocks, stopping at the first failure.
pub(crate) fn decode_blocks_at(items: &[Value], path: &str) -> Result<Vec<Block>, LayoutError> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| decode_block_at(item, &format!("{path}[{index}]")))
        .collect()
}

fn decode_section(f: &Fields<'_>) -> Result<Block, LayoutError> {
    Ok(Block::Section(Section {
        text: f.optional_text("text")?,
        fields: f.optional_texts("fields")?,
        accessory: f.optional_element("accessory")?,
        expand: f.optional_bool("expand")?,
        block_id: f.optional_str("block_id")?,
    }))
}

fn decode_divider(f: &Fields<'_>) -> Result<Block, LayoutError> {
    Ok(Block::Divider(Divider {
        block_id: f.optional_str("block_id")?,
    }))
}

fn decode_image(f: &Fields<'_>) -> Result<Block, LayoutError> {
    Ok(Block::Image(ImageBlock {
        image_url: f.required_str("image_url")?,
        alt_text: f.required_str("alt_text")?,
        title: f.optional_text("title")?,
        block_id: f.optional_str("block_id")?,
    }))
}

fn decode_actions(f: &Fields<'_>) -> Result<Block, LayoutError> {
    let location = f.at("elements");
    let elements = f
        .required_array("elements")?
        .iter()
        .enumerate()
        .map(|(index, item)| decode_element_at(item, &format!("{location}[{index}]")))
        .collect::<Result<Vec<Element>, _>>()?;
    Ok(Block::Actions(Actions {
        elements,
        block_id: f.optional_str("block_id")?,
    }))
}

/// Context entries are text objects or elements; the entry's own `type`
/// decides which.
fn decode_context(f: &Fields<'_>) -> Result<Block, LayoutError> {
    let location = f.at("elements");
    let elements = f
        .required_array("elements")?
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let path = format!("{location}[{index}]");
            let kind = object(item, &path)?.get("type").and_then(Value::as_str);
            if kind.is_some_and(is_text_kind) {
                decode_text_at(item, &path).map(ContextElement::Text)
            } else {
                decode_element_at(item, &path).map(ContextElement::Element)
            }
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Block::Context(Context {
        elements,
        block_id: f.optional_str("block_id")?,
    }))
}

fn decode_input(f: &Fields<'_>) -> Result<Block, LayoutError> {
    Ok(Block::Input(Input {
        label: f.required_text("label")?,
        element: f.required_element("element")?,
        hint: f.optional_text("hint")?,
        optional: f.optional_bool("optional")?,
        dispatch_action: f.optional_bool("dispatch_action")?,
        block_id: f.optional_str("block_id")?,
    }))
}

fn decode_file(f: &Fields<'_>) -> Result<Block, LayoutError> {
    Ok(Block::File(File {
        external_id: f.required_str("external_id")?,
        source: f.optional_str("source")?,
        block_id: f.optional_str("block_id")?,
    }))
}

fn decode_header(f: &Fields<'_>) -> Result<Block, LayoutError> {
    Ok(Block::Header(Header {
        text: f.required_plain_text("text")?,
        block_id: f.optional_str("block_id")?,
    }))
}

fn decode_video(f: &Fields<'_>) -> Result<Block, LayoutError> {
    Ok(Block::Video(Video {
        title: f.required_text("title")?,
        video_url: f.required_str("video_url")?,
        title_url: f.optional_str("title_url")?,
        description: f.optional_text("description")?,
        thumbnail_url: f.optional_str("thumbnail_url")?,
        alt_text: f.optional_str("alt_text")?,
        author_name: f.optional_str("author_name")?,
        provider_name: f.optional_str("provider_name")?,
        provider_icon_url: f.optional_str("provider_icon_url")?,
        block_id: f.optional_str("block_id")?,
    }))
}

/// Rich text content is carried verbatim; only the outer shape is checked.
fn decode_rich_text(f: &Fields<'_>) -> Result<Block, LayoutError> {
    Ok(Block::RichText(RichText {
        elements: f.required_array("elements")?.to_vec(),
        block_id: f.optional_str("block_id")?,
    }))
}
