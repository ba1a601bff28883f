//! Element decoding: a dispatch table from the `type` discriminator to one
//! decode routine per element kind.
//!
//! Each routine enforces exactly the required fields of its kind and
//! recurses into the text object and option decoders for nested values.
//! Adding a kind means adding a routine and a table row.

use super::fields::{Fields, object};
use crate::layout::{
    domain::{
        Button, ButtonStyle, ChannelsSelect, Checkboxes, ConversationsSelect, DatePicker,
        DatetimePicker, Element, EmailInput, ExternalSelect, FileInput, ImageElement,
        MultiChannelsSelect, MultiConversationsSelect, MultiExternalSelect, MultiStaticSelect,
        MultiUsersSelect, NumberInput, OverflowMenu, PlainTextInput, RadioButtons, RichTextInput,
        StaticSelect, TimePicker, UrlInput, UsersSelect,
    },
    error::{KindPosition, LayoutError},
};
use serde_json::Value;

type ElementDecoder = fn(&Fields<'_>) -> Result<Element, LayoutError>;

/// Every supported element kind and its decode routine.
const ELEMENT_DECODERS: &[(&str, ElementDecoder)] = &[
    ("button", decode_button),
    ("checkboxes", decode_checkboxes),
    ("datepicker", decode_date_picker),
    ("timepicker", decode_time_picker),
    ("datetimepicker", decode_datetime_picker),
    ("email_text_input", decode_email_input),
    ("number_input", decode_number_input),
    ("plain_text_input", decode_plain_text_input),
    ("url_text_input", decode_url_input),
    ("radio_buttons", decode_radio_buttons),
    ("static_select", decode_static_select),
    ("external_select", decode_external_select),
    ("users_select", decode_users_select),
    ("conversations_select", decode_conversations_select),
    ("channels_select", decode_channels_select),
    ("multi_static_select", decode_multi_static_select),
    ("multi_external_select", decode_multi_external_select),
    ("multi_users_select", decode_multi_users_select),
    ("multi_conversations_select", decode_multi_conversations_select),
    ("multi_channels_select", decode_multi_channels_select),
    ("overflow", decode_overflow),
    ("file_input", decode_file_input),
    ("rich_text_input", decode_rich_text_input),
    ("image", decode_image),
];

/// Returns every element discriminator the decoder accepts.
#[must_use]
pub fn element_kinds() -> impl Iterator<Item = &'static str> {
    ELEMENT_DECODERS.iter().map(|(kind, _)| *kind)
}

/// Decodes an element found at `path`.
pub(crate) fn decode_element_at(value: &Value, path: &str) -> Result<Element, LayoutError> {
    let map = object(value, path)?;
    let kind = Fields::new(map, path, "element").required_str("type")?;
    let decoder = ELEMENT_DECODERS
        .iter()
        .find(|(candidate, _)| *candidate == kind)
        .map(|(_, decoder)| *decoder)
        .ok_or_else(|| LayoutError::unsupported(KindPosition::Element, kind.as_str()))?;
    decoder(&Fields::new(map, path, format!("{kind} element")))
}

fn decode_button(f: &Fields<'_>) -> Result<Element, LayoutError> {
    Ok(Element::Button(Button {
        text: f.required_text("text")?,
        action_id: f.required_str("action_id")?,
        url: f.optional_str("url")?,
        value: f.optional_str("value")?,
        style: f.optional_enum("style", ButtonStyle::parse, ButtonStyle::ACCEPTED)?,
        accessibility_label: f.optional_str("accessibility_label")?,
    }))
}

fn decode_checkboxes(f: &Fields<'_>) -> Result<Element, LayoutError> {
    Ok(Element::Checkboxes(Checkboxes {
        action_id: f.required_str("action_id")?,
        options: f.optional_options("options")?,
        initial_options: f.optional_options("initial_options")?,
        focus_on_load: f.optional_bool("focus_on_load")?,
    }))
}

fn decode_radio_buttons(f: &Fields<'_>) -> Result<Element, LayoutError> {
    Ok(Element::RadioButtons(RadioButtons {
        action_id: f.required_str("action_id")?,
        options: f.optional_options("options")?,
        initial_option: f.optional_option("initial_option")?,
        focus_on_load: f.optional_bool("focus_on_load")?,
    }))
}

fn decode_overflow(f: &Fields<'_>) -> Result<Element, LayoutError> {
    Ok(Element::Overflow(OverflowMenu {
        action_id: f.required_str("action_id")?,
        options: f.optional_options("options")?,
    }))
}

fn decode_image(f: &Fields<'_>) -> Result<Element, LayoutError> {
    Ok(Element::Image(ImageElement {
        image_url: f.required_str("image_url")?,
        alt_text: f.required_str("alt_text")?,
    }))
}

fn decode_date_picker(f: &Fields<'_>) -> Result<Element, LayoutError> {
    Ok(Element::DatePicker(DatePicker {
        action_id: f.required_str("action_id")?,
        placeholder: f.optional_text("placeholder")?,
        initial_date: f.optional_str("initial_date")?,
        focus_on_load: f.optional_bool("focus_on_load")?,
    }))
}

fn decode_time_picker(f: &Fields<'_>) -> Result<Element, LayoutError> {
    Ok(Element::TimePicker(TimePicker {
        action_id: f.required_str("action_id")?,
        placeholder: f.optional_text("placeholder")?,
        initial_time: f.optional_str("initial_time")?,
        timezone: f.optional_str("timezone")?,
        focus_on_load: f.optional_bool("focus_on_load")?,
    }))
}

fn decode_datetime_picker(f: &Fields<'_>) -> Result<Element, LayoutError> {
    Ok(Element::DatetimePicker(DatetimePicker {
        action_id: f.required_str("action_id")?,
        initial_date_time: f.optional_i64("initial_date_time")?,
        focus_on_load: f.optional_bool("focus_on_load")?,
    }))
}

fn decode_email_input(f: &Fields<'_>) -> Result<Element, LayoutError> {
    Ok(Element::EmailInput(EmailInput {
        action_id: f.required_str("action_id")?,
        placeholder: f.optional_text("placeholder")?,
        initial_value: f.optional_str("initial_value")?,
        focus_on_load: f.optional_bool("focus_on_load")?,
    }))
}

fn decode_url_input(f: &Fields<'_>) -> Result<Element, LayoutError> {
    Ok(Element::UrlInput(UrlInput {
        action_id: f.required_str("action_id")?,
        placeholder: f.optional_text("placeholder")?,
        initial_value: f.optional_str("initial_value")?,
        focus_on_load: f.optional_bool("focus_on_load")?,
    }))
}

fn decode_number_input(f: &Fields<'_>) -> Result<Element, LayoutError> {
    Ok(Element::NumberInput(NumberInput {
        action_id: f.required_str("action_id")?,
        is_decimal_allowed: f.optional_bool("is_decimal_allowed")?,
        initial_value: f.optional_str("initial_value")?,
        min_value: f.optional_str("min_value")?,
        max_value: f.optional_str("max_value")?,
        placeholder: f.optional_text("placeholder")?,
        focus_on_load: f.optional_bool("focus_on_load")?,
    }))
}

fn decode_plain_text_input(f: &Fields<'_>) -> Result<Element, LayoutError> {
    Ok(Element::PlainTextInput(PlainTextInput {
        action_id: f.required_str("action_id")?,
        placeholder: f.optional_text("placeholder")?,
        initial_value: f.optional_str("initial_value")?,
        multiline: f.optional_bool("multiline")?,
        min_length: f.optional_u32("min_length")?,
        max_length: f.optional_u32("max_length")?,
        focus_on_load: f.optional_bool("focus_on_load")?,
    }))
}

fn decode_file_input(f: &Fields<'_>) -> Result<Element, LayoutError> {
    Ok(Element::FileInput(FileInput {
        action_id: f.required_str("action_id")?,
        filetypes: f.optional_strings("filetypes")?,
        max_files: f.optional_u32("max_files")?,
    }))
}

fn decode_rich_text_input(f: &Fields<'_>) -> Result<Element, LayoutError> {
    Ok(Element::RichTextInput(RichTextInput {
        action_id: f.required_str("action_id")?,
        placeholder: f.optional_text("placeholder")?,
        initial_value: f.optional_value("initial_value"),
        focus_on_load: f.optional_bool("focus_on_load")?,
    }))
}

fn decode_static_select(f: &Fields<'_>) -> Result<Element, LayoutError> {
    Ok(Element::StaticSelect(StaticSelect {
        action_id: f.required_str("action_id")?,
        placeholder: f.required_text("placeholder")?,
        options: f.optional_options("options")?,
        option_groups: f.optional_option_groups("option_groups")?,
        initial_option: f.optional_option("initial_option")?,
        focus_on_load: f.optional_bool("focus_on_load")?,
    }))
}

fn decode_multi_static_select(f: &Fields<'_>) -> Result<Element, LayoutError> {
    Ok(Element::MultiStaticSelect(MultiStaticSelect {
        action_id: f.required_str("action_id")?,
        placeholder: f.required_text("placeholder")?,
        options: f.optional_options("options")?,
        option_groups: f.optional_option_groups("option_groups")?,
        initial_options: f.optional_options("initial_options")?,
        max_selected_items: f.optional_u32("max_selected_items")?,
        focus_on_load: f.optional_bool("focus_on_load")?,
    }))
}

fn decode_external_select(f: &Fields<'_>) -> Result<Element, LayoutError> {
    Ok(Element::ExternalSelect(ExternalSelect {
        action_id: f.required_str("action_id")?,
        placeholder: f.required_text("placeholder")?,
        initial_option: f.optional_option("initial_option")?,
        min_query_length: f.optional_u32("min_query_length")?,
        focus_on_load: f.optional_bool("focus_on_load")?,
    }))
}

fn decode_multi_external_select(f: &Fields<'_>) -> Result<Element, LayoutError> {
    Ok(Element::MultiExternalSelect(MultiExternalSelect {
        action_id: f.required_str("action_id")?,
        placeholder: f.required_text("placeholder")?,
        initial_options: f.optional_options("initial_options")?,
        min_query_length: f.optional_u32("min_query_length")?,
        max_selected_items: f.optional_u32("max_selected_items")?,
        focus_on_load: f.optional_bool("focus_on_load")?,
    }))
}

fn decode_users_select(f: &Fields<'_>) -> Result<Element, LayoutError> {
    Ok(Element::UsersSelect(UsersSelect {
        action_id: f.required_str("action_id")?,
        placeholder: f.required_text("placeholder")?,
        initial_user: f.optional_str("initial_user")?,
        focus_on_load: f.optional_bool("focus_on_load")?,
    }))
}

fn decode_multi_users_select(f: &Fields<'_>) -> Result<Element, LayoutError> {
    Ok(Element::MultiUsersSelect(MultiUsersSelect {
        action_id: f.required_str("action_id")?,
        placeholder: f.required_text("placeholder")?,
        initial_users: f.optional_strings("initial_users")?,
        max_selected_items: f.optional_u32("max_selected_items")?,
        focus_on_load: f.optional_bool("focus_on_load")?,
    }))
}

fn decode_conversations_select(f: &Fields<'_>) -> Result<Element, LayoutError> {
    Ok(Element::ConversationsSelect(ConversationsSelect {
        action_id: f.required_str("action_id")?,
        placeholder: f.required_text("placeholder")?,
        initial_conversation: f.optional_str("initial_conversation")?,
        default_to_current_conversation: f.optional_bool("default_to_current_conversation")?,
        focus_on_load: f.optional_bool("focus_on_load")?,
    }))
}

fn decode_multi_conversations_select(f: &Fields<'_>) -> Result<Element, LayoutError> {
    Ok(Element::MultiConversationsSelect(MultiConversationsSelect {
        action_id: f.required_str("action_id")?,
        placeholder: f.required_text("placeholder")?,
        initial_conversations: f.optional_strings("initial_conversations")?,
        default_to_current_conversation: f.optional_bool("default_to_current_conversation")?,
        max_selected_items: f.optional_u32("max_selected_items")?,
        focus_on_load: f.optional_bool("focus_on_load")?,
    }))
}

fn decode_channels_select(f: &Fields<'_>) -> Result<Element, LayoutError> {
    Ok(Element::ChannelsSelect(ChannelsSelect {
        action_id: f.required_str("action_id")?,
        placeholder: f.required_text("placeholder")?,
        initial_channel: f.optional_str("initial_channel")?,
        focus_on_load: f.optional_bool("focus_on_load")?,
    }))
}

fn decode_multi_channels_select(f: &Fields<'_>) -> Result<Element, LayoutError> {
    Ok(Element::MultiChannelsSelect(MultiChannelsSelect {
        action_id: f.required_str("action_id")?,
        placeholder: f.required_text("placeholder")?,
        initial_channels: f.optional_strings("initial_channels")?,
        max_selected_items: f.optional_u32("max_selected_items")?,
        focus_on_load: f.optional_bool("focus_on_load")?,
    }))
}
