//! Unit tests for element decoding: per-kind required fields and dispatch.

use crate::layout::{
    codec::{decode_element, element_kinds},
    domain::{ButtonStyle, Element, OptionObject, TextObject},
    error::{KindPosition, LayoutError},
};
use rstest::rstest;
use serde_json::{Value, json};

fn placeholder() -> Value {
    json!({"type": "plain_text", "text": "Choose"})
}

// ============================================================================
// Dispatch
// ============================================================================

#[rstest]
#[case(json!({"type": "button", "text": {"type": "plain_text", "text": "Go"}, "action_id": "a"}))]
#[case(json!({"type": "checkboxes", "action_id": "a"}))]
#[case(json!({"type": "datepicker", "action_id": "a"}))]
#[case(json!({"type": "timepicker", "action_id": "a"}))]
#[case(json!({"type": "datetimepicker", "action_id": "a"}))]
#[case(json!({"type": "email_text_input", "action_id": "a"}))]
#[case(json!({"type": "number_input", "action_id": "a", "is_decimal_allowed": false}))]
#[case(json!({"type": "plain_text_input", "action_id": "a"}))]
#[case(json!({"type": "url_text_input", "action_id": "a"}))]
#[case(json!({"type": "radio_buttons", "action_id": "a"}))]
#[case(json!({"type": "static_select", "action_id": "a", "placeholder": placeholder()}))]
#[case(json!({"type": "external_select", "action_id": "a", "placeholder": placeholder()}))]
#[case(json!({"type": "users_select", "action_id": "a", "placeholder": placeholder()}))]
#[case(json!({"type": "conversations_select", "action_id": "a", "placeholder": placeholder()}))]
#[case(json!({"type": "channels_select", "action_id": "a", "placeholder": placeholder()}))]
#[case(json!({"type": "multi_static_select", "action_id": "a", "placeholder": placeholder()}))]
#[case(json!({"type": "multi_external_select", "action_id": "a", "placeholder": placeholder()}))]
#[case(json!({"type": "multi_users_select", "action_id": "a", "placeholder": placeholder()}))]
#[case(json!({"type": "multi_conversations_select", "action_id": "a", "placeholder": placeholder()}))]
#[case(json!({"type": "multi_channels_select", "action_id": "a", "placeholder": placeholder()}))]
#[case(json!({"type": "overflow", "action_id": "a"}))]
#[case(json!({"type": "file_input", "action_id": "a"}))]
#[case(json!({"type": "rich_text_input", "action_id": "a"}))]
#[case(json!({"type": "image", "image_url": "https://example.com/x.png", "alt_text": "x"}))]
fn every_kind_decodes_from_its_minimal_payload(#[case] payload: Value) {
    let element = decode_element(&payload).expect("minimal element");
    assert_eq!(Some(element.kind()), payload["type"].as_str());
    let encoded = serde_json::to_value(&element).expect("encodes");
    assert_eq!(encoded, payload);
}

#[rstest]
fn dispatch_table_covers_twenty_four_kinds() {
    assert_eq!(element_kinds().count(), 24);
}

#[rstest]
fn unknown_element_kind_is_unsupported() {
    let err = decode_element(&json!({"type": "carousel", "action_id": "a"})).expect_err("kind");
    assert_eq!(err, LayoutError::unsupported(KindPosition::Element, "carousel"));
}

#[rstest]
fn element_without_type_is_missing_field() {
    let err = decode_element(&json!({"action_id": "a"})).expect_err("no type");
    assert_eq!(err, LayoutError::missing("element", "type"));
}

// ============================================================================
// Required fields
// ============================================================================

#[rstest]
#[case(json!({"type": "button", "action_id": "a"}), "button element", "text")]
#[case(
    json!({"type": "button", "text": {"type": "plain_text", "text": "Go"}}),
    "button element",
    "action_id"
)]
#[case(
    json!({"type": "button", "text": {"type": "plain_text", "text": "Go"}, "action_id": ""}),
    "button element",
    "action_id"
)]
#[case(json!({"type": "static_select", "action_id": "a"}), "static_select element", "placeholder")]
#[case(
    json!({"type": "users_select", "placeholder": {"type": "plain_text", "text": "Who"}}),
    "users_select element",
    "action_id"
)]
#[case(json!({"type": "image", "alt_text": "x"}), "image element", "image_url")]
#[case(json!({"type": "image", "image_url": "u", "alt_text": null}), "image element", "alt_text")]
#[case(json!({"type": "datepicker"}), "datepicker element", "action_id")]
fn missing_required_field_names_field_and_kind(
    #[case] payload: Value,
    #[case] kind: &str,
    #[case] field: &'static str,
) {
    let err = decode_element(&payload).expect_err("missing field");
    assert_eq!(err, LayoutError::missing(kind, field));
}

#[rstest]
fn option_without_value_is_missing_field() {
    let payload = json!({
        "type": "overflow",
        "action_id": "a",
        "options": [{"text": {"type": "plain_text", "text": "One"}}]
    });
    let err = decode_element(&payload).expect_err("option value");
    assert_eq!(err, LayoutError::missing("option", "value"));
}

#[rstest]
fn nested_text_errors_carry_their_path() {
    let payload = json!({
        "type": "static_select",
        "action_id": "a",
        "placeholder": placeholder(),
        "options": [
            {"text": {"type": "plain_text", "text": "One"}, "value": "1"},
            {"text": {"type": "rich", "text": "Two"}, "value": "2"}
        ]
    });
    let err = decode_element(&payload).expect_err("bad text kind");
    assert_eq!(err, LayoutError::unsupported(KindPosition::TextObject, "rich"));
}

// ============================================================================
// Optional fields
// ============================================================================

#[rstest]
fn button_decodes_optional_fields() {
    let payload = json!({
        "type": "button",
        "text": {"type": "plain_text", "text": "Delete", "emoji": false},
        "action_id": "delete",
        "url": "https://example.com",
        "value": "7",
        "style": "danger",
        "accessibility_label": "Delete item 7"
    });
    let Element::Button(button) = decode_element(&payload).expect("button") else {
        panic!("expected a button");
    };
    assert_eq!(button.style, Some(ButtonStyle::Danger));
    assert_eq!(button.value.as_deref(), Some("7"));
    assert_eq!(button.url.as_deref(), Some("https://example.com"));
    assert_eq!(
        button.text.as_plain().and_then(|text| text.emoji),
        Some(false)
    );
}

#[rstest]
fn unknown_button_style_is_invalid_value() {
    let payload = json!({
        "type": "button",
        "text": {"type": "plain_text", "text": "Go"},
        "action_id": "go",
        "style": "secondary"
    });
    let err = decode_element(&payload).expect_err("closed set");
    assert_eq!(
        err,
        LayoutError::InvalidValue {
            location: "element.style".into(),
            value: "secondary".into(),
            expected: ButtonStyle::ACCEPTED,
        }
    );
}

#[rstest]
fn select_placeholder_may_be_mrkdwn() {
    let payload = json!({
        "type": "users_select",
        "action_id": "who",
        "placeholder": {"type": "mrkdwn", "text": "_anyone_"}
    });
    let element = decode_element(&payload).expect("mrkdwn placeholder");
    assert_eq!(element.placeholder(), Some(&TextObject::mrkdwn("_anyone_")));
}

#[rstest]
fn option_groups_require_plain_text_labels() {
    let payload = json!({
        "type": "static_select",
        "action_id": "a",
        "placeholder": placeholder(),
        "option_groups": [{"label": {"type": "mrkdwn", "text": "*A*"}, "options": []}]
    });
    let err = decode_element(&payload).expect_err("mrkdwn label");
    assert_eq!(
        err,
        LayoutError::InvalidKind {
            location: "element.option_groups[0].label".into(),
            expected: "plain_text",
            actual: "mrkdwn".into(),
        }
    );
}

#[rstest]
fn checkbox_initial_options_decode() {
    let option = json!({"text": {"type": "mrkdwn", "text": "*On*"}, "value": "on"});
    let payload = json!({
        "type": "checkboxes",
        "action_id": "flags",
        "options": [option.clone()],
        "initial_options": [option]
    });
    let Element::Checkboxes(checkboxes) = decode_element(&payload).expect("checkboxes") else {
        panic!("expected checkboxes");
    };
    let expected = OptionObject::new(TextObject::mrkdwn("*On*"), "on");
    assert_eq!(checkboxes.options, Some(vec![expected.clone()]));
    assert_eq!(checkboxes.initial_options, Some(vec![expected]));
}

#[rstest]
#[case(json!({"type": "plain_text_input", "action_id": "a", "max_length": -1}), "element.max_length")]
#[case(json!({"type": "file_input", "action_id": "a", "filetypes": ["pdf", 3]}), "element.filetypes[1]")]
#[case(json!({"type": "datetimepicker", "action_id": "a", "initial_date_time": "soon"}), "element.initial_date_time")]
fn mistyped_optional_fields_report_their_path(#[case] payload: Value, #[case] location: &str) {
    let err = decode_element(&payload).expect_err("mistyped field");
    assert!(
        matches!(&err, LayoutError::InvalidShape { location: found, .. } if found == location),
        "unexpected error: {err:?}"
    );
}

#[rstest]
fn rich_text_input_initial_value_is_opaque() {
    let initial = json!({"type": "rich_text", "elements": [{"type": "anything", "x": [1, 2]}]});
    let payload = json!({"type": "rich_text_input", "action_id": "a", "initial_value": initial});
    let Element::RichTextInput(input) = decode_element(&payload).expect("rich text input") else {
        panic!("expected rich text input");
    };
    assert_eq!(input.initial_value, Some(initial));
}
