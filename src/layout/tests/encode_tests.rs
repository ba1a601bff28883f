//! Unit tests for encoding, block ceilings and serde integration.

use super::fixtures::{complex_payload, message_with_dividers};
use crate::layout::{
    constraints::LayoutConstraints,
    domain::{
        Actions, Block, Button, ButtonStyle, Divider, Element, Header, HomeTab, Message, Modal,
        PlainText, Section, Surface, SurfaceKind, TextObject,
    },
    error::LayoutError,
};
use rstest::rstest;
use serde_json::{Value, json};

// ============================================================================
// Round trip and omission
// ============================================================================

#[rstest]
fn decoded_payload_encodes_to_itself(complex_payload: Value) {
    let message = Message::from_payload(&complex_payload).expect("complex payload");
    assert_eq!(message.build().expect("builds"), complex_payload);
}

#[rstest]
fn explicit_message_type_survives_round_trip() {
    let payload = json!({"type": "message", "blocks": []});

    let message = Message::from_payload(&payload).expect("typed message");
    assert!(message.has_type_tag());
    assert_eq!(message.build().expect("builds"), payload);

    let surface = Surface::from_payload(&payload).expect("typed surface");
    assert_eq!(surface.build().expect("builds"), payload);
}

#[rstest]
fn untyped_message_stays_untyped() {
    let message = Message::from_payload(&json!({"blocks": []})).expect("untyped message");
    assert!(!message.has_type_tag());
    assert_eq!(message.build().expect("builds"), json!({"blocks": []}));
}

#[rstest]
fn unset_optionals_are_omitted() {
    let mut message = Message::new();
    message.push_block(Header::new(PlainText::new("Plain")));

    let built = message.build().expect("builds");
    assert_eq!(
        built,
        json!({"blocks": [{"type": "header", "text": {"type": "plain_text", "text": "Plain"}}]})
    );
}

#[rstest]
fn explicit_false_flags_are_kept() {
    let text = PlainText::new("Literal :smile:").with_emoji(false);
    let encoded = serde_json::to_value(TextObject::from(text)).expect("encodes");
    assert_eq!(
        encoded,
        json!({"type": "plain_text", "text": "Literal :smile:", "emoji": false})
    );
}

#[rstest]
fn button_encodes_style_in_lowercase() {
    let button = Button::new(TextObject::plain("Stop"), "stop").with_style(ButtonStyle::Danger);
    let encoded = serde_json::to_value(Element::Button(button)).expect("encodes");
    assert_eq!(encoded["style"], "danger");
    assert!(encoded.get("url").is_none());
}

#[rstest]
fn modal_encodes_its_type_tag() {
    let mut modal = Modal::new(PlainText::new("Settings")).with_submit(PlainText::new("Save"));
    modal.push_block(Divider::new());

    let built = modal.build().expect("builds");
    assert_eq!(built["type"], "modal");
    assert_eq!(built["submit"]["text"], "Save");
    assert!(built.get("close").is_none());
}

#[rstest]
fn home_tab_encodes_its_type_tag() {
    let built = HomeTab::new().build().expect("builds");
    assert_eq!(built, json!({"type": "home", "blocks": []}));
}

// ============================================================================
// Block ceilings
// ============================================================================

#[rstest]
fn message_at_ceiling_builds() {
    assert!(message_with_dividers(50).build().is_ok());
}

#[rstest]
fn message_over_ceiling_fails_at_build() {
    let message = message_with_dividers(51);
    assert_eq!(
        message.build(),
        Err(LayoutError::LimitExceeded {
            surface: SurfaceKind::Message,
            max: 50,
            actual: 51,
        })
    );
}

#[rstest]
fn push_block_does_not_check_ceiling() {
    let mut message = message_with_dividers(50);
    message.push_block(Divider::new());
    assert_eq!(message.blocks().len(), 51);
}

#[rstest]
fn set_blocks_rejects_oversized_sequence_and_keeps_state() {
    let mut message = message_with_dividers(1);
    let blocks: Vec<Block> = (0..51).map(|_| Divider::new().into()).collect();

    let err = message.set_blocks(blocks).expect_err("over ceiling");
    assert!(matches!(err, LayoutError::LimitExceeded { actual: 51, .. }));
    assert_eq!(message.blocks().len(), 1);
}

#[rstest]
#[case(100, true)]
#[case(101, false)]
fn modal_and_home_tab_share_ceiling(#[case] count: usize, #[case] ok: bool) {
    let blocks: Vec<Block> = (0..count).map(|_| Divider::new().into()).collect();

    let mut modal = Modal::new(PlainText::new("Big"));
    let mut home = HomeTab::new();
    assert_eq!(modal.set_blocks(blocks.clone()).is_ok(), ok);
    assert_eq!(home.set_blocks(blocks).is_ok(), ok);
}

#[rstest]
fn build_with_uses_given_constraints() {
    let constraints = LayoutConstraints {
        max_blocks_per_message: 1,
        ..LayoutConstraints::default()
    };
    let message = message_with_dividers(2);
    assert!(message.build().is_ok());
    assert!(matches!(
        message.build_with(&constraints),
        Err(LayoutError::LimitExceeded { max: 1, actual: 2, .. })
    ));
}

#[rstest]
fn surface_build_delegates_to_variant() {
    let surface = Surface::from(message_with_dividers(51));
    assert!(surface.build().is_err());
    assert_eq!(surface.kind(), SurfaceKind::Message);
}

// ============================================================================
// Serde integration
// ============================================================================

#[rstest]
fn deserialize_routes_through_decoder() {
    let block: Block = serde_json::from_value(json!({
        "type": "actions",
        "elements": [{"type": "button", "text": {"type": "plain_text", "text": "Go"}, "action_id": "go"}]
    }))
    .expect("valid block");
    assert_eq!(
        block,
        Block::from(Actions::new(vec![Element::Button(Button::new(
            TextObject::plain("Go"),
            "go"
        ))]))
    );
}

#[rstest]
fn deserialize_reports_decoder_failure() {
    let err = serde_json::from_str::<Message>(r#"{"blocks": [{"type": "unsupported_block"}]}"#)
        .expect_err("unknown block");
    assert!(err.to_string().contains("unsupported block type 'unsupported_block'"));
}

#[rstest]
fn surface_deserializes_from_nested_json() {
    #[derive(serde::Deserialize)]
    struct Envelope {
        view: Surface,
    }

    let envelope: Envelope = serde_json::from_value(json!({
        "view": {"type": "home", "blocks": [{"type": "divider"}]}
    }))
    .expect("valid envelope");
    assert_eq!(envelope.view.kind(), SurfaceKind::HomeTab);
    assert_eq!(envelope.view.blocks().len(), 1);
}

#[rstest]
fn section_builder_encodes_text_and_block_id() {
    let section = Section::new()
        .with_text(PlainText::new("Hi"))
        .with_block_id("greeting");
    let encoded = serde_json::to_value(Block::from(section)).expect("encodes");
    assert_eq!(
        encoded,
        json!({"type": "section", "text": {"type": "plain_text", "text": "Hi"}, "block_id": "greeting"})
    );
}
