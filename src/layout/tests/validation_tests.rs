//! Unit tests for the default layout validator.

use super::fixtures::{complex_payload, default_validator, message_with_dividers};
use crate::layout::{
    constraints::LayoutConstraints,
    domain::{
        Actions, Block, Button, Context, ContextElement, Divider, Element, Header, HomeTab, Input,
        Message, Modal, OptionGroup, OptionObject, OverflowMenu, PlainText, PlainTextInput,
        Section, StaticSelect, Surface, SurfaceKind, TextObject,
    },
    error::ValidationError,
    ports::validator::LayoutValidator,
    validation::DefaultLayoutValidator,
};
use rstest::rstest;
use serde_json::Value;

fn option(label: &str) -> OptionObject {
    OptionObject::new(TextObject::plain(label), label.to_lowercase())
}

fn message_of(blocks: Vec<Block>) -> Surface {
    let mut message = Message::new();
    for block in blocks {
        message.push_block(block);
    }
    Surface::from(message)
}

fn button(text: &str) -> Element {
    Element::Button(Button::new(TextObject::plain(text), "act"))
}

// ============================================================================
// Valid surfaces
// ============================================================================

#[rstest]
fn decoded_complex_payload_is_valid(
    default_validator: DefaultLayoutValidator,
    complex_payload: Value,
) {
    let surface = Surface::from_payload(&complex_payload).expect("complex payload");
    assert!(default_validator.validate(&surface).is_ok());
}

#[rstest]
fn empty_surfaces_are_valid(default_validator: DefaultLayoutValidator) {
    assert!(default_validator.validate(&Message::new().into()).is_ok());
    assert!(default_validator.validate(&HomeTab::new().into()).is_ok());
}

#[rstest]
fn empty_section_is_accepted(default_validator: DefaultLayoutValidator) {
    let surface = message_of(vec![Section::new().into()]);
    assert!(default_validator.validate(&surface).is_ok());
}

// ============================================================================
// Structure
// ============================================================================

#[rstest]
fn too_many_blocks_is_reported(default_validator: DefaultLayoutValidator) {
    let surface = Surface::from(message_with_dividers(51));
    assert_eq!(
        default_validator.validate_structure(&surface),
        Err(ValidationError::TooManyBlocks {
            surface: SurfaceKind::Message,
            max: 50,
            actual: 51,
        })
    );
}

#[rstest]
fn duplicate_block_ids_are_reported(default_validator: DefaultLayoutValidator) {
    let surface = message_of(vec![
        Header::new(PlainText::new("One")).with_block_id("same").into(),
        Section::new().with_block_id("other").into(),
        Section::new().with_block_id("same").into(),
    ]);
    assert_eq!(
        default_validator.validate_structure(&surface),
        Err(ValidationError::DuplicateBlockId("same".into()))
    );
}

#[rstest]
fn long_block_id_is_reported(default_validator: DefaultLayoutValidator) {
    let surface = message_of(vec![Section::new().with_block_id("b".repeat(256)).into()]);
    assert_eq!(
        default_validator.validate_structure(&surface),
        Err(ValidationError::TextTooLong {
            location: "blocks[0].block_id".into(),
            max: 255,
            actual: 256,
        })
    );
}

#[rstest]
fn modal_labels_are_limited(default_validator: DefaultLayoutValidator) {
    let modal = Modal::new(PlainText::new("A title that is far too long"))
        .with_close(PlainText::new(""));
    let err = default_validator
        .validate_structure(&modal.into())
        .expect_err("two violations");
    assert_eq!(
        err.errors(),
        [
            ValidationError::TextTooLong {
                location: "title".into(),
                max: 24,
                actual: 28,
            },
            ValidationError::EmptyValue("close".into()),
        ]
    );
}

#[rstest]
fn home_tab_callback_id_is_limited(default_validator: DefaultLayoutValidator) {
    let mut home = HomeTab::new();
    home.callback_id = Some("c".repeat(300));
    assert!(matches!(
        default_validator.validate(&home.into()),
        Err(ValidationError::TextTooLong { max: 255, actual: 300, .. })
    ));
}

// ============================================================================
// Content
// ============================================================================

#[rstest]
fn header_text_limit_is_enforced(default_validator: DefaultLayoutValidator) {
    let surface = message_of(vec![Header::new(PlainText::new("h".repeat(151))).into()]);
    assert_eq!(
        default_validator.validate_content(&surface),
        Err(ValidationError::TextTooLong {
            location: "blocks[0].text".into(),
            max: 150,
            actual: 151,
        })
    );
}

#[rstest]
fn section_fields_are_counted_and_measured(default_validator: DefaultLayoutValidator) {
    let mut fields: Vec<TextObject> = (0..11).map(|i| TextObject::plain(format!("f{i}"))).collect();
    fields[3] = TextObject::mrkdwn("x".repeat(2001));
    let surface = message_of(vec![Section::new().with_fields(fields).into()]);

    let err = default_validator.validate_content(&surface).expect_err("violations");
    assert_eq!(
        err.errors(),
        [
            ValidationError::TooManyItems {
                location: "blocks[0].fields".into(),
                max: 10,
                actual: 11,
            },
            ValidationError::TextTooLong {
                location: "blocks[0].fields[3]".into(),
                max: 2000,
                actual: 2001,
            },
        ]
    );
}

#[rstest]
fn actions_element_count_and_button_text(default_validator: DefaultLayoutValidator) {
    let mut elements: Vec<Element> = (0..25).map(|_| button("Ok")).collect();
    elements.push(button(&"b".repeat(76)));
    let surface = message_of(vec![Actions::new(elements).into()]);

    let err = default_validator.validate(&surface).expect_err("violations");
    assert!(err.is_multiple());
    assert_eq!(
        err.errors(),
        [
            ValidationError::TooManyItems {
                location: "blocks[0].elements".into(),
                max: 25,
                actual: 26,
            },
            ValidationError::TextTooLong {
                location: "blocks[0].elements[25].text".into(),
                max: 75,
                actual: 76,
            },
        ]
    );
}

#[rstest]
fn empty_context_is_reported(default_validator: DefaultLayoutValidator) {
    let surface = message_of(vec![Context::new(Vec::new()).into()]);
    assert_eq!(
        default_validator.validate_content(&surface),
        Err(ValidationError::TooFewItems {
            location: "blocks[0].elements".into(),
            min: 1,
            actual: 0,
        })
    );
}

#[rstest]
fn empty_text_in_context_is_reported(default_validator: DefaultLayoutValidator) {
    let surface = message_of(vec![
        Context::new(vec![ContextElement::from(TextObject::plain(""))]).into(),
    ]);
    assert_eq!(
        default_validator.validate_content(&surface),
        Err(ValidationError::EmptyValue("blocks[0].elements[0]".into()))
    );
}

#[rstest]
#[case(1, false)]
#[case(2, true)]
#[case(5, true)]
#[case(6, false)]
fn overflow_option_count_is_bounded(
    default_validator: DefaultLayoutValidator,
    #[case] count: usize,
    #[case] valid: bool,
) {
    let options = (0..count).map(|i| option(&format!("Opt{i}"))).collect();
    let overflow = Element::Overflow(OverflowMenu::new("more", options));
    let surface = message_of(vec![Section::new().with_accessory(overflow).into()]);
    assert_eq!(default_validator.validate(&surface).is_ok(), valid);
}

#[rstest]
fn static_select_rejects_options_and_groups_together(default_validator: DefaultLayoutValidator) {
    let select = StaticSelect::new("pick", TextObject::plain("Pick"))
        .with_options(vec![option("A")])
        .with_option_groups(vec![OptionGroup::new(PlainText::new("G"), vec![option("B")])]);
    let surface = message_of(vec![Actions::new(vec![Element::StaticSelect(select)]).into()]);
    assert_eq!(
        default_validator.validate_content(&surface),
        Err(ValidationError::ConflictingFields {
            location: "blocks[0].elements[0]".into(),
            first: "options",
            second: "option_groups",
        })
    );
}

#[rstest]
fn option_value_limit_is_enforced(default_validator: DefaultLayoutValidator) {
    let long = OptionObject::new(TextObject::plain("Long"), "v".repeat(151));
    let select = StaticSelect::new("pick", TextObject::plain("Pick")).with_options(vec![long]);
    let surface = message_of(vec![Section::new().with_accessory(Element::StaticSelect(select)).into()]);
    assert_eq!(
        default_validator.validate_content(&surface),
        Err(ValidationError::TextTooLong {
            location: "blocks[0].accessory.options[0].value".into(),
            max: 150,
            actual: 151,
        })
    );
}

#[rstest]
fn input_label_and_element_are_checked(default_validator: DefaultLayoutValidator) {
    let input = Input::new(
        TextObject::plain(""),
        Element::PlainTextInput(PlainTextInput::new("a".repeat(256))),
    );
    let surface = message_of(vec![input.into(), Divider::new().into()]);
    let err = default_validator.validate(&surface).expect_err("violations");
    assert_eq!(
        err.errors(),
        [
            ValidationError::EmptyValue("blocks[0].label".into()),
            ValidationError::TextTooLong {
                location: "blocks[0].element.action_id".into(),
                max: 255,
                actual: 256,
            },
        ]
    );
}

#[rstest]
fn structure_and_content_errors_are_combined(default_validator: DefaultLayoutValidator) {
    let mut message = message_with_dividers(50);
    message.push_block(Header::new(PlainText::new("")));
    let err = default_validator
        .validate(&message.into())
        .expect_err("violations");
    assert_eq!(err.errors().len(), 2);
}

#[rstest]
fn custom_constraints_are_honoured() {
    let validator = DefaultLayoutValidator::with_config(LayoutConstraints {
        max_header_text_length: 3,
        ..LayoutConstraints::SLACK
    });
    let surface = message_of(vec![Header::new(PlainText::new("four")).into()]);
    assert!(validator.validate(&surface).is_err());
    assert_eq!(validator.config().max_header_text_length, 3);
}
