//! Integration tests for block ceilings across surfaces.
//!
//! Ceilings apply on full replacement, on decode and on build; appending a
//! block never checks.

use blocksmith::layout::{
    constraints::LayoutConstraints,
    domain::{Block, Divider, HomeTab, Message, Modal, PlainText, Surface, SurfaceKind},
    error::LayoutError,
};
use rstest::rstest;
use serde_json::{Value, json};

fn dividers(count: usize) -> Vec<Block> {
    (0..count).map(|_| Block::from(Divider::new())).collect()
}

fn payload_with(kind: SurfaceKind, count: usize) -> Value {
    let blocks: Vec<Value> = (0..count).map(|_| json!({"type": "divider"})).collect();
    match kind {
        SurfaceKind::Message => json!({"blocks": blocks}),
        SurfaceKind::Modal => json!({
            "type": "modal",
            "title": {"type": "plain_text", "text": "Limits"},
            "blocks": blocks
        }),
        SurfaceKind::HomeTab => json!({"type": "home", "blocks": blocks}),
    }
}

#[rstest]
#[case(SurfaceKind::Message, 50)]
#[case(SurfaceKind::Modal, 100)]
#[case(SurfaceKind::HomeTab, 100)]
fn decode_accepts_exactly_the_ceiling(#[case] kind: SurfaceKind, #[case] max: usize) {
    let surface = Surface::from_payload(&payload_with(kind, max)).expect("at ceiling");
    assert_eq!(surface.kind(), kind);
    assert_eq!(surface.blocks().len(), max);
    assert!(surface.build().is_ok());
}

#[rstest]
#[case(SurfaceKind::Message, 50)]
#[case(SurfaceKind::Modal, 100)]
#[case(SurfaceKind::HomeTab, 100)]
fn decode_rejects_one_past_the_ceiling(#[case] kind: SurfaceKind, #[case] max: usize) {
    let err = Surface::from_payload(&payload_with(kind, max + 1)).expect_err("past ceiling");
    assert_eq!(
        err,
        LayoutError::LimitExceeded {
            surface: kind,
            max,
            actual: max + 1,
        }
    );
}

#[rstest]
fn interactive_growth_is_caught_at_build() {
    let mut home = HomeTab::new();
    for _ in 0..101 {
        home.push_block(Divider::new());
    }
    assert_eq!(home.blocks().len(), 101);
    assert!(matches!(
        home.build(),
        Err(LayoutError::LimitExceeded {
            surface: SurfaceKind::HomeTab,
            ..
        })
    ));
}

#[rstest]
fn bulk_replacement_is_checked() {
    let mut modal = Modal::new(PlainText::new("Bulk"));
    assert!(modal.set_blocks(dividers(100)).is_ok());
    assert!(modal.set_blocks(dividers(101)).is_err());
    assert_eq!(modal.blocks().len(), 100);
}

#[rstest]
fn host_overrides_are_loaded_from_json() {
    let constraints: LayoutConstraints =
        serde_json::from_value(json!({"max_blocks_per_message": 3})).expect("valid overrides");
    let mut message = Message::new();
    message
        .set_blocks_with(dividers(3), &constraints)
        .expect("at custom ceiling");
    message.push_block(Divider::new());

    assert!(message.build().is_ok());
    assert!(message.build_with(&constraints).is_err());
}
