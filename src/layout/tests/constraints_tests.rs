//! Unit tests for the platform limits table.

use crate::layout::{constraints::LayoutConstraints, domain::SurfaceKind};
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case(SurfaceKind::Message, 50)]
#[case(SurfaceKind::Modal, 100)]
#[case(SurfaceKind::HomeTab, 100)]
fn slack_block_ceilings(#[case] surface: SurfaceKind, #[case] expected: usize) {
    assert_eq!(LayoutConstraints::SLACK.block_limit(surface), expected);
}

#[rstest]
fn default_is_slack() {
    assert_eq!(LayoutConstraints::default(), LayoutConstraints::SLACK);
}

#[rstest]
fn partial_overrides_keep_remaining_defaults() {
    let constraints: LayoutConstraints =
        serde_json::from_value(json!({"max_blocks_per_message": 10, "max_header_text_length": 20}))
            .expect("valid overrides");

    assert_eq!(constraints.block_limit(SurfaceKind::Message), 10);
    assert_eq!(constraints.max_header_text_length, 20);
    assert_eq!(constraints.max_blocks_per_modal, 100);
    assert_eq!(constraints.max_action_id_length, 255);
}
