//! Shared fixtures and helpers for layout tests.

use crate::layout::{
    domain::{Block, Divider, Message},
    validation::DefaultLayoutValidator,
};
use rstest::fixture;
use serde_json::{Value, json};

#[fixture]
pub fn default_validator() -> DefaultLayoutValidator {
    DefaultLayoutValidator::new()
}

/// A message payload touching every block kind and most element kinds.
#[fixture]
pub fn complex_payload() -> Value {
    json!({
        "response_type": "in_channel",
        "replace_original": false,
        "metadata": {"event_type": "deploy", "event_payload": {"id": 7}},
        "blocks": [
            {
                "type": "header",
                "block_id": "title",
                "text": {"type": "plain_text", "text": "Deploy :rocket:", "emoji": true}
            },
            {
                "type": "section",
                "text": {"type": "mrkdwn", "text": "*api* to production", "verbatim": false},
                "fields": [
                    {"type": "mrkdwn", "text": "*Owner*"},
                    {"type": "plain_text", "text": "platform"}
                ],
                "accessory": {
                    "type": "overflow",
                    "action_id": "more",
                    "options": [
                        {"text": {"type": "plain_text", "text": "Logs"}, "value": "logs"},
                        {
                            "text": {"type": "plain_text", "text": "Runbook"},
                            "value": "runbook",
                            "url": "https://example.com/runbook"
                        }
                    ]
                }
            },
            {"type": "divider"},
            {
                "type": "actions",
                "elements": [
                    {
                        "type": "button",
                        "text": {"type": "plain_text", "text": "Approve"},
                        "action_id": "approve",
                        "value": "42",
                        "style": "primary"
                    },
                    {
                        "type": "static_select",
                        "action_id": "env",
                        "placeholder": {"type": "plain_text", "text": "Environment"},
                        "options": [
                            {"text": {"type": "plain_text", "text": "Staging"}, "value": "stg"}
                        ]
                    },
                    {"type": "datepicker", "action_id": "when", "initial_date": "2026-10-19"}
                ]
            },
            {
                "type": "context",
                "elements": [
                    {"type": "image", "image_url": "https://example.com/a.png", "alt_text": "avatar"},
                    {"type": "mrkdwn", "text": "Requested by <@U123>"}
                ]
            },
            {"type": "image", "image_url": "https://example.com/graph.png", "alt_text": "graph"},
            {"type": "file", "external_id": "F123", "source": "remote"},
            {
                "type": "video",
                "title": {"type": "plain_text", "text": "Walkthrough"},
                "video_url": "https://example.com/embed/1",
                "thumbnail_url": "https://example.com/thumb.png",
                "alt_text": "walkthrough video"
            },
            {
                "type": "rich_text",
                "elements": [
                    {"type": "rich_text_section", "elements": [{"type": "text", "text": "raw"}]}
                ]
            },
            {
                "type": "input",
                "label": {"type": "plain_text", "text": "Reason"},
                "element": {"type": "plain_text_input", "action_id": "reason", "multiline": true},
                "optional": true
            }
        ]
    })
}

/// Builds a `blocks` array of `count` dividers.
pub fn divider_payloads(count: usize) -> Value {
    Value::Array((0..count).map(|_| json!({"type": "divider"})).collect())
}

/// Builds a message holding `count` dividers, bypassing the ceiling.
pub fn message_with_dividers(count: usize) -> Message {
    let mut message = Message::new();
    for _ in 0..count {
        message.push_block(Divider::new());
    }
    message
}

/// Returns the wire `type` of each block, in order.
pub fn block_kinds_of(blocks: &[Block]) -> Vec<&'static str> {
    blocks.iter().map(Block::kind).collect()
}
