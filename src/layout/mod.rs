//! Slack Block Kit layouts: a typed model, a decoder and an encoder.
//!
//! # Architecture
//!
//! - **Domain**: the closed sets of text objects, elements, blocks and
//!   surfaces ([`domain::Message`], [`domain::Block`], [`domain::Element`])
//! - **Codec**: the type-dispatching decoder from raw JSON
//!   ([`codec::RawPayload`]); encoding is derived on the domain types
//! - **Constraints**: the platform limits table ([`constraints::LayoutConstraints`])
//! - **Ports**: the validator interface ([`ports::validator::LayoutValidator`])
//! - **Validation**: the default rule set ([`validation::DefaultLayoutValidator`])
//!
//! # Example
//!
//! ```
//! use blocksmith::layout::domain::{Message, Section, TextObject};
//!
//! let payload = r#"{"blocks": [{"type": "header", "text": {"type": "plain_text", "text": "Weekly report"}}]}"#;
//! let mut message = Message::from_payload(payload).expect("valid payload");
//! message.push_block(Section::new().with_text(TextObject::mrkdwn("*3* incidents")));
//!
//! let built = message.build().expect("within the block ceiling");
//! assert_eq!(built["blocks"][0]["type"], "header");
//! assert_eq!(built["blocks"][1]["type"], "section");
//! ```

pub mod codec;
pub mod constraints;
pub mod domain;
pub mod error;
pub mod ports;
pub mod validation;

#[cfg(test)]
mod tests;
