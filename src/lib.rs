//! Blocksmith: a typed model of Slack Block Kit layouts.
//!
//! This crate decodes Block Kit JSON into closed sets of typed blocks,
//! elements and text objects, lets callers modify them, and encodes them
//! back to the wire shape under the platform's block ceilings.
//!
//! # Modules
//!
//! - [`layout`]: the layout model, codec and constraint validation

pub mod layout;
