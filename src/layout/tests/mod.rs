//! Unit tests for the layout module.
//!
//! Tests are organised by concern: decoding at each dispatch level,
//! encoding and block ceilings, constraint validation, and the limits table.

mod constraints_tests;
mod element_decode_tests;
mod encode_tests;
mod fixtures;
mod validation_tests;
