//! Ports for the layout bounded context.
//!
//! Ports are the traits that adapters and services implement.

pub mod validator;
