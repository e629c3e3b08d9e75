//! Test helpers module
//!
//! Utilities shared by the integration tests: a wiremock stand-in for the
//! portal backend, canned records and a ready-wired service context.

#![allow(dead_code)]

pub mod backend_mock;
pub mod test_context;
pub mod test_data;

pub use backend_mock::*;
pub use test_context::*;
pub use test_data::*;
