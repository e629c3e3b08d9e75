//! Utility modules
//!
//! This module contains common utilities used throughout the crate,
//! including error handling, logging setup, and display helpers.

pub mod errors;
pub mod helpers;
pub mod logging;

pub use errors::{PortalError, Result};
