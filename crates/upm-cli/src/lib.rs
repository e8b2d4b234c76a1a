//! upm library - expose modules for testing
//!
//! This library exposes the command modules needed for testing and
//! integration.

pub mod commands;
pub mod common;
pub mod errors;

pub use common::GlobalOpts;
