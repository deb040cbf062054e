//! Command-line interface
//!
//! Argument parsing for the demo driver binary.

pub mod commands;

pub use commands::{Command, Opt};
