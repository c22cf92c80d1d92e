//! Command-line interface
//!
//! Argument definitions and command handlers for the `confdoc` binary.

pub mod args;
pub mod commands;
