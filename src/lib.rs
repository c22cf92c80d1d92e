//! `confdoc` - configuration property reference generator
//!
//! Renders a catalog of configuration properties (key, description, type,
//! default value, deprecation and experimental flags, runtime mutability)
//! into an administrator-facing reference document.
//!
//! The generation core lives in [`docgen`]; [`catalog`] holds the input
//! model and its file loader.

pub mod catalog;
pub mod cli;
pub mod docgen;
pub mod error;
pub mod observability;
