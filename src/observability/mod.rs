//! Observability module
//!
//! Structured logging for `confdoc` runs. Logs go to stderr so they never
//! mix with a document written to stdout.

pub mod logging;

pub use logging::{LogFormat, init_logging};
