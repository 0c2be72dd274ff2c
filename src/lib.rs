//! Yamk - a YAML-driven build task runner
//!
//! Yamk reads named tasks with dependencies and ordered steps from a YAML
//! file and executes them so that all transitive dependencies run before the
//! tasks that need them, at most once per invocation.

// Public modules
pub mod cli;
pub mod config;
pub mod error;
pub mod runner;
pub mod ui;

// Re-export commonly used types
pub use error::{Result, YamkError};

/// Current version of Yamk
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
