//! Configuration parsing and validation
//!
//! This module handles parsing of yamk.yml configuration files
//! and validation of the task graph they declare.

pub mod parse;
pub mod schema;
pub mod types;

// Re-export main types
pub use parse::*;
pub use schema::*;
pub use types::*;
