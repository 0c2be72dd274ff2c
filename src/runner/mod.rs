//! Task execution engine
//!
//! This module handles dependency resolution and the execution of tasks:
//! command running, step conditional/fallback logic, and run orchestration.

pub mod command;
pub mod context;
pub mod orchestrate;
pub mod resolve;
pub mod state;
pub mod task;

// Re-export main types
pub use command::*;
pub use context::*;
pub use orchestrate::*;
pub use resolve::*;
pub use state::*;
pub use task::*;
