//! Core configuration types
//!
//! This module defines the data structures that represent a yamk.yml configuration file.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Top-level configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Application name (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Application description (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Tasks defined in the configuration
    #[serde(default)]
    pub tasks: HashMap<String, Task>,

    /// Global interpreter to use for commands (e.g., ["bash", "-c"])
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interpreter: Option<Vec<String>>,
}

impl Config {
    /// Look up one task by name
    pub fn task(&self, name: &str) -> Option<&Task> {
        self.tasks.get(name)
    }

    /// Summaries of every known task, sorted by name for stable listings
    pub fn summaries(&self) -> Vec<TaskSummary> {
        let mut summaries: Vec<TaskSummary> = self
            .tasks
            .iter()
            .map(|(name, task)| TaskSummary {
                name: name.clone(),
                description: task.description.clone().unwrap_or_default(),
                dependencies: task.dependencies.clone(),
            })
            .collect();
        summaries.sort_by(|a, b| a.name.cmp(&b.name));
        summaries
    }
}

/// A task definition
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Task {
    /// Human-readable description for help and listings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Names of tasks that must run before this one
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,

    /// Steps to execute, in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<Step>,
}

/// One step within a task
///
/// A step is either a primary `command` with optional `on_success` /
/// `on_failure` companions, or a batch of unconditional `actions`.
/// A step with neither is a no-op that only logs its name.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Step {
    /// Display name for logging
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Primary shell command
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    /// Run after the primary command succeeds; its outcome is ignored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_success: Option<String>,

    /// Fallback run when the primary command fails; its outcome decides the step
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_failure: Option<String>,

    /// Unconditional sub-commands; the first failure fails the step
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<String>,

    /// Continue to the next step even if the primary command fails
    /// and no fallback is declared
    #[serde(default)]
    pub ignore_errors: bool,
}

impl Step {
    /// Display name, falling back to a placeholder for anonymous steps
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("unnamed step")
    }

    /// Whether this step has nothing to run
    pub fn is_noop(&self) -> bool {
        self.command.is_none() && self.actions.is_empty()
    }
}

/// Listing entry for one task: name, description, and direct dependencies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSummary {
    pub name: String,
    pub description: String,
    pub dependencies: Vec<String>,
}
