//! Configuration validation
//!
//! This module provides validation logic for configuration files.

use crate::config::types::Config;
use crate::error::{ConfigError, ConfigResult};
use std::collections::HashSet;

/// Validate a complete configuration
pub fn validate_config(config: &Config) -> ConfigResult<()> {
    if let Some(interpreter) = &config.interpreter {
        if interpreter.is_empty() {
            return Err(ConfigError::Invalid(
                "interpreter must not be empty".to_string(),
            ));
        }
    }

    // Every declared dependency must name a known task
    validate_dependencies(config)?;

    // Check for circular dependencies between tasks
    detect_circular_dependencies(config)?;

    Ok(())
}

/// Check that all dependency references resolve and no task depends on itself
fn validate_dependencies(config: &Config) -> ConfigResult<()> {
    for (name, task) in &config.tasks {
        for dep in &task.dependencies {
            if dep == name {
                return Err(ConfigError::CircularDependency(format!(
                    "{} -> {}",
                    name, dep
                )));
            }
            if !config.tasks.contains_key(dep) {
                return Err(ConfigError::UnknownDependency {
                    task: name.clone(),
                    dependency: dep.clone(),
                });
            }
        }
    }
    Ok(())
}

/// Detect circular dependencies in the task graph
fn detect_circular_dependencies(config: &Config) -> ConfigResult<()> {
    let mut visited = HashSet::new();
    for task_name in config.tasks.keys() {
        let mut stack = Vec::new();
        check_task_cycle(config, task_name, &mut visited, &mut stack)?;
    }
    Ok(())
}

/// Recursively check for cycles in task dependencies
fn check_task_cycle(
    config: &Config,
    task_name: &str,
    visited: &mut HashSet<String>,
    stack: &mut Vec<String>,
) -> ConfigResult<()> {
    // Check if we've found a cycle
    if stack.iter().any(|s| s == task_name) {
        stack.push(task_name.to_string());
        return Err(ConfigError::CircularDependency(stack.join(" -> ")));
    }

    // Skip if already fully processed
    if visited.contains(task_name) {
        return Ok(());
    }

    let task = match config.tasks.get(task_name) {
        Some(task) => task,
        // Unresolved references are reported by validate_dependencies
        None => return Ok(()),
    };

    stack.push(task_name.to_string());

    for dep in &task.dependencies {
        check_task_cycle(config, dep, visited, stack)?;
    }

    stack.pop();
    visited.insert(task_name.to_string());

    Ok(())
}
