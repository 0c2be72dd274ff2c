//! Dependency resolution
//!
//! Computes the linear order in which a task and its transitive dependencies
//! must run. Uses an iterative post-order depth-first traversal with an
//! explicit work stack, so deep dependency chains cannot overflow the call
//! stack. Cycles are rejected earlier, at configuration validation.

use crate::config::Task;
use std::collections::{HashMap, HashSet};

/// Resolve the execution order for one task
///
/// The returned order ends with `task_name`, contains no duplicates, and
/// places every task after all of its declared dependencies. Shared
/// transitive dependencies appear exactly once. An unknown task name
/// resolves to an empty order.
pub fn resolve(task_name: &str, tasks: &HashMap<String, Task>) -> Vec<String> {
    if !tasks.contains_key(task_name) {
        return Vec::new();
    }

    let mut visited: HashSet<String> = HashSet::new();
    let mut order: Vec<String> = Vec::new();
    let mut stack: Vec<String> = vec![task_name.to_string()];

    while let Some(current) = stack.last().cloned() {
        if visited.contains(&current) {
            // Dependencies of `current` are done; emit it once
            stack.pop();
            if !order.contains(&current) {
                order.push(current);
            }
            continue;
        }

        visited.insert(current.clone());

        if let Some(task) = tasks.get(&current) {
            // Reverse declaration order so pops process deps as declared
            for dep in task.dependencies.iter().rev() {
                if !visited.contains(dep) {
                    stack.push(dep.clone());
                }
            }
        }
    }

    order
}
