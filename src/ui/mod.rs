//! Console formatting
//!
//! Rendering helpers for run progress and task listings. All functions
//! return strings; printing and verbosity gating stay with the caller.

use crate::config::{Step, Task, TaskSummary};
use colored::Colorize;

/// Width of section rules
const RULE_WIDTH: usize = 60;

/// A horizontal rule used above and below section titles
pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// A framed section header
pub fn header(title: &str) -> String {
    format!("{}\n{}\n{}", rule(), title.bold(), rule())
}

/// Banner printed when a task starts
pub fn task_banner(name: &str, description: &str) -> String {
    let title = if description.is_empty() {
        format!("[Task: {}]", name)
    } else {
        format!("[Task: {}] {}", name, description)
    };
    format!("{}\n{}", title.bold(), "-".repeat(RULE_WIDTH))
}

/// Progress marker for one step
pub fn step_marker(step_name: &str) -> String {
    format!("{} {}", "→".cyan(), step_name)
}

/// Notice that a step's primary command failed and its fallback is running
pub fn fallback_notice() -> String {
    format!("  {} primary command failed, running on_failure...", "⚠".yellow())
}

/// Notice that a failing step was ignored
pub fn ignored_notice(step_name: &str) -> String {
    format!("  {} step '{}' failed, continuing", "⚠".yellow(), step_name)
}

/// Line printed when a task is skipped because it already ran
pub fn skip_line(task_name: &str) -> String {
    format!("{} {} already executed", "[SKIP]".yellow(), task_name)
}

/// Success banner for one task
pub fn success_line(task_name: &str) -> String {
    format!("{} {} complete", "[SUCCESS]".green().bold(), task_name)
}

/// Failure banner for one task
pub fn failure_line(task_name: &str) -> String {
    format!("{} {} failed", "[FAILED]".red().bold(), task_name)
}

/// Final message when a run halts, naming the offending task
pub fn halted_line(task_name: &str) -> String {
    format!("{} run stopped at task '{}'", "[FAILED]".red().bold(), task_name)
}

/// Final message for a fully successful invocation
pub fn all_done_line() -> String {
    format!("{} all tasks finished successfully", "[DONE]".green().bold())
}

/// The resolved execution order for a target
pub fn order_line(order: &[String]) -> String {
    format!("Execution order: {}", order.join(" → "))
}

/// Render the task listing: name, description, and dependencies per task
pub fn render_summaries(summaries: &[TaskSummary]) -> String {
    let mut out = header("Available tasks");
    for summary in summaries {
        out.push('\n');
        out.push_str(&format!("  {:<16} {}", summary.name.bold(), summary.description));
        if !summary.dependencies.is_empty() {
            out.push_str(&format!(
                "\n  {:<16} {} {}",
                "",
                "depends on:".dimmed(),
                summary.dependencies.join(", ")
            ));
        }
    }
    out
}

/// Render full step information for one task
pub fn render_task_detail(name: &str, task: &Task) -> String {
    let mut out = header(&format!("Task: {}", name));
    if let Some(description) = &task.description {
        out.push_str(&format!("\n{}", description));
    }
    if !task.dependencies.is_empty() {
        out.push_str(&format!(
            "\n{} {}",
            "Dependencies:".bold(),
            task.dependencies.join(", ")
        ));
    }
    if task.steps.is_empty() {
        out.push_str(&format!("\n{}", "No steps".dimmed()));
        return out;
    }
    out.push_str(&format!("\n{}", "Steps:".bold()));
    for step in &task.steps {
        out.push_str(&render_step(step));
    }
    out
}

fn render_step(step: &Step) -> String {
    let mut out = format!("\n  {} {}", "•".cyan(), step.display_name());
    if let Some(command) = &step.command {
        out.push_str(&format!("\n      command:    {}", command));
    }
    if let Some(on_success) = &step.on_success {
        out.push_str(&format!("\n      on_success: {}", on_success));
    }
    if let Some(on_failure) = &step.on_failure {
        out.push_str(&format!("\n      on_failure: {}", on_failure));
    }
    for action in &step.actions {
        out.push_str(&format!("\n      action:     {}", action));
    }
    if step.ignore_errors {
        out.push_str(&format!("\n      {}", "(failures ignored)".dimmed()));
    }
    out
}
