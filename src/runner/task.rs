//! Task execution engine
//!
//! Drives one task's steps in declared order, enforcing at-most-once
//! execution per invocation: tasks that already succeeded are skipped, tasks
//! that already failed short-circuit without retry.
//!
//! Step policy is strict by default: a failing primary command with no
//! `on_failure` fallback fails the whole task. Individual steps can opt out
//! with `ignore_errors: true`.

use crate::config::{Step, Task};
use crate::error::{ExecutionError, ExecutionResult};
use crate::runner::{execute_command, Context, ExecutionState};
use std::collections::HashMap;

/// Execute one task, honoring the per-run execution state
pub fn execute_task(
    name: &str,
    tasks: &HashMap<String, Task>,
    state: &mut ExecutionState,
    ctx: &Context,
) -> ExecutionResult<()> {
    if state.is_executed(name) {
        ctx.print_task_skip(name);
        return Ok(());
    }

    if state.is_failed(name) {
        return Err(ExecutionError::PreviouslyFailed(name.to_string()));
    }

    let task = tasks
        .get(name)
        .ok_or_else(|| ExecutionError::UnknownTask(name.to_string()))?;

    ctx.print_task_start(name, task.description.as_deref().unwrap_or(""));

    for step in &task.steps {
        if let Err(e) = execute_step(name, step, ctx) {
            state.mark_failed(name);
            ctx.print_task_failure(name);
            return Err(e);
        }
    }

    state.mark_executed(name);
    ctx.print_task_success(name);
    Ok(())
}

/// Execute a single step
fn execute_step(task_name: &str, step: &Step, ctx: &Context) -> ExecutionResult<()> {
    ctx.print_step(step.display_name());

    if let Some(command) = &step.command {
        return execute_primary(task_name, step, command, ctx);
    }

    if !step.actions.is_empty() {
        return execute_actions(task_name, step, ctx);
    }

    // Neither command nor actions: a no-op marker
    ctx.print_debug("step has nothing to run");
    Ok(())
}

/// Run a step's primary command with its success/failure companions
fn execute_primary(
    task_name: &str,
    step: &Step,
    command: &str,
    ctx: &Context,
) -> ExecutionResult<()> {
    match execute_command(command, ctx) {
        Ok(()) => {
            if let Some(on_success) = &step.on_success {
                // Best-effort side action; its outcome does not affect the step
                if execute_command(on_success, ctx).is_err() {
                    ctx.print_debug("on_success command failed, ignoring");
                }
            }
            Ok(())
        }
        Err(_) => {
            if let Some(on_failure) = &step.on_failure {
                ctx.print_fallback();
                return execute_command(on_failure, ctx)
                    .map_err(|_| step_failed(task_name, step));
            }
            if step.ignore_errors {
                ctx.print_step_ignored(step.display_name());
                return Ok(());
            }
            Err(step_failed(task_name, step))
        }
    }
}

/// Run a step's unconditional action batch, failing fast
fn execute_actions(task_name: &str, step: &Step, ctx: &Context) -> ExecutionResult<()> {
    for action in &step.actions {
        execute_command(action, ctx).map_err(|_| step_failed(task_name, step))?;
    }
    Ok(())
}

fn step_failed(task_name: &str, step: &Step) -> ExecutionError {
    ExecutionError::StepFailed {
        task: task_name.to_string(),
        step: step.display_name().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::Verbosity;

    fn quiet_ctx() -> Context {
        Context::new().with_verbosity(Verbosity::Silent)
    }

    fn step(command: Option<&str>) -> Step {
        Step {
            name: Some("test step".to_string()),
            command: command.map(|s| s.to_string()),
            on_success: None,
            on_failure: None,
            actions: Vec::new(),
            ignore_errors: false,
        }
    }

    fn single_task(name: &str, steps: Vec<Step>) -> HashMap<String, Task> {
        let mut tasks = HashMap::new();
        tasks.insert(
            name.to_string(),
            Task {
                description: None,
                dependencies: Vec::new(),
                steps,
            },
        );
        tasks
    }

    #[test]
    fn test_execute_task_success() {
        let tasks = single_task("ok", vec![step(Some("true"))]);
        let mut state = ExecutionState::new();

        let result = execute_task("ok", &tasks, &mut state, &quiet_ctx());
        assert!(result.is_ok());
        assert!(state.is_executed("ok"));
    }

    #[test]
    fn test_execute_task_failure_is_recorded() {
        let tasks = single_task("bad", vec![step(Some("false"))]);
        let mut state = ExecutionState::new();

        let result = execute_task("bad", &tasks, &mut state, &quiet_ctx());
        assert!(matches!(result, Err(ExecutionError::StepFailed { .. })));
        assert!(state.is_failed("bad"));
        assert!(!state.is_executed("bad"));
    }

    #[test]
    fn test_executed_task_is_skipped() {
        let tasks = single_task("once", vec![step(Some("false"))]);
        let mut state = ExecutionState::new();
        state.mark_executed("once");

        // The failing step never runs because the task is short-circuited
        let result = execute_task("once", &tasks, &mut state, &quiet_ctx());
        assert!(result.is_ok());
    }

    #[test]
    fn test_failed_task_short_circuits() {
        let tasks = single_task("flaky", vec![step(Some("true"))]);
        let mut state = ExecutionState::new();
        state.mark_failed("flaky");

        let result = execute_task("flaky", &tasks, &mut state, &quiet_ctx());
        assert!(matches!(result, Err(ExecutionError::PreviouslyFailed(_))));
    }

    #[test]
    fn test_unknown_task() {
        let tasks = HashMap::new();
        let mut state = ExecutionState::new();

        let result = execute_task("ghost", &tasks, &mut state, &quiet_ctx());
        assert!(matches!(result, Err(ExecutionError::UnknownTask(_))));
    }

    #[test]
    fn test_strict_failure_stops_remaining_steps() {
        use tempfile::TempDir;

        let temp_dir = TempDir::new().unwrap();
        let mut second = step(Some("touch should_not_exist.txt"));
        second.name = Some("later step".to_string());

        let tasks = single_task("strict", vec![step(Some("false")), second]);
        let mut state = ExecutionState::new();
        let ctx = quiet_ctx().with_working_dir(temp_dir.path().to_path_buf());

        let result = execute_task("strict", &tasks, &mut state, &ctx);
        assert!(result.is_err());
        assert!(!temp_dir.path().join("should_not_exist.txt").exists());
    }

    #[test]
    fn test_on_failure_fallback_recovers_step() {
        let mut s = step(Some("false"));
        s.on_failure = Some("true".to_string());

        let tasks = single_task("recovered", vec![s]);
        let mut state = ExecutionState::new();

        let result = execute_task("recovered", &tasks, &mut state, &quiet_ctx());
        assert!(result.is_ok());
        assert!(state.is_executed("recovered"));
    }

    #[test]
    fn test_failing_fallback_fails_task() {
        let mut s = step(Some("false"));
        s.on_failure = Some("false".to_string());

        let tasks = single_task("unrecovered", vec![s]);
        let mut state = ExecutionState::new();

        let result = execute_task("unrecovered", &tasks, &mut state, &quiet_ctx());
        assert!(matches!(result, Err(ExecutionError::StepFailed { .. })));
        assert!(state.is_failed("unrecovered"));
    }

    #[test]
    fn test_on_success_failure_does_not_fail_step() {
        let mut s = step(Some("true"));
        s.on_success = Some("false".to_string());

        let tasks = single_task("side", vec![s]);
        let mut state = ExecutionState::new();

        let result = execute_task("side", &tasks, &mut state, &quiet_ctx());
        assert!(result.is_ok());
    }

    #[test]
    fn test_ignore_errors_continues() {
        let mut first = step(Some("false"));
        first.ignore_errors = true;

        let tasks = single_task("lenient", vec![first, step(Some("true"))]);
        let mut state = ExecutionState::new();

        let result = execute_task("lenient", &tasks, &mut state, &quiet_ctx());
        assert!(result.is_ok());
        assert!(state.is_executed("lenient"));
    }

    #[test]
    fn test_actions_fail_fast() {
        use tempfile::TempDir;

        let temp_dir = TempDir::new().unwrap();
        let mut s = step(None);
        s.actions = vec![
            "touch first.txt".to_string(),
            "false".to_string(),
            "touch third.txt".to_string(),
        ];

        let tasks = single_task("batch", vec![s]);
        let mut state = ExecutionState::new();
        let ctx = quiet_ctx().with_working_dir(temp_dir.path().to_path_buf());

        let result = execute_task("batch", &tasks, &mut state, &ctx);
        assert!(matches!(result, Err(ExecutionError::StepFailed { .. })));
        assert!(temp_dir.path().join("first.txt").exists());
        assert!(!temp_dir.path().join("third.txt").exists());
    }

    #[test]
    fn test_noop_step_succeeds() {
        let tasks = single_task("marker", vec![step(None)]);
        let mut state = ExecutionState::new();

        let result = execute_task("marker", &tasks, &mut state, &quiet_ctx());
        assert!(result.is_ok());
    }
}
