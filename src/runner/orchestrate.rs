//! Run orchestration
//!
//! Given the requested top-level targets, resolves each one's dependency
//! order and executes the tasks sequentially through the engine. The whole
//! invocation shares one `ExecutionState`, so a task reached from several
//! targets still runs at most once. The first unrecoverable failure halts
//! the run; later targets are not attempted.

use crate::config::Config;
use crate::error::{ExecutionError, ExecutionResult};
use crate::runner::{execute_task, resolve, Context, ExecutionState};

/// Run one or more targets in the order given, fail-fast
pub fn run_targets(targets: &[String], config: &Config, ctx: &Context) -> ExecutionResult<()> {
    let mut state = ExecutionState::new();

    for target in targets {
        run_target(target, config, &mut state, ctx)?;
    }

    ctx.print_run_complete();
    Ok(())
}

/// Resolve and execute a single target with its transitive dependencies
pub fn run_target(
    target: &str,
    config: &Config,
    state: &mut ExecutionState,
    ctx: &Context,
) -> ExecutionResult<()> {
    let order = resolve(target, &config.tasks);
    if order.is_empty() {
        ctx.print_error(&format!("No such task: {}", target));
        return Err(ExecutionError::UnknownTask(target.to_string()));
    }

    ctx.print_run_header(target);
    ctx.print_order(&order);

    for task_name in &order {
        if let Err(e) = execute_task(task_name, &config.tasks, state, ctx) {
            ctx.print_run_halted(task_name);
            return Err(e);
        }
    }

    Ok(())
}
