//! Command execution
//!
//! This module handles executing shell commands. Command strings are opaque:
//! they are handed to the configured interpreter verbatim and judged only by
//! exit status. Child stdout/stderr stream directly to the terminal.

use crate::error::{ExecutionError, ExecutionResult};
use crate::runner::Context;
use std::process::{Command as StdCommand, ExitStatus, Stdio};

/// Execute a command in the given context
///
/// Success means the process exited with status zero. A failure to launch
/// the interpreter is reported the same way as a non-zero exit.
pub fn execute_command(cmd: &str, ctx: &Context) -> ExecutionResult<()> {
    // Build the command
    let mut command = StdCommand::new(&ctx.interpreter[0]);

    // Add interpreter args (e.g., "-c" for sh/bash)
    if ctx.interpreter.len() > 1 {
        command.args(&ctx.interpreter[1..]);
    }

    // Add the actual command to execute
    command.arg(cmd);

    // Set working directory
    command.current_dir(&ctx.working_dir);

    // Set up stdio: command output streams through, nothing is captured
    command.stdin(Stdio::inherit());
    command.stdout(Stdio::inherit());
    command.stderr(Stdio::inherit());

    // Execute the command
    let status = command
        .status()
        .map_err(|_e| ExecutionError::CommandFailed(None))?;

    abort_if_interrupted(&status, ctx);

    // Check exit status
    if !status.success() {
        return Err(ExecutionError::CommandFailed(status.code()));
    }

    Ok(())
}

/// Abort the whole run when the operator interrupted the child
///
/// An interrupt is a signal to stop everything, not an ordinary command
/// failure; continuing with later steps would be meaningless.
#[cfg(unix)]
fn abort_if_interrupted(status: &ExitStatus, ctx: &Context) {
    use std::os::unix::process::ExitStatusExt;

    // SIGINT
    if status.signal() == Some(2) {
        ctx.print_error("Interrupted");
        std::process::exit(130);
    }
}

#[cfg(not(unix))]
fn abort_if_interrupted(_status: &ExitStatus, _ctx: &Context) {}
