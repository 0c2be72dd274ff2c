//! Execution context for task running
//!
//! The context carries the settings every command invocation needs and the
//! console-reporting helpers the engine calls as tasks and steps progress.

use crate::ui;
use std::env;
use std::path::PathBuf;

/// Execution context that tracks settings during task execution
pub struct Context {
    /// Current working directory for commands
    pub working_dir: PathBuf,

    /// Interpreter the command strings are delegated to (e.g., ["sh", "-c"])
    pub interpreter: Vec<String>,

    /// Verbosity level
    pub verbosity: Verbosity,
}

/// Verbosity levels for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Silent = 0,
    Quiet = 1,
    Normal = 2,
    Verbose = 3,
}

impl Context {
    /// Create a new context with default settings
    pub fn new() -> Self {
        Context {
            working_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            interpreter: vec!["sh".to_string(), "-c".to_string()],
            verbosity: Verbosity::Normal,
        }
    }

    /// Create a context with a specific working directory
    pub fn with_working_dir(mut self, dir: PathBuf) -> Self {
        self.working_dir = dir;
        self
    }

    /// Set the interpreter
    pub fn with_interpreter(mut self, interpreter: Vec<String>) -> Self {
        self.interpreter = interpreter;
        self
    }

    /// Set verbosity level
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Print info message
    pub fn print_info(&self, message: &str) {
        if self.verbosity >= Verbosity::Normal {
            eprintln!("{}", message);
        }
    }

    /// Print error message
    pub fn print_error(&self, message: &str) {
        if self.verbosity >= Verbosity::Quiet {
            eprintln!("[ERROR] {}", message);
        }
    }

    /// Print debug message (only in verbose mode)
    pub fn print_debug(&self, message: &str) {
        if self.verbosity >= Verbosity::Verbose {
            eprintln!("[DEBUG] {}", message);
        }
    }

    /// Print the banner for a starting run target
    pub fn print_run_header(&self, target: &str) {
        self.print_info(&format!("\n{}", ui::header(&format!("Executing: {}", target))));
    }

    /// Print the resolved execution order
    pub fn print_order(&self, order: &[String]) {
        self.print_info(&ui::order_line(order));
    }

    /// Print the banner for a starting task
    pub fn print_task_start(&self, name: &str, description: &str) {
        self.print_info(&format!("\n{}", ui::task_banner(name, description)));
    }

    /// Print a step progress marker
    pub fn print_step(&self, step_name: &str) {
        self.print_info(&ui::step_marker(step_name));
    }

    /// Print the notice that a fallback command is running
    pub fn print_fallback(&self) {
        self.print_info(&ui::fallback_notice());
    }

    /// Print the notice that a failing step was ignored
    pub fn print_step_ignored(&self, step_name: &str) {
        self.print_info(&ui::ignored_notice(step_name));
    }

    /// Print a task skip notice
    pub fn print_task_skip(&self, name: &str) {
        self.print_info(&ui::skip_line(name));
    }

    /// Print a task success banner
    pub fn print_task_success(&self, name: &str) {
        self.print_info(&ui::success_line(name));
    }

    /// Print a task failure banner
    pub fn print_task_failure(&self, name: &str) {
        self.print_error(&ui::failure_line(name));
    }

    /// Print the final halted-run message
    pub fn print_run_halted(&self, task_name: &str) {
        self.print_error(&ui::halted_line(task_name));
    }

    /// Print the final all-succeeded message
    pub fn print_run_complete(&self) {
        self.print_info(&format!("\n{}", ui::all_done_line()));
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
