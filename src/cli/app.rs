//! Main CLI application

use crate::config::{parse_config_auto, parse_config_file, validate_config, Config};
use crate::error::ConfigError;
use crate::runner::{run_targets, Context, Verbosity};
use crate::ui;
use anyhow::Context as _;
use clap::{Arg, ArgAction, ArgMatches, Command};
use clap_complete::Shell;
use std::path::PathBuf;

/// CLI application
pub struct App {
    /// The clap command
    command: Command,
    /// Parsed configuration
    config: Config,
}

impl App {
    /// Create a new app, discovering the configuration file automatically
    pub fn new() -> anyhow::Result<Self> {
        let (config, _config_path) =
            parse_config_auto().context("failed to load configuration")?;
        validate_config(&config)?;

        let command = build_command(&config);

        Ok(App { command, config })
    }

    /// Create app with a specific config file
    pub fn with_config_file(path: PathBuf) -> anyhow::Result<Self> {
        let config = parse_config_file(&path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?;
        validate_config(&config)?;

        let command = build_command(&config);

        Ok(App { command, config })
    }

    /// Run the application with command line arguments
    pub fn run(mut self) -> anyhow::Result<()> {
        let matches = self.command.clone().get_matches();

        if let Some(shell) = matches.get_one::<Shell>("completions").copied() {
            let name = self.command.get_name().to_string();
            clap_complete::generate(shell, &mut self.command, name, &mut std::io::stdout());
            return Ok(());
        }

        let verbosity = get_verbosity(&matches);

        if matches.get_flag("list") {
            println!("{}", ui::render_summaries(&self.config.summaries()));
            return Ok(());
        }

        if let Some(name) = matches.get_one::<String>("explain") {
            let task = self
                .config
                .task(name)
                .ok_or_else(|| ConfigError::TaskNotFound(name.clone()))?;
            println!("{}", ui::render_task_detail(name, task));
            return Ok(());
        }

        let targets: Vec<String> = matches
            .get_many::<String>("tasks")
            .map(|values| values.cloned().collect())
            .unwrap_or_default();

        if targets.is_empty() {
            // No tasks specified, show help
            self.command.print_help()?;
            println!();
            return Ok(());
        }

        // Create execution context
        let mut ctx = Context::new().with_verbosity(verbosity);

        // Set interpreter if specified in config
        if let Some(interpreter) = &self.config.interpreter {
            ctx = ctx.with_interpreter(interpreter.clone());
        }

        run_targets(&targets, &self.config, &ctx)?;

        Ok(())
    }
}

/// Build the clap command from configuration
fn build_command(config: &Config) -> Command {
    Command::new(config.name.clone().unwrap_or_else(|| "yamk".to_string()))
        .version(env!("CARGO_PKG_VERSION"))
        .about(
            config
                .description
                .clone()
                .unwrap_or_else(|| "A YAML-driven build task runner".to_string()),
        )
        .arg(
            Arg::new("tasks")
                .value_name("TASK")
                .num_args(0..)
                .help("Task names to execute, in order"),
        )
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("FILE")
                .help("Path to yamk.yml config file"),
        )
        .arg(
            Arg::new("list")
                .short('l')
                .long("list")
                .help("List all tasks with descriptions and dependencies")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("explain")
                .long("explain")
                .value_name("TASK")
                .help("Show full step information for one task"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only print command output and errors")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("silent")
                .short('s')
                .long("silent")
                .help("Print no output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("completions")
                .long("completions")
                .value_name("SHELL")
                .help("Generate shell completions")
                .value_parser(clap::value_parser!(Shell)),
        )
}

/// Get verbosity level from matches
fn get_verbosity(matches: &ArgMatches) -> Verbosity {
    if matches.get_flag("silent") {
        Verbosity::Silent
    } else if matches.get_flag("quiet") {
        Verbosity::Quiet
    } else if matches.get_flag("verbose") {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    }
}

/// Run the CLI application with provided arguments
pub fn run() -> anyhow::Result<()> {
    // Check if --file flag is provided first
    let args: Vec<String> = std::env::args().collect();
    let file_path = extract_file_arg(&args);

    let app = if let Some(path) = file_path {
        App::with_config_file(path)?
    } else {
        App::new()?
    };

    app.run()
}

/// Extract --file argument before clap parsing
fn extract_file_arg(args: &[String]) -> Option<PathBuf> {
    for i in 0..args.len() {
        if (args[i] == "--file" || args[i] == "-f") && i + 1 < args.len() {
            return Some(PathBuf::from(&args[i + 1]));
        }
    }
    None
}
