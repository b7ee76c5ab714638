//! Binlens CLI - explore and run executables from the system bin directories
//!
//! Thin front end over binlens-core: lists the discovered catalog, runs a
//! command line through the safe executor, and renders whatever comes back.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use console::style;

use binlens_core::catalog::{self, CommandCatalog};
use binlens_core::config::ConfigManager;
use binlens_core::executor::{ExecutionResult, Executor, QuickAction};

#[derive(Parser)]
#[command(name = "binlens")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Explore and run executables from the system bin directories", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path (defaults to the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List discovered executables
    List {
        /// Only show names containing this substring (case-insensitive)
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// Execute a command line through the safe executor
    Run {
        /// Command and arguments, joined into one command line
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,

        /// Override the configured timeout (seconds)
        #[arg(short, long)]
        timeout: Option<u64>,
    },

    /// Show help text for a command (best effort)
    Info {
        /// Command name
        command: String,
    },

    /// Show the full path of a discovered executable
    Which {
        /// Command name
        command: String,
    },

    /// Run a canned quick action, or list them
    Quick {
        /// Action slug; omit to list the available actions
        action: Option<String>,
    },

    /// Show the active configuration
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Quiet by default so command output stays clean; --verbose raises it
    tracing_subscriber::fmt()
        .with_env_filter(if cli.verbose {
            "info,binlens_core=debug"
        } else {
            "warn"
        })
        .init();

    let manager = match &cli.config {
        Some(path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    }
    .context("failed to load configuration")?;
    let config = manager.config().clone();

    match cli.command {
        Commands::List { filter } => {
            let catalog = CommandCatalog::discover(&config.discovery);
            let catalog = match &filter {
                Some(pattern) => catalog.filter(pattern),
                None => catalog,
            };

            println!(
                "{}",
                style(format!("{} commands found", catalog.len())).bold()
            );
            for name in &catalog {
                println!("{}", name);
            }
        }

        Commands::Run { command, timeout } => {
            let command_line = command.join(" ");
            let executor = Executor::with_config(config.executor);

            let result = match timeout {
                Some(secs) => {
                    executor
                        .execute_with_timeout(&command_line, std::time::Duration::from_secs(secs))
                        .await
                }
                None => executor.execute(&command_line).await,
            };
            render_result(result);
        }

        Commands::Info { command } => {
            let executor = Executor::with_config(config.executor);
            println!("{}", executor.help(&command).await);
        }

        Commands::Which { command } => match catalog::resolve(&config.discovery, &command) {
            Some(path) => println!("{}", path.display()),
            None => {
                eprintln!("{}", style(format!("{}: not found", command)).red());
                std::process::exit(1);
            }
        },

        Commands::Quick { action } => match action {
            None => {
                for action in QuickAction::all() {
                    println!(
                        "{:<12} {:<12} {}",
                        style(action.slug).bold(),
                        action.label,
                        style(action.command).dim()
                    );
                }
            }
            Some(slug) => match QuickAction::find(&slug) {
                Some(action) => {
                    let executor = Executor::with_config(config.executor);
                    let result = executor.execute(action.command).await;
                    render_result(result);
                }
                None => {
                    eprintln!("{}", style(format!("unknown quick action: {}", slug)).red());
                    std::process::exit(1);
                }
            },
        },

        Commands::Config => {
            println!("# {}", manager.config_path().display());
            print!("{}", manager.to_toml_string()?);
        }
    }

    Ok(())
}

/// Print an execution result the way the front end renders it: stdout
/// verbatim, stderr as informational output, refusals and failures styled.
fn render_result(result: ExecutionResult) {
    match result {
        ExecutionResult::Completed {
            stdout,
            stderr,
            exit_code,
        } => {
            if !stdout.is_empty() {
                print!("{}", stdout);
                if !stdout.ends_with('\n') {
                    println!();
                }
            }
            if !stderr.is_empty() {
                eprint!("{}", style(&stderr).yellow());
                if !stderr.ends_with('\n') {
                    eprintln!();
                }
            }
            if let Some(code) = exit_code {
                if code != 0 {
                    tracing::info!(code, "command exited nonzero");
                }
            }
        }
        ExecutionResult::Refused { reason } => {
            eprintln!("{}", style(reason).red().bold());
            std::process::exit(2);
        }
        ExecutionResult::Failed { message } => {
            eprintln!("{}", style(message).red());
            std::process::exit(1);
        }
    }
}
