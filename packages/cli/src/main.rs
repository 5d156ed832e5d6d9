mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{apply, init, show, validate, ApplyArgs, InitArgs, ShowArgs, ValidateArgs};
use tracing_subscriber::EnvFilter;

/// Lovelace CLI - structural editing for dashboard layouts
#[derive(Parser, Debug)]
#[command(name = "lovelace")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log mutation and file activity
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a new dashboard project
    Init(InitArgs),

    /// Print the view, section and card tree with their indices
    Show(ShowArgs),

    /// Apply one or more mutations to the dashboard
    Apply(ApplyArgs),

    /// Check the dashboard for conflicting view paths
    Validate(ValidateArgs),
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| match cli.command {
            Command::Init(args) => init(args, &cwd),
            Command::Show(args) => show(args, &cwd),
            Command::Apply(args) => apply(args, &cwd),
            Command::Validate(args) => validate(args, &cwd),
        });

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
