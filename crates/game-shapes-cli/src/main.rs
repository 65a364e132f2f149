//! `shapes`: inspect particle profile files and thickness strings.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level as TraceLevel;
use tracing_subscriber::FmtSubscriber;

mod commands;

use commands::{profile, thickness};

#[derive(Parser)]
#[command(name = "shapes")]
#[command(
    about = "Inspect particle emission profiles and layout thickness values",
    long_about = None
)]
#[command(version)]
struct Cli {
    /// Enable debug logging (overrides SHAPES_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode and re-encode profile JSON
    Profile {
        #[command(subcommand)]
        command: profile::ProfileCommands,
    },

    /// Parse and format thickness values
    Thickness {
        #[command(subcommand)]
        command: thickness::ThicknessCommands,
    },
}

fn log_level(verbose: bool) -> TraceLevel {
    if verbose {
        return TraceLevel::DEBUG;
    }
    match std::env::var("SHAPES_LOG")
        .unwrap_or_else(|_| "warn".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "info" => TraceLevel::INFO,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::WARN,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level(cli.verbose))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Profile { command } => profile::run(command),
        Commands::Thickness { command } => thickness::run(command),
    }
}
