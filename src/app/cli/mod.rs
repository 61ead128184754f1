//! CLI Adapter.

mod list;
mod render;
mod session;
mod track;

use std::io::IsTerminal;
use std::path::PathBuf;

use crate::domain::AppError;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ordtrack")]
#[command(version)]
#[command(about = "Track order progress by order ID", long_about = None)]
struct Cli {
    /// Order table file (TOML). Defaults to the built-in table
    #[arg(long, global = true, value_name = "PATH")]
    orders: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up one order and show its progress
    #[clap(visible_alias = "t")]
    Track {
        /// Order ID (case and surrounding whitespace are ignored)
        id: String,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Track orders interactively until end of input
    #[clap(visible_alias = "s")]
    Session,
    /// List orders in the table
    #[clap(visible_alias = "ls")]
    List {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging();

    let orders = cli.orders.as_deref();
    let result: Result<i32, AppError> = match cli.command {
        Commands::Track { id, format } => track::run_track(&id, format, orders),
        Commands::Session => session::run_session(orders).map(|_| 0),
        Commands::List { format } => list::run_list(format, orders).map(|_| 0),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
