//! CLI command definitions and argument parsing

use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

#[derive(Parser)]
#[command(name = "liabot")]
#[command(about = "LiaBot: a sentiment-aware chatbot and conversation analyzer")]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (default: config.toml, then config.example.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging for liabot, also on top of RUST_LOG
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Defaults to `chat`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive chat session
    Chat {
        /// Override the bot display name
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Analyze one or more statements
    Analyze {
        /// Statements to analyze (each argument is one statement)
        #[arg(required = true)]
        texts: Vec<String>,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Analyze a transcript file, one user message per line
    Report {
        /// Transcript file; blank lines are skipped
        file: PathBuf,
        /// Moving-average window (default from config)
        #[arg(short, long)]
        window: Option<usize>,
        /// Minimum compound change for a mood shift (default from config)
        #[arg(short, long)]
        min_change: Option<f64>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show current configuration
    Config,
}
