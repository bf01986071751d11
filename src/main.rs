use std::process::ExitCode;

use clap::Parser;
use liabot::cli::*;
use liabot::logging::init_logging_with_config;
use liabot::sentiment::ScorerHandle;
use liabot::sentiment::SentimentAnalyzer;
use liabot::sentiment::Thresholds;
use liabot::AppConfig;
use liabot::Result;
use tracing::error;
use tracing::info;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            print_error(&e.to_string());
            if let Some(hint) = e.remediation() {
                eprintln!("   Hint: {hint}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load_from(cli.config.as_deref())?;

    // Initialize logging; the guard flushes the file writer on drop
    let _guard = init_logging_with_config(&config.logging, cli.verbose)?;
    info!("Configuration loaded successfully");

    match cli.command.unwrap_or(Commands::Chat { name: None }) {
        Commands::Chat { name } => handle_chat_command(build_analyzer(&config)?, &config, name),
        Commands::Analyze { texts, json } => {
            handle_analyze_command(&build_analyzer(&config)?, &texts, json)
        }
        Commands::Report {
            file,
            window,
            min_change,
            json,
        } => handle_report_command(
            &build_analyzer(&config)?,
            &config,
            &file,
            window,
            min_change,
            json,
        ),
        Commands::Config => handle_config_command(&config),
    }
}

/// Load the configured scorer and wrap it with the configured thresholds
fn build_analyzer(config: &AppConfig) -> Result<SentimentAnalyzer> {
    let scorer = ScorerHandle::from_config(&config.scorer).get()?;
    let analyzer =
        SentimentAnalyzer::new(scorer).with_thresholds(Thresholds::from(&config.analysis));
    info!("Sentiment analyzer ready ({})", analyzer.scorer_name());
    Ok(analyzer)
}
