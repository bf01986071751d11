//! Logging configuration for LiaBot

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

use crate::config::LoggingConfig;
use crate::Result;

/// Build the env filter for a level, scoped to this crate
///
/// `RUST_LOG` replaces the configured level. `verbose` still raises this
/// crate to debug on top of either one.
fn build_filter(level: &str, verbose: bool) -> EnvFilter {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,liabot={level}")));
    if !verbose {
        return filter;
    }
    match "liabot=debug".parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

/// Initialize logging with configuration
///
/// Logs always go to a daily rolling file; console output on stderr is
/// opt-in so it does not interleave with the chat prompt. The returned
/// guard must be held for the lifetime of the process to flush the file.
pub fn init_logging_with_config(config: &LoggingConfig, verbose: bool) -> Result<WorkerGuard> {
    // Create logs directory if it doesn't exist
    if !config.directory.exists() {
        std::fs::create_dir_all(&config.directory)?;
    }

    let level = if verbose { "debug" } else { config.level.as_str() };

    // Set up file appender for all logs
    let file_appender = tracing_appender::rolling::daily(&config.directory, "liabot.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(non_blocking)
        .with_ansi(false); // No colors in file

    let console_layer = (config.console || verbose).then(|| {
        fmt::layer()
            .with_target(true)
            .with_writer(std::io::stderr)
    });

    Registry::default()
        .with(build_filter(level, verbose))
        .with(file_layer)
        .with(console_layer)
        .init();

    tracing::info!(
        "Logging initialized with level: {} - writing to {}/liabot.log.YYYY-MM-DD",
        level,
        config.directory.display()
    );

    Ok(guard)
}

/// Initialize simple logging for testing
pub fn init_simple_logging() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(true)
        .with_max_level(tracing::Level::INFO)
        .with_test_writer()
        .try_init()
        .map_err(|e| crate::LiaBotError::Custom(e.to_string()))?;

    tracing::info!("Simple logging initialized");
    Ok(())
}
