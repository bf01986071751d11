//! CLI output formatting utilities
//!
//! This module provides consistent, colored output for the `LiaBot` CLI

use colored::ColoredString;
use colored::Colorize;

use crate::chatbot::ConversationReport;
use crate::models::{
    ConversationSummary, MoodShift, SentimentLabel, SentimentStatistics, StatementAnalysis,
    TrendPoint,
};
use crate::AppConfig;

/// Safely truncate a string at character boundary (not byte boundary)
///
/// This prevents panics when truncating strings with multi-byte UTF-8 characters (emojis, etc.)
#[must_use]
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let truncated: String = s.chars().take(max_chars).collect();
        format!("{truncated}...")
    } else {
        s.to_string()
    }
}

/// Label text colored by polarity
pub fn colored_label(label: SentimentLabel) -> ColoredString {
    match label {
        SentimentLabel::Positive => label.as_str().green(),
        SentimentLabel::Negative => label.as_str().red(),
        SentimentLabel::Neutral => label.as_str().yellow(),
    }
}

/// Compound score colored by the label it maps to
fn colored_compound(compound: f64, label: SentimentLabel) -> ColoredString {
    let text = format!("{compound:+.3}");
    match label {
        SentimentLabel::Positive => text.green(),
        SentimentLabel::Negative => text.red(),
        SentimentLabel::Neutral => text.yellow(),
    }
}

/// Sentiment line shown under each chat message
pub fn print_message_sentiment(analysis: &StatementAnalysis) {
    println!(
        "   {} {} (compound {})",
        analysis.label.emoji(),
        colored_label(analysis.label),
        colored_compound(analysis.compound(), analysis.label)
    );
}

pub fn print_bot_reply(bot_name: &str, reply: &str) {
    println!("{}: {reply}", bot_name.cyan().bold());
}

/// Print per-statement analysis results
pub fn print_analysis_list(analyses: &[StatementAnalysis]) {
    println!("🔍 Analyzed {} statement(s):", analyses.len());
    for analysis in analyses {
        println!();
        println!("  \"{}\"", truncate_str(&analysis.text, 80));
        println!(
            "  {} {} | compound {} | pos {:.3} neu {:.3} neg {:.3}",
            analysis.label.emoji(),
            colored_label(analysis.label),
            colored_compound(analysis.compound(), analysis.label),
            analysis.score.pos,
            analysis.score.neu,
            analysis.score.neg
        );
    }
}

/// Print the overall (length-weighted) conversation sentiment
pub fn print_conversation_summary(summary: &ConversationSummary) {
    println!("{}", "💬 Overall Sentiment".bold());
    if summary.message_count == 0 {
        println!("  No user messages yet.");
        return;
    }
    println!(
        "  {} {} (weighted compound {})",
        summary.label.emoji(),
        colored_label(summary.label),
        colored_compound(summary.compound, summary.label)
    );
    println!("  Messages analyzed: {}", summary.message_count);
}

/// Statement-level breakdown with each message's weight
pub fn print_statement_details(summary: &ConversationSummary) {
    println!("{}", "📝 Statement-level Sentiment".bold());
    for (i, detail) in summary.details.iter().enumerate() {
        println!("  {}. {}", i + 1, truncate_str(&detail.text, 60));
        println!(
            "     -> {} {} (score {}, weight {})",
            colored_label(detail.label),
            detail.label.emoji(),
            colored_compound(detail.compound, detail.label),
            detail.weight
        );
    }
}

/// Print the moving-average trend as a compact table
pub fn print_trend(trend: &[TrendPoint], window: usize) {
    println!("{}", format!("📈 Sentiment Trend (window {window})").bold());
    if trend.is_empty() {
        println!("  No data.");
        return;
    }
    for point in trend {
        println!(
            "  #{:<3} {} {}",
            point.index + 1,
            colored_compound(point.window_average, point.label),
            colored_label(point.label)
        );
    }
}

pub fn print_mood_shifts(shifts: &[MoodShift]) {
    println!("{}", "🔄 Mood Shifts".bold());
    if shifts.is_empty() {
        println!("  No significant mood shifts detected.");
        return;
    }
    for shift in shifts {
        println!(
            "  Message {}: {} -> {} (change {:.3})",
            shift.message_index,
            colored_label(shift.from_label),
            colored_label(shift.to_label),
            shift.change_magnitude
        );
        println!("    from: \"{}\"", truncate_str(&shift.from_message, 60));
        println!("    to:   \"{}\"", truncate_str(&shift.to_message, 60));
    }
}

/// Print statistics
pub fn print_statistics(stats: &SentimentStatistics) {
    println!("{}", "📊 Sentiment Statistics".bold());
    println!("===================");

    if stats.total_messages == 0 {
        println!("  No user messages yet.");
        return;
    }

    println!("  Total messages: {}", stats.total_messages);
    for (label, count) in stats.counts.iter() {
        println!(
            "  {} {:<8}: {} ({:.1}%)",
            label.emoji(),
            colored_label(label),
            count,
            stats.percentages[label]
        );
    }

    println!();
    println!("  Average compound: {:+.3}", stats.average_compound);
    println!("  Std deviation:    {:.3}", stats.std_dev_compound);
    println!(
        "  Range:            {:+.3} .. {:+.3}",
        stats.min_compound, stats.max_compound
    );
}

/// Print a full conversation report
pub fn print_report(report: &ConversationReport, window: usize) {
    println!("{}", "📋 Conversation Summary".bold());
    println!("===================");
    println!(
        "  Messages: {} total ({} from you, {} from the bot)",
        report.total_messages, report.user_messages, report.bot_messages
    );
    println!("  Duration: {:.1}s", report.duration_seconds);
    println!();

    if !report.overall_sentiment.details.is_empty() {
        print_statement_details(&report.overall_sentiment);
        println!();
    }
    print_conversation_summary(&report.overall_sentiment);
    println!();

    println!("{}", "🥧 Distribution".bold());
    for (label, count) in report.sentiment_distribution.iter() {
        println!("  {} {:<8}: {}", label.emoji(), colored_label(label), count);
    }
    println!();

    print_trend(&report.trend_data, window);
    println!();
    print_mood_shifts(&report.mood_shifts);
}

pub fn print_chat_banner(bot_name: &str) {
    println!();
    println!("╔════════════════════════════════════════════════════════════════╗");
    println!("║  {:<62}║", format!("🤖 {bot_name} - sentiment-aware chat"));
    println!("║  Type 'help' for commands, 'exit' to leave                     ║");
    println!("╚════════════════════════════════════════════════════════════════╝");
    println!();
}

pub fn print_chat_help() {
    println!("{}", "Available commands:".bold());
    println!("  summary       Show the conversation summary so far");
    println!("  stats         Show sentiment statistics");
    println!("  save [FILE]   Save the conversation as JSON");
    println!("  clear         Clear the conversation history");
    println!("  help          Show this help");
    println!("  exit          End the chat (also 'quit' or 'bye')");
}

/// Print configuration
pub fn print_config(config: &AppConfig) {
    println!("📋 LiaBot Configuration:");
    println!();

    println!("📝 Logging:");
    println!("  Level: {}", config.logging.level);
    println!("  Directory: {}", config.logging.directory.display());
    println!("  Console: {}", config.logging.console);
    println!();

    println!("🧠 Scorer:");
    println!("  Backend: {:?}", config.scorer.backend);
    if let Some(path) = &config.scorer.lexicon_path {
        println!("  Lexicon: {}", path.display());
    }
    println!();

    println!("📐 Analysis:");
    println!("  Positive threshold: {}", config.analysis.positive_threshold);
    println!("  Negative threshold: {}", config.analysis.negative_threshold);
    println!("  Trend window: {}", config.trend_window());
    println!("  Min mood change: {}", config.min_mood_change());
    println!();

    println!("🤖 Bot:");
    println!("  Name: {}", config.bot_name());
    println!("  Export path: {}", config.export_path().display());
    match config.bot.seed {
        Some(seed) => println!("  Seed: {seed}"),
        None => println!("  Seed: random"),
    }
}

/// Print colored output functions
pub fn print_info(msg: &str) {
    println!("ℹ️  {msg}");
}

pub fn print_success(msg: &str) {
    println!("✅ {msg}");
}

pub fn print_warning(msg: &str) {
    println!("⚠️  {msg}");
}

pub fn print_error(msg: &str) {
    eprintln!("❌ {}", msg.red());
}

pub fn print_prompt(msg: &str) -> std::io::Result<()> {
    print!("{msg}");
    std::io::Write::flush(&mut std::io::stdout())
}
