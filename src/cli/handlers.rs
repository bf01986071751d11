//! CLI command handlers
//!
//! This module contains the command handlers for the LiaBot CLI

use std::io;
use std::io::BufRead;
use std::path::Path;
use std::path::PathBuf;

use tracing::info;
use tracing::warn;

use crate::chatbot::ChatSettings;
use crate::chatbot::Chatbot;
use crate::cli::output::*;
use crate::sentiment::SentimentAnalyzer;
use crate::AppConfig;
use crate::LiaBotError;
use crate::Result;

/// One line of chat input, after command recognition
#[derive(Debug, PartialEq, Eq)]
pub enum ChatInput {
    Empty,
    Exit,
    Summary,
    Stats,
    Save(Option<PathBuf>),
    Clear,
    Help,
    Message(String),
}

impl ChatInput {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Self::Empty;
        }

        let (command, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (trimmed, ""),
        };

        match command.to_lowercase().as_str() {
            "exit" | "quit" | "bye" if rest.is_empty() => Self::Exit,
            "summary" if rest.is_empty() => Self::Summary,
            "stats" if rest.is_empty() => Self::Stats,
            "clear" if rest.is_empty() => Self::Clear,
            "help" if rest.is_empty() => Self::Help,
            "save" if rest.is_empty() => Self::Save(None),
            "save" if !rest.contains(char::is_whitespace) => {
                Self::Save(Some(PathBuf::from(rest)))
            }
            _ => Self::Message(trimmed.to_string()),
        }
    }
}

/// Read one line; `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Ask a y/n question; end of input counts as "no"
fn confirm<R: BufRead>(input: &mut R, question: &str) -> Result<bool> {
    print_prompt(&format!("{question} (y/n): "))?;
    Ok(read_line(input)?
        .map(|answer| matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
        .unwrap_or(false))
}

fn save_conversation(bot: &Chatbot, path: &Path) {
    match bot.export().and_then(|export| export.save(path)) {
        Ok(()) => print_success(&format!("Conversation saved to '{}'", path.display())),
        Err(e) => {
            warn!("Failed to save conversation to {}: {}", path.display(), e);
            print_error(&format!("Error saving conversation: {e}"));
        }
    }
}

fn show_summary(bot: &Chatbot) -> Result<()> {
    let report = bot.report()?;
    println!();
    print_report(&report, bot.settings().trend_window);
    println!();
    Ok(())
}

/// Drive a chat session from `input` until exit or end of input
pub fn run_chat<R: BufRead>(bot: &mut Chatbot, mut input: R, export_path: &Path) -> Result<()> {
    print_chat_banner(bot.name());
    print_success(&format!("{} is ready. How are you feeling today?", bot.name()));

    loop {
        println!();
        print_prompt("You: ")?;

        let Some(line) = read_line(&mut input)? else {
            println!();
            print_info("End of input. Ending conversation...");
            break;
        };

        match ChatInput::parse(&line) {
            ChatInput::Empty => continue,
            ChatInput::Exit => {
                print_info("Ending conversation and analyzing sentiment...");
                break;
            }
            ChatInput::Summary => show_summary(bot)?,
            ChatInput::Stats => {
                println!();
                print_statistics(&bot.statistics());
            }
            ChatInput::Save(path) => {
                save_conversation(bot, path.as_deref().unwrap_or(export_path));
            }
            ChatInput::Clear => {
                if confirm(&mut input, "Clear conversation history?")? {
                    bot.clear();
                    print_success("Conversation cleared");
                } else {
                    print_info("Kept conversation history");
                }
            }
            ChatInput::Help => print_chat_help(),
            ChatInput::Message(text) => {
                let (reply, analysis) = bot.reply(&text);
                print_message_sentiment(&analysis);
                println!();
                print_bot_reply(bot.name(), &reply);
            }
        }
    }

    if bot.conversation().is_empty() {
        print_info("No messages exchanged.");
    } else {
        show_summary(bot)?;
        if confirm(&mut input, "Save conversation to file?")? {
            print_prompt(&format!(
                "Filename (default: {}): ",
                export_path.display()
            ))?;
            let path = read_line(&mut input)?
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty())
                .map_or_else(|| export_path.to_path_buf(), PathBuf::from);
            save_conversation(bot, &path);
        }
    }

    println!();
    print_success(&format!("Thank you for chatting with {}! Goodbye! 👋", bot.name()));
    Ok(())
}

/// Handle chat command
pub fn handle_chat_command(
    analyzer: SentimentAnalyzer,
    config: &AppConfig,
    name: Option<String>,
) -> Result<()> {
    let mut settings = ChatSettings::from(config);
    if let Some(name) = name {
        settings.bot_name = name;
    }

    info!("Starting chat session as {}", settings.bot_name);
    let mut bot = Chatbot::new(analyzer, settings);
    let stdin = io::stdin();
    run_chat(&mut bot, stdin.lock(), config.export_path())
}

/// Handle analyze command
pub fn handle_analyze_command(
    analyzer: &SentimentAnalyzer,
    texts: &[String],
    json: bool,
) -> Result<()> {
    let analyses = analyzer.analyze_all(texts);

    if json {
        println!("{}", serde_json::to_string_pretty(&analyses)?);
    } else {
        print_analysis_list(&analyses);
    }
    Ok(())
}

/// Non-blank lines of a transcript, trimmed
pub fn read_transcript(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Handle report command
pub fn handle_report_command(
    analyzer: &SentimentAnalyzer,
    config: &AppConfig,
    file: &Path,
    window: Option<usize>,
    min_change: Option<f64>,
    json: bool,
) -> Result<()> {
    let window = window.unwrap_or_else(|| config.trend_window());
    let min_change = min_change.unwrap_or_else(|| config.min_mood_change());
    if min_change.is_nan() || min_change < 0.0 {
        return Err(LiaBotError::Custom(format!(
            "--min-change must be non-negative, got {min_change}"
        )));
    }

    let texts = read_transcript(file)?;
    info!("Analyzing {} messages from {}", texts.len(), file.display());

    let summary = analyzer.conversation_sentiment(&texts);
    let trend = analyzer.sentiment_trend(&texts, window)?;
    let shifts = analyzer.detect_mood_shifts(&texts, min_change);
    let statistics = analyzer.sentiment_statistics(&texts);

    if json {
        let value = serde_json::json!({
            "overall_sentiment": summary,
            "trend": trend,
            "mood_shifts": shifts,
            "statistics": statistics,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("📄 Transcript: {} ({} messages)", file.display(), texts.len());
    println!();
    print_statement_details(&summary);
    println!();
    print_conversation_summary(&summary);
    println!();
    print_trend(&trend, window);
    println!();
    print_mood_shifts(&shifts);
    println!();
    print_statistics(&statistics);
    Ok(())
}

/// Handle config command
pub fn handle_config_command(config: &AppConfig) -> Result<()> {
    print_config(config);
    Ok(())
}
