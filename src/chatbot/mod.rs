//! Sentiment-aware chat session
//!
//! `Chatbot` owns the conversation history and a reply generator. Every
//! aggregate (report, statistics, mood shifts) is recomputed from the user
//! messages in the history on demand.

pub mod conversation;
pub mod export;
pub mod responses;

use chrono::Utc;
use tracing::debug;

pub use conversation::{Conversation, ConversationReport, Message, Speaker};
pub use export::{ConversationExport, ExportMetadata};
pub use responses::{classify_response, ResponseGenerator, ResponseKind};

use crate::config::AppConfig;
use crate::models::{LabelBreakdown, MoodShift, SentimentStatistics, StatementAnalysis};
use crate::sentiment::{SentimentAnalyzer, DEFAULT_MIN_CHANGE, DEFAULT_TREND_WINDOW};
use crate::Result;

/// Per-session knobs taken from `[bot]` and `[analysis]`
#[derive(Debug, Clone, PartialEq)]
pub struct ChatSettings {
    pub bot_name: String,
    pub trend_window: usize,
    pub min_change: f64,
    pub seed: Option<u64>,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            bot_name: "LiaBot".to_string(),
            trend_window: DEFAULT_TREND_WINDOW,
            min_change: DEFAULT_MIN_CHANGE,
            seed: None,
        }
    }
}

impl From<&AppConfig> for ChatSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            bot_name: config.bot_name().to_string(),
            trend_window: config.trend_window(),
            min_change: config.min_mood_change(),
            seed: config.bot.seed,
        }
    }
}

pub struct Chatbot {
    analyzer: SentimentAnalyzer,
    settings: ChatSettings,
    conversation: Conversation,
    responses: ResponseGenerator,
}

impl Chatbot {
    pub fn new(analyzer: SentimentAnalyzer, settings: ChatSettings) -> Self {
        let responses = match settings.seed {
            Some(seed) => ResponseGenerator::with_seed(seed),
            None => ResponseGenerator::new(),
        };
        Self {
            analyzer,
            settings,
            conversation: Conversation::new(),
            responses,
        }
    }

    pub fn name(&self) -> &str {
        &self.settings.bot_name
    }

    pub fn settings(&self) -> &ChatSettings {
        &self.settings
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn analyzer(&self) -> &SentimentAnalyzer {
        &self.analyzer
    }

    /// Analyze a user message, record it and the bot's reply
    pub fn reply(&mut self, text: &str) -> (String, StatementAnalysis) {
        let analysis = self.analyzer.analyze_statement(text);
        let response = self.responses.get_response(
            text,
            analysis.label,
            self.conversation.last_bot_message(),
        );
        debug!(
            "User message scored {:.3} ({})",
            analysis.compound(),
            analysis.label
        );

        self.conversation
            .add_message(Speaker::User, text, Some(analysis.clone()));
        self.conversation
            .add_message(Speaker::Bot, response.clone(), None);

        (response, analysis)
    }

    /// Full report over the session so far
    pub fn report(&self) -> Result<ConversationReport> {
        let user_texts = self.conversation.user_texts();
        let overall_sentiment = self.analyzer.conversation_sentiment(&user_texts);
        let trend_data = self
            .analyzer
            .sentiment_trend(&user_texts, self.settings.trend_window)?;
        let mood_shifts = self
            .analyzer
            .detect_mood_shifts(&user_texts, self.settings.min_change);

        let sentiment_distribution = LabelBreakdown::from_labels(
            overall_sentiment.details.iter().map(|detail| detail.label),
        );

        let start_time = self.conversation.started_at();
        let end_time = Utc::now();
        let duration_seconds = (end_time - start_time)
            .num_milliseconds()
            .max(0) as f64
            / 1000.0;

        let total_messages = self.conversation.len();
        let user_messages = user_texts.len();

        Ok(ConversationReport {
            duration_seconds,
            total_messages,
            user_messages,
            bot_messages: total_messages - user_messages,
            overall_sentiment,
            sentiment_distribution,
            trend_data,
            mood_shifts,
            start_time,
            end_time,
        })
    }

    pub fn statistics(&self) -> SentimentStatistics {
        self.analyzer
            .sentiment_statistics(&self.conversation.user_texts())
    }

    pub fn mood_shifts(&self) -> Vec<MoodShift> {
        self.analyzer
            .detect_mood_shifts(&self.conversation.user_texts(), self.settings.min_change)
    }

    /// Forget the history; settings and RNG state are kept
    pub fn clear(&mut self) {
        self.conversation.clear();
        debug!("Conversation history cleared");
    }

    pub fn export(&self) -> Result<ConversationExport> {
        Ok(ConversationExport {
            conversation: self.conversation.messages().to_vec(),
            summary: self.report()?,
            metadata: ExportMetadata {
                bot_name: self.settings.bot_name.clone(),
                export_time: Utc::now(),
            },
        })
    }
}
