//! Conversation history

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde::Serialize;

use crate::models::{
    ConversationSummary, LabelBreakdown, MoodShift, StatementAnalysis, TrendPoint,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Bot,
}

/// One entry of the conversation history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub timestamp: DateTime<Utc>,
    pub speaker: Speaker,
    pub text: String,
    /// Present on user messages
    pub sentiment: Option<StatementAnalysis>,
}

/// Ordered, append-only message history
#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<Message>,
    started_at: DateTime<Utc>,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

impl Conversation {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            started_at: Utc::now(),
        }
    }

    pub fn add_message(
        &mut self,
        speaker: Speaker,
        text: impl Into<String>,
        sentiment: Option<StatementAnalysis>,
    ) {
        self.messages.push(Message {
            timestamp: Utc::now(),
            speaker,
            text: text.into(),
            sentiment,
        });
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn user_messages(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter().filter(|m| m.speaker == Speaker::User)
    }

    /// User-authored texts in chronological order
    pub fn user_texts(&self) -> Vec<&str> {
        self.user_messages().map(|m| m.text.as_str()).collect()
    }

    pub fn last_bot_message(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.speaker == Speaker::Bot)
            .map(|m| m.text.as_str())
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Drop all history and restart the clock
    pub fn clear(&mut self) {
        self.messages.clear();
        self.started_at = Utc::now();
    }
}

/// Snapshot of a conversation and its sentiment analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationReport {
    pub duration_seconds: f64,
    pub total_messages: usize,
    pub user_messages: usize,
    pub bot_messages: usize,
    pub overall_sentiment: ConversationSummary,
    pub sentiment_distribution: LabelBreakdown<usize>,
    pub trend_data: Vec<TrendPoint>,
    pub mood_shifts: Vec<MoodShift>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}
