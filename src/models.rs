//! Sentiment data model
//!
//! Every value here is a derived, read-only snapshot computed from an ordered
//! sequence of message texts. Nothing is updated incrementally.

use std::fmt;
use std::ops::Index;
use std::ops::IndexMut;

use serde::Deserialize;
use serde::Serialize;

/// Tolerance for `neg + neu + pos == 1`
pub const SCORE_SUM_TOLERANCE: f64 = 0.01;

/// Polarity scores for one text
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawScore {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    /// Signed overall polarity in [-1, 1]
    pub compound: f64,
}

impl RawScore {
    /// Score used for empty or whitespace-only text
    #[must_use]
    pub const fn neutral() -> Self {
        Self {
            neg: 0.0,
            neu: 1.0,
            pos: 0.0,
            compound: 0.0,
        }
    }

    /// Check the component scores sum to 1 within tolerance
    pub fn is_normalized(&self) -> bool {
        (self.neg + self.neu + self.pos - 1.0).abs() <= SCORE_SUM_TOLERANCE
    }
}

impl Default for RawScore {
    fn default() -> Self {
        Self::neutral()
    }
}

/// Discrete sentiment label derived from a compound score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Positive => "😊",
            Self::Negative => "😔",
            Self::Neutral => "😐",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One value per sentiment label
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LabelBreakdown<T> {
    #[serde(rename = "Positive")]
    pub positive: T,
    #[serde(rename = "Negative")]
    pub negative: T,
    #[serde(rename = "Neutral")]
    pub neutral: T,
}

impl<T> LabelBreakdown<T> {
    /// Iterate `(label, value)` in Positive, Negative, Neutral order
    pub fn iter(&self) -> impl Iterator<Item = (SentimentLabel, &T)> {
        SentimentLabel::ALL.into_iter().map(move |label| (label, &self[label]))
    }
}

impl LabelBreakdown<usize> {
    /// Tally labels
    pub fn from_labels<I: IntoIterator<Item = SentimentLabel>>(labels: I) -> Self {
        let mut counts = Self::default();
        for label in labels {
            counts[label] += 1;
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }
}

impl<T> Index<SentimentLabel> for LabelBreakdown<T> {
    type Output = T;

    fn index(&self, label: SentimentLabel) -> &T {
        match label {
            SentimentLabel::Positive => &self.positive,
            SentimentLabel::Negative => &self.negative,
            SentimentLabel::Neutral => &self.neutral,
        }
    }
}

impl<T> IndexMut<SentimentLabel> for LabelBreakdown<T> {
    fn index_mut(&mut self, label: SentimentLabel) -> &mut T {
        match label {
            SentimentLabel::Positive => &mut self.positive,
            SentimentLabel::Negative => &mut self.negative,
            SentimentLabel::Neutral => &mut self.neutral,
        }
    }
}

/// Analysis of a single statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementAnalysis {
    /// Original text, untrimmed
    pub text: String,
    #[serde(flatten)]
    pub score: RawScore,
    pub label: SentimentLabel,
}

impl StatementAnalysis {
    pub fn compound(&self) -> f64 {
        self.score.compound
    }
}

/// Per-message entry of a conversation summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageDetail {
    pub text: String,
    pub compound: f64,
    pub label: SentimentLabel,
    pub weight: u32,
}

/// Length-weighted sentiment of a whole conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationSummary {
    pub compound: f64,
    pub label: SentimentLabel,
    pub details: Vec<MessageDetail>,
    pub message_count: usize,
}

impl ConversationSummary {
    pub fn empty() -> Self {
        Self {
            compound: 0.0,
            label: SentimentLabel::Neutral,
            details: Vec::new(),
            message_count: 0,
        }
    }
}

/// Moving-average sentiment at one message index
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// 0-based message index
    pub index: usize,
    pub label: SentimentLabel,
    pub window_average: f64,
}

/// Significant sentiment change between adjacent messages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodShift {
    /// 1-based index of the later message
    pub message_index: usize,
    pub from_message: String,
    pub to_message: String,
    pub from_label: SentimentLabel,
    pub to_label: SentimentLabel,
    pub from_compound: f64,
    pub to_compound: f64,
    pub change_magnitude: f64,
}

impl MoodShift {
    pub fn description(&self) -> String {
        format!("Mood shifted from {} to {}", self.from_label, self.to_label)
    }

    pub fn is_label_change(&self) -> bool {
        self.from_label != self.to_label
    }
}

/// Descriptive statistics over a message set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentStatistics {
    pub total_messages: usize,
    pub counts: LabelBreakdown<usize>,
    pub percentages: LabelBreakdown<f64>,
    /// Unweighted mean
    pub average_compound: f64,
    /// Sample standard deviation (n - 1)
    pub std_dev_compound: f64,
    pub min_compound: f64,
    pub max_compound: f64,
}

impl SentimentStatistics {
    pub fn empty() -> Self {
        Self {
            total_messages: 0,
            counts: LabelBreakdown::default(),
            percentages: LabelBreakdown::default(),
            average_compound: 0.0,
            std_dev_compound: 0.0,
            min_compound: 0.0,
            max_compound: 0.0,
        }
    }
}
