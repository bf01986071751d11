//! Compound score to label mapping

use serde::Deserialize;
use serde::Serialize;

use crate::config::AnalysisConfig;
use crate::models::SentimentLabel;

pub const POSITIVE_THRESHOLD: f64 = 0.05;
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Map a compound score to a label
///
/// Both thresholds are inclusive, so the neutral band is the open interval
/// `(neg_thresh, pos_thresh)`.
pub fn label_from_compound(compound: f64, pos_thresh: f64, neg_thresh: f64) -> SentimentLabel {
    if compound >= pos_thresh {
        SentimentLabel::Positive
    } else if compound <= neg_thresh {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

/// Positive/negative cutoff pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub positive: f64,
    pub negative: f64,
}

impl Thresholds {
    pub const fn new(positive: f64, negative: f64) -> Self {
        Self { positive, negative }
    }

    pub fn classify(&self, compound: f64) -> SentimentLabel {
        label_from_compound(compound, self.positive, self.negative)
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::new(POSITIVE_THRESHOLD, NEGATIVE_THRESHOLD)
    }
}

impl From<&AnalysisConfig> for Thresholds {
    fn from(config: &AnalysisConfig) -> Self {
        Self::new(config.positive_threshold, config.negative_threshold)
    }
}

/// Classify with the default thresholds
pub fn classify(compound: f64) -> SentimentLabel {
    Thresholds::default().classify(compound)
}
