//! Sentiment scoring and aggregation engine
//!
//! ## Components
//! - `scorer`: polarity scorer trait, VADER and lexicon backends, once-initialized handle
//! - `classifier`: compound score to label thresholds
//! - `analyzer`: per-statement analysis and length-weighted conversation sentiment
//! - `trend`: moving-average trend and mood-shift detection
//! - `statistics`: label distribution and compound-score spread

pub mod analyzer;
pub mod classifier;
pub mod scorer;
pub mod statistics;
pub mod trend;

#[cfg(test)]
pub(crate) mod testing;

pub use analyzer::{message_weight, SentimentAnalyzer};
pub use classifier::{classify, label_from_compound, Thresholds, NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD};
pub use scorer::{load_scorer, LexiconScorer, PolarityScorer, ScorerHandle, VaderScorer};
pub use statistics::sample_std_dev;
pub use trend::{moving_average, DEFAULT_MIN_CHANGE, DEFAULT_TREND_WINDOW};
