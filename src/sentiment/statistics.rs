//! Descriptive statistics over a message set

use crate::models::{LabelBreakdown, SentimentStatistics};
use crate::sentiment::analyzer::SentimentAnalyzer;

/// Sample standard deviation (divisor `n - 1`); 0.0 for fewer than two values
pub fn sample_std_dev(values: &[f64], mean: f64) -> f64 {
    if values.len() <= 1 {
        return 0.0;
    }
    let variance =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    variance.sqrt()
}

impl SentimentAnalyzer {
    /// Label counts, percentages and compound-score spread
    ///
    /// The average here is unweighted, unlike `conversation_sentiment`.
    pub fn sentiment_statistics<S: AsRef<str>>(&self, user_texts: &[S]) -> SentimentStatistics {
        if user_texts.is_empty() {
            return SentimentStatistics::empty();
        }

        let analyses = self.analyze_all(user_texts);
        let compounds: Vec<f64> = analyses.iter().map(|a| a.compound()).collect();
        let total = analyses.len();

        let counts = LabelBreakdown::from_labels(analyses.iter().map(|a| a.label));
        let percentage = |count: usize| count as f64 / total as f64 * 100.0;
        let percentages = LabelBreakdown {
            positive: percentage(counts.positive),
            negative: percentage(counts.negative),
            neutral: percentage(counts.neutral),
        };

        let average_compound = compounds.iter().sum::<f64>() / total as f64;

        SentimentStatistics {
            total_messages: total,
            counts,
            percentages,
            average_compound,
            std_dev_compound: sample_std_dev(&compounds, average_compound),
            min_compound: compounds.iter().copied().fold(f64::INFINITY, f64::min),
            max_compound: compounds.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::models::SentimentLabel;
    use crate::sentiment::testing::FixedScorer;

    fn analyzer(entries: &[(&str, f64)]) -> SentimentAnalyzer {
        SentimentAnalyzer::new(Arc::new(FixedScorer::new(entries)))
    }

    #[test]
    fn test_empty_statistics() {
        let empty: [&str; 0] = [];
        let stats = analyzer(&[]).sentiment_statistics(&empty);
        assert_eq!(stats, SentimentStatistics::empty());
    }

    #[test]
    fn test_single_message_has_zero_std_dev() {
        let stats = analyzer(&[("yes!", 0.4)]).sentiment_statistics(&["yes!"]);
        assert_eq!(stats.total_messages, 1);
        assert_eq!(stats.std_dev_compound, 0.0);
        assert_eq!(stats.average_compound, 0.4);
        assert_eq!(stats.min_compound, 0.4);
        assert_eq!(stats.max_compound, 0.4);
        assert_eq!(stats.percentages[SentimentLabel::Positive], 100.0);
    }

    #[test]
    fn test_counts_percentages_and_spread() {
        let analyzer = analyzer(&[("a", 0.5), ("b", -0.5), ("c", 0.0), ("d", 0.8)]);
        let stats = analyzer.sentiment_statistics(&["a", "b", "c", "d"]);

        assert_eq!(stats.total_messages, 4);
        assert_eq!(stats.counts.positive, 2);
        assert_eq!(stats.counts.negative, 1);
        assert_eq!(stats.counts.neutral, 1);
        assert_eq!(stats.percentages.positive, 50.0);
        assert_eq!(stats.percentages.negative, 25.0);
        assert!((stats.average_compound - 0.2).abs() < 1e-12);
        assert_eq!(stats.min_compound, -0.5);
        assert_eq!(stats.max_compound, 0.8);

        // sample variance: (0.09 + 0.49 + 0.04 + 0.36) / 3
        let expected_std = (0.98_f64 / 3.0).sqrt();
        assert!((stats.std_dev_compound - expected_std).abs() < 1e-9);
    }

    #[test]
    fn test_sample_std_dev() {
        assert_eq!(sample_std_dev(&[], 0.0), 0.0);
        assert_eq!(sample_std_dev(&[3.0], 3.0), 0.0);
        assert!((sample_std_dev(&[1.0, 3.0], 2.0) - 2f64.sqrt()).abs() < 1e-12);
    }
}
