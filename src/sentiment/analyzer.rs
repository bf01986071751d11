//! Statement analysis and conversation-level aggregation

use std::sync::Arc;

use crate::models::{ConversationSummary, MessageDetail, RawScore, SentimentLabel, StatementAnalysis};
use crate::sentiment::classifier::Thresholds;
use crate::sentiment::scorer::PolarityScorer;

/// Sentiment analyzer over an injected polarity scorer
///
/// Holds no mutable state: every method recomputes from its inputs, so
/// repeated calls with the same texts give the same results.
#[derive(Clone)]
pub struct SentimentAnalyzer {
    scorer: Arc<dyn PolarityScorer>,
    thresholds: Thresholds,
}

impl SentimentAnalyzer {
    /// Create an analyzer using the default thresholds
    pub fn new(scorer: Arc<dyn PolarityScorer>) -> Self {
        Self {
            scorer,
            thresholds: Thresholds::default(),
        }
    }

    /// Use custom classification thresholds
    #[must_use]
    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    pub fn scorer_name(&self) -> &str {
        self.scorer.name()
    }

    pub(crate) fn classify(&self, compound: f64) -> SentimentLabel {
        self.thresholds.classify(compound)
    }

    /// Analyze a single statement
    ///
    /// Blank text is Neutral with a zero score and never reaches the scorer.
    pub fn analyze_statement(&self, text: &str) -> StatementAnalysis {
        if text.trim().is_empty() {
            return StatementAnalysis {
                text: text.to_string(),
                score: RawScore::neutral(),
                label: SentimentLabel::Neutral,
            };
        }

        let score = self.scorer.polarity_scores(text);
        StatementAnalysis {
            text: text.to_string(),
            score,
            label: self.classify(score.compound),
        }
    }

    /// Analyze every text in order
    pub fn analyze_all<S: AsRef<str>>(&self, texts: &[S]) -> Vec<StatementAnalysis> {
        texts
            .iter()
            .map(|text| self.analyze_statement(text.as_ref()))
            .collect()
    }

    /// Overall sentiment of user messages, weighted by message length
    ///
    /// Each message weighs `max(1, floor(sqrt(word_count)))`, so long
    /// messages count for more with diminishing returns.
    pub fn conversation_sentiment<S: AsRef<str>>(&self, user_texts: &[S]) -> ConversationSummary {
        if user_texts.is_empty() {
            return ConversationSummary::empty();
        }

        let mut details = Vec::with_capacity(user_texts.len());
        let mut weighted_sum = 0.0;
        let mut total_weight = 0.0;

        for text in user_texts {
            let text = text.as_ref();
            let info = self.analyze_statement(text);
            let weight = message_weight(text);

            weighted_sum += info.compound() * f64::from(weight);
            total_weight += f64::from(weight);
            details.push(MessageDetail {
                compound: info.compound(),
                label: info.label,
                text: info.text,
                weight,
            });
        }

        let compound = if total_weight > 0.0 {
            weighted_sum / total_weight
        } else {
            0.0
        };

        ConversationSummary {
            compound,
            label: self.classify(compound),
            details,
            message_count: user_texts.len(),
        }
    }
}

/// `max(1, floor(sqrt(word_count)))` over whitespace-delimited tokens
pub fn message_weight(text: &str) -> u32 {
    let word_count = text.split_whitespace().count();
    ((word_count as f64).sqrt().floor() as u32).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::testing::{CountingScorer, FixedScorer};

    fn analyzer(scorer: FixedScorer) -> SentimentAnalyzer {
        SentimentAnalyzer::new(Arc::new(scorer))
    }

    // ====== Statement Tests ======

    #[test]
    fn test_blank_text_skips_scorer() {
        let scorer = Arc::new(CountingScorer::new(0.9));
        let analyzer = SentimentAnalyzer::new(scorer.clone());

        for text in ["", "   ", "\t\n"] {
            let result = analyzer.analyze_statement(text);
            assert_eq!(result.text, text);
            assert_eq!(result.score, RawScore::neutral());
            assert_eq!(result.label, SentimentLabel::Neutral);
        }
        assert_eq!(scorer.calls(), 0);

        analyzer.analyze_statement("hello");
        assert_eq!(scorer.calls(), 1);
    }

    #[test]
    fn test_statement_preserves_untrimmed_text() {
        let analyzer = analyzer(FixedScorer::new(&[("  great  ", 0.8)]));
        let result = analyzer.analyze_statement("  great  ");
        assert_eq!(result.text, "  great  ");
        assert_eq!(result.label, SentimentLabel::Positive);
        assert_eq!(result.compound(), 0.8);
    }

    #[test]
    fn test_statement_uses_custom_thresholds() {
        let analyzer = analyzer(FixedScorer::new(&[("meh", 0.3)]))
            .with_thresholds(Thresholds::new(0.5, -0.5));
        assert_eq!(analyzer.analyze_statement("meh").label, SentimentLabel::Neutral);
    }

    // ====== Weight Tests ======

    #[test]
    fn test_message_weight() {
        assert_eq!(message_weight(""), 1);
        assert_eq!(message_weight("one"), 1);
        assert_eq!(message_weight("I love it"), 1);
        assert_eq!(message_weight("one two three four"), 2);
        assert_eq!(message_weight("  spaced   out\twords  here  "), 2);
        assert_eq!(message_weight(&"word ".repeat(100)), 10);
    }

    // ====== Conversation Tests ======

    #[test]
    fn test_empty_conversation() {
        let analyzer = analyzer(FixedScorer::new(&[]));
        let empty: [&str; 0] = [];
        assert_eq!(analyzer.conversation_sentiment(&empty), ConversationSummary::empty());
    }

    #[test]
    fn test_equal_weights_give_plain_mean() {
        let analyzer = analyzer(FixedScorer::new(&[("I love it", 0.6), ("I hate it", -0.8)]));
        let summary = analyzer.conversation_sentiment(&["I love it", "I hate it"]);

        assert!((summary.compound - (-0.1)).abs() < 1e-12);
        assert_eq!(summary.label, SentimentLabel::Negative);
        assert_eq!(summary.message_count, 2);
        assert_eq!(summary.details.len(), 2);
        assert_eq!(summary.details[0].text, "I love it");
        assert_eq!(summary.details[1].text, "I hate it");
        assert!(summary.details.iter().all(|d| d.weight == 1));
    }

    #[test]
    fn test_longer_messages_weigh_more() {
        let long = "this has exactly nine words in it right here";
        let analyzer = analyzer(FixedScorer::new(&[("ok", 0.9), (long, -0.3)]));
        let summary = analyzer.conversation_sentiment(&["ok", long]);

        // weights 1 and 3
        let expected = (0.9 - 0.3 * 3.0) / 4.0;
        assert!((summary.compound - expected).abs() < 1e-12);
        assert_eq!(summary.details[1].weight, 3);
        assert_eq!(summary.label, SentimentLabel::Neutral);
    }

    #[test]
    fn test_blank_messages_count_with_zero_score() {
        let analyzer = analyzer(FixedScorer::new(&[("yay", 0.5)]));
        let summary = analyzer.conversation_sentiment(&["yay", "   "]);
        assert_eq!(summary.message_count, 2);
        assert!((summary.compound - 0.25).abs() < 1e-12);
        assert_eq!(summary.details[1].label, SentimentLabel::Neutral);
    }

    #[test]
    fn test_conversation_is_idempotent() {
        let analyzer = analyzer(FixedScorer::new(&[("a", 0.4), ("b", -0.2)]));
        let texts = vec!["a".to_string(), "b".to_string()];
        assert_eq!(
            analyzer.conversation_sentiment(&texts),
            analyzer.conversation_sentiment(&texts)
        );
    }
}
