//! Sentiment trend and mood-shift detection across a conversation

use crate::models::{MoodShift, TrendPoint};
use crate::sentiment::analyzer::SentimentAnalyzer;
use crate::LiaBotError;
use crate::Result;

/// Default trailing window for `sentiment_trend`
pub const DEFAULT_TREND_WINDOW: usize = 2;
/// Default minimum compound change for `detect_mood_shifts`
pub const DEFAULT_MIN_CHANGE: f64 = 0.3;

/// Trailing moving average
///
/// The window at index `i` covers `[max(0, i - window + 1), i]`: it never
/// looks ahead and shrinks near the start instead of padding.
pub fn moving_average(values: &[f64], window: usize) -> Result<Vec<f64>> {
    if window == 0 {
        return Err(LiaBotError::InvalidWindow(window));
    }

    Ok((0..values.len())
        .map(|i| {
            let start = (i + 1).saturating_sub(window);
            let slice = &values[start..=i];
            slice.iter().sum::<f64>() / slice.len() as f64
        })
        .collect())
}

impl SentimentAnalyzer {
    /// Moving-average sentiment, one point per message
    pub fn sentiment_trend<S: AsRef<str>>(
        &self,
        user_texts: &[S],
        window: usize,
    ) -> Result<Vec<TrendPoint>> {
        let compounds: Vec<f64> = user_texts
            .iter()
            .map(|text| self.analyze_statement(text.as_ref()).compound())
            .collect();

        let averages = moving_average(&compounds, window)?;

        Ok(averages
            .into_iter()
            .enumerate()
            .map(|(index, window_average)| TrendPoint {
                index,
                label: self.classify(window_average),
                window_average,
            })
            .collect())
    }

    /// Adjacent-message changes that are large or cross a label boundary
    pub fn detect_mood_shifts<S: AsRef<str>>(
        &self,
        user_texts: &[S],
        min_change: f64,
    ) -> Vec<MoodShift> {
        if user_texts.len() < 2 {
            return Vec::new();
        }

        let analyses = self.analyze_all(user_texts);

        analyses
            .windows(2)
            .enumerate()
            .filter_map(|(i, pair)| {
                let (prev, curr) = (&pair[0], &pair[1]);
                let change = (curr.compound() - prev.compound()).abs();

                (change >= min_change || prev.label != curr.label).then(|| MoodShift {
                    message_index: i + 2,
                    from_message: prev.text.clone(),
                    to_message: curr.text.clone(),
                    from_label: prev.label,
                    to_label: curr.label,
                    from_compound: prev.compound(),
                    to_compound: curr.compound(),
                    change_magnitude: change,
                })
            })
            .collect()
    }
}
