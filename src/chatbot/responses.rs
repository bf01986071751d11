//! Template-based reply generation
//!
//! Replies depend on simple content cues first (gratitude, short answers,
//! stress, progress) and fall back to the message's sentiment label.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::models::SentimentLabel;

const POSITIVE: &[&str] = &[
    "That's wonderful to hear! 😊 What made your day so good?",
    "I'm so glad to hear that! 🌟 Tell me more!",
    "Fantastic! It's great to hear positive news.",
    "Awesome! What specifically made you feel happy?",
    "That's excellent! 🌈",
];

const NEGATIVE: &[&str] = &[
    "I'm sorry you're feeling that way. 😔 Want to talk about it?",
    "That sounds tough. I'm here to listen if you want to share more.",
    "I understand it's hard. What can I do to support you?",
    "That must be challenging. Remember, it's okay to feel this way.",
    "I'm here for you. Take your time.",
];

const NEUTRAL: &[&str] = &[
    "Thanks for sharing. What would you like to discuss?",
    "I understand. Tell me more about what's on your mind.",
    "Got it. What's happening with you today?",
    "Okay. How are you feeling about that?",
];

const SHORT_RESPONSE: &[&str] = &[
    "Got it. Tell me more.",
    "I see. What else is on your mind?",
    "Okay. What would you like to talk about?",
];

const GRATITUDE: &[&str] = &[
    "You're welcome! 😊 Is there anything else I can help with?",
    "Glad I could help! Let me know if you need anything else.",
    "Happy to help! What's next for you today?",
];

const STRESS_CONTEXT: &[&str] = &[
    "Stress can be overwhelming. Want to try a simple breathing exercise?",
    "I hear you're stressed. Sometimes taking a short break can help.",
    "That sounds challenging. Remember to be kind to yourself today.",
];

const IMPROVEMENT_CONTEXT: &[&str] = &[
    "That's great progress! Every step forward counts. 🎉",
    "Improvement takes time - you're doing amazing!",
    "Celebrate the small wins! You're moving in the right direction. 💪",
];

const STRESS_WORDS: &[&str] = &["stress", "stressed", "anxious", "overwhelmed", "pressure"];
const IMPROVEMENT_WORDS: &[&str] = &["improving", "better", "progress", "improvement"];
const AFFIRMATIVE: &[&str] = &["yes", "yeah", "sure", "ok", "okay"];
const NEGATORY: &[&str] = &["no", "nope", "not really"];

pub const AFFIRMATIVE_REPLY: &str = "Great! Let's continue.";
pub const NEGATORY_REPLY: &str = "Okay, no problem. What would you like to talk about instead?";

/// Which template family a reply is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    Positive,
    Negative,
    Neutral,
    ShortResponse,
    Gratitude,
    StressContext,
    ImprovementContext,
    Affirmative,
    Negatory,
}

impl ResponseKind {
    fn templates(self) -> &'static [&'static str] {
        match self {
            Self::Positive => POSITIVE,
            Self::Negative => NEGATIVE,
            Self::Neutral => NEUTRAL,
            Self::ShortResponse => SHORT_RESPONSE,
            Self::Gratitude => GRATITUDE,
            Self::StressContext => STRESS_CONTEXT,
            Self::ImprovementContext => IMPROVEMENT_CONTEXT,
            Self::Affirmative => &[AFFIRMATIVE_REPLY],
            Self::Negatory => &[NEGATORY_REPLY],
        }
    }
}

fn asked_question(previous: &str) -> bool {
    let lower = previous.to_lowercase();
    previous.contains('?') || lower.contains("can i") || lower.contains("would you")
}

/// Decide the template family for a message
///
/// `previous_bot_message` is the bot's last reply, used to recognise short
/// yes/no answers to a question.
pub fn classify_response(
    user_text: &str,
    label: SentimentLabel,
    previous_bot_message: Option<&str>,
) -> ResponseKind {
    let lower = user_text.trim().to_lowercase();

    if lower.contains("thank") {
        return ResponseKind::Gratitude;
    }

    if lower.split_whitespace().count() <= 2 {
        if previous_bot_message.is_some_and(asked_question) {
            let answer = lower.trim_end_matches(|c: char| c.is_ascii_punctuation());
            if AFFIRMATIVE.contains(&answer) {
                return ResponseKind::Affirmative;
            }
            if NEGATORY.contains(&answer) {
                return ResponseKind::Negatory;
            }
        }
        return ResponseKind::ShortResponse;
    }

    let words: Vec<&str> = lower
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .collect();
    if words.iter().any(|w| STRESS_WORDS.contains(w)) {
        return ResponseKind::StressContext;
    }
    if words.iter().any(|w| IMPROVEMENT_WORDS.contains(w)) || lower.contains("getting better") {
        return ResponseKind::ImprovementContext;
    }

    match label {
        SentimentLabel::Positive => ResponseKind::Positive,
        SentimentLabel::Negative => ResponseKind::Negative,
        SentimentLabel::Neutral => ResponseKind::Neutral,
    }
}

/// Picks reply templates with a seedable RNG
pub struct ResponseGenerator {
    rng: StdRng,
}

impl Default for ResponseGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseGenerator {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible replies for tests and demos
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn get_response(
        &mut self,
        user_text: &str,
        label: SentimentLabel,
        previous_bot_message: Option<&str>,
    ) -> String {
        let kind = classify_response(user_text, label, previous_bot_message);
        kind.templates()
            .choose(&mut self.rng)
            .map_or_else(String::new, |template| (*template).to_string())
    }
}
