//! Deterministic scorers for unit tests

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::models::RawScore;
use crate::sentiment::scorer::PolarityScorer;

/// Build component scores consistent with a compound value
pub fn score_for(compound: f64) -> RawScore {
    let strength = compound.abs().min(1.0);
    RawScore {
        neg: if compound < 0.0 { strength } else { 0.0 },
        neu: 1.0 - strength,
        pos: if compound > 0.0 { strength } else { 0.0 },
        compound,
    }
}

/// Returns a fixed compound per exact text, 0.0 otherwise
pub struct FixedScorer {
    compounds: HashMap<String, f64>,
}

impl FixedScorer {
    pub fn new(entries: &[(&str, f64)]) -> Self {
        Self {
            compounds: entries
                .iter()
                .map(|(text, compound)| ((*text).to_string(), *compound))
                .collect(),
        }
    }
}

impl PolarityScorer for FixedScorer {
    fn polarity_scores(&self, text: &str) -> RawScore {
        score_for(self.compounds.get(text).copied().unwrap_or(0.0))
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

/// Returns the same compound for every text and counts calls
pub struct CountingScorer {
    compound: f64,
    calls: AtomicUsize,
}

impl CountingScorer {
    pub fn new(compound: f64) -> Self {
        Self {
            compound,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PolarityScorer for CountingScorer {
    fn polarity_scores(&self, _text: &str) -> RawScore {
        self.calls.fetch_add(1, Ordering::SeqCst);
        score_for(self.compound)
    }

    fn name(&self) -> &str {
        "counting"
    }
}

/// Spreads arbitrary texts over [-1, 1] by hashing them
pub struct HashScorer;

impl PolarityScorer for HashScorer {
    fn polarity_scores(&self, text: &str) -> RawScore {
        let mut hasher = DefaultHasher::new();
        text.hash(&mut hasher);
        let compound = (hasher.finish() % 2001) as f64 / 1000.0 - 1.0;
        score_for(compound)
    }

    fn name(&self) -> &str {
        "hash"
    }
}
