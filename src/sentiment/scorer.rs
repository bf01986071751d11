//! Polarity scorers
//!
//! A scorer turns text into `neg`/`neu`/`pos`/`compound` scores. Two backends
//! are available:
//! - `VaderScorer`: the VADER lexicon bundled with `vader_sentiment`
//! - `LexiconScorer`: a tab-separated AFINN-style lexicon loaded from disk
//!
//! Loading a scorer can be slow or fail, so it happens once through
//! `ScorerHandle` and the result is shared as `Arc<dyn PolarityScorer>`.

use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use lazy_static::lazy_static;
use once_cell::sync::OnceCell;
use tracing::{debug, info};
use vader_sentiment::SentimentIntensityAnalyzer;

use crate::config::{ScorerBackend, ScorerConfig};
use crate::models::RawScore;
use crate::LiaBotError;
use crate::Result;

/// Deterministic text to polarity-score mapping
pub trait PolarityScorer: Send + Sync {
    fn polarity_scores(&self, text: &str) -> RawScore;

    /// Short backend name for logs and the config screen
    fn name(&self) -> &str;
}

/// Scorer backed by the bundled VADER lexicon
pub struct VaderScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderScorer {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityScorer for VaderScorer {
    fn polarity_scores(&self, text: &str) -> RawScore {
        let scores = self.analyzer.polarity_scores(text);
        let get = |key: &str| scores.get(key).copied().unwrap_or(0.0);

        let compound = get("compound");
        let (neg, neu, pos) = (get("neg"), get("neu"), get("pos"));

        // No token carries valence. `vader_sentiment` still applies punctuation
        // emphasis to a zero sum, which yields a negative compound for plain
        // statements ending in `!` or `?`.
        if neg + pos == 0.0 {
            return RawScore::neutral();
        }

        RawScore {
            neg,
            neu,
            pos,
            compound,
        }
    }

    fn name(&self) -> &str {
        "vader"
    }
}

/// Normalization constant for the compound score, as in VADER
const ALPHA: f64 = 15.0;
const NEGATION_SCALAR: f64 = -0.74;
const BOOSTER_INCREMENT: f64 = 0.293;
const EXCLAMATION_INCREMENT: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
/// How many preceding tokens a negation reaches
const NEGATION_REACH: usize = 3;

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "none", "nobody", "nothing", "neither", "nor", "nowhere", "without",
    "cannot", "aint", "dont", "doesnt", "didnt", "isnt", "wasnt", "wont", "cant", "hardly",
];

lazy_static! {
    /// Words that scale the valence of the following word
    static ref BOOSTER_WORDS: HashMap<&'static str, f64> = {
        let mut map = HashMap::new();
        for word in [
            "absolutely", "amazingly", "completely", "deeply", "especially", "extremely",
            "highly", "incredibly", "really", "so", "such", "super", "totally", "truly", "very",
        ] {
            map.insert(word, BOOSTER_INCREMENT);
        }
        for word in [
            "barely", "hardly", "kinda", "less", "little", "marginally", "slightly", "somewhat",
            "sorta",
        ] {
            map.insert(word, -BOOSTER_INCREMENT);
        }
        map
    };
}

fn is_negation(token: &str) -> bool {
    NEGATIONS.contains(&token) || token.ends_with("n't")
}

fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|word| {
            word.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
                .to_lowercase()
        })
        .filter(|word| !word.is_empty())
        .collect()
}

/// Map an unbounded valence sum into [-1, 1]
fn normalize(sum: f64) -> f64 {
    (sum / (sum * sum + ALPHA).sqrt()).clamp(-1.0, 1.0)
}

/// Scorer backed by an AFINN-style lexicon file
pub struct LexiconScorer {
    scores: HashMap<String, f64>,
    source: PathBuf,
}

impl LexiconScorer {
    /// Load a lexicon file with one `word<TAB>score` entry per line
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| LiaBotError::LexiconUnavailable {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        Self::from_lexicon_text(&content, path)
    }

    /// Parse lexicon text; `source` is only used for error messages
    pub fn from_lexicon_text<P: AsRef<Path>>(content: &str, source: P) -> Result<Self> {
        let source = source.as_ref().to_path_buf();
        let mut scores = HashMap::new();
        let mut skipped = 0usize;

        for line in content.lines() {
            let line = line.trim_end();
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some((word, score_str)) = line.split_once('\t') {
                if let Ok(score) = score_str.trim().parse::<f64>() {
                    scores.insert(word.trim().to_lowercase(), score);
                    continue;
                }
            }
            skipped += 1;
            debug!("Skipping malformed lexicon line: {:?}", line);
        }

        if scores.is_empty() {
            return Err(LiaBotError::LexiconUnavailable {
                path: source,
                reason: "lexicon contains no entries".to_string(),
            });
        }

        info!(
            "Loaded {} lexicon entries from {} ({} lines skipped)",
            scores.len(),
            source.display(),
            skipped
        );

        Ok(Self { scores, source })
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    fn valences(&self, tokens: &[String]) -> Vec<f64> {
        tokens
            .iter()
            .enumerate()
            .map(|(i, token)| {
                let Some(&base) = self.scores.get(token) else {
                    return 0.0;
                };
                let mut valence = base;
                if let Some(prev) = i.checked_sub(1).map(|p| tokens[p].as_str()) {
                    if let Some(&boost) = BOOSTER_WORDS.get(prev) {
                        if valence != 0.0 {
                            valence += boost * valence.signum();
                        }
                    }
                }
                let start = i.saturating_sub(NEGATION_REACH);
                if tokens[start..i].iter().any(|t| is_negation(t)) {
                    valence *= NEGATION_SCALAR;
                }
                valence
            })
            .collect()
    }
}

impl PolarityScorer for LexiconScorer {
    fn polarity_scores(&self, text: &str) -> RawScore {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return RawScore::neutral();
        }

        let valences = self.valences(&tokens);

        let mut sum: f64 = valences.iter().sum();
        if sum != 0.0 {
            let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
            sum += sum.signum() * exclamations as f64 * EXCLAMATION_INCREMENT;
        }

        let (mut pos_sum, mut neg_sum, mut neu_count) = (0.0, 0.0, 0.0);
        for &valence in &valences {
            if valence > 0.0 {
                pos_sum += valence + 1.0;
            } else if valence < 0.0 {
                neg_sum += valence - 1.0;
            } else {
                neu_count += 1.0;
            }
        }

        // Every token contributes at least 1, so total is positive
        let total = pos_sum + neg_sum.abs() + neu_count;

        RawScore {
            neg: neg_sum.abs() / total,
            neu: neu_count / total,
            pos: pos_sum / total,
            compound: normalize(sum),
        }
    }

    fn name(&self) -> &str {
        "lexicon"
    }
}

/// Build the scorer the configuration asks for
pub fn load_scorer(config: &ScorerConfig) -> Result<Arc<dyn PolarityScorer>> {
    match config.backend {
        ScorerBackend::Vader => Ok(Arc::new(VaderScorer::new())),
        ScorerBackend::Lexicon => {
            let path = config.lexicon_path.as_ref().ok_or_else(|| {
                LiaBotError::ConfigError(
                    "scorer.lexicon_path is required for the lexicon backend".to_string(),
                )
            })?;
            Ok(Arc::new(LexiconScorer::from_file(path)?))
        }
    }
}

type ScorerLoader = Box<dyn Fn() -> Result<Arc<dyn PolarityScorer>> + Send + Sync>;

/// Initialize-once holder for the shared scorer
///
/// The first `get` runs the loader; concurrent callers wait for it and then
/// share the same instance. A failed load is returned and may be retried.
pub struct ScorerHandle {
    loader: ScorerLoader,
    cell: OnceCell<Arc<dyn PolarityScorer>>,
}

impl ScorerHandle {
    pub fn new<F>(loader: F) -> Self
    where
        F: Fn() -> Result<Arc<dyn PolarityScorer>> + Send + Sync + 'static,
    {
        Self {
            loader: Box::new(loader),
            cell: OnceCell::new(),
        }
    }

    pub fn from_config(config: &ScorerConfig) -> Self {
        let config = config.clone();
        Self::new(move || load_scorer(&config))
    }

    /// Get the scorer, loading it on first use
    pub fn get(&self) -> Result<Arc<dyn PolarityScorer>> {
        self.cell
            .get_or_try_init(|| {
                info!("Initializing sentiment scorer...");
                let scorer = (self.loader)()?;
                info!("Sentiment scorer ready: {}", scorer.name());
                Ok(scorer)
            })
            .map(Arc::clone)
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    const TEST_LEXICON: &str = "# tiny AFINN-style lexicon\n\
        love\t3\n\
        good\t3\n\
        happy\t3\n\
        hate\t-3\n\
        bad\t-3\n\
        sad\t-2\n\
        broken line without tab\n\
        odd\tnotanumber\n";

    fn lexicon() -> LexiconScorer {
        LexiconScorer::from_lexicon_text(TEST_LEXICON, "test.tsv").unwrap()
    }

    // ====== Lexicon Loading Tests ======

    #[test]
    fn test_lexicon_parsing_skips_malformed_lines() {
        let scorer = lexicon();
        assert_eq!(scorer.len(), 6);
        assert_eq!(scorer.source(), Path::new("test.tsv"));
    }

    #[test]
    fn test_empty_lexicon_is_unavailable() {
        let result = LexiconScorer::from_lexicon_text("# nothing here\n\n", "empty.tsv");
        assert!(matches!(result, Err(LiaBotError::LexiconUnavailable { .. })));
    }

    #[test]
    fn test_missing_lexicon_file_is_unavailable() {
        let result = LexiconScorer::from_file("/no/such/dir/afinn.txt");
        match result {
            Err(LiaBotError::LexiconUnavailable { path, .. }) => {
                assert_eq!(path, PathBuf::from("/no/such/dir/afinn.txt"));
            }
            _ => panic!("Expected LexiconUnavailable"),
        }
    }

    #[test]
    fn test_lexicon_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{TEST_LEXICON}").unwrap();
        let scorer = LexiconScorer::from_file(file.path()).unwrap();
        assert_eq!(scorer.len(), 6);
    }

    // ====== Lexicon Scoring Tests ======

    #[test]
    fn test_lexicon_polarity_direction() {
        let scorer = lexicon();
        assert!(scorer.polarity_scores("I love this").compound > 0.0);
        assert!(scorer.polarity_scores("I hate this").compound < 0.0);
        assert_eq!(scorer.polarity_scores("the weather today").compound, 0.0);
    }

    #[test]
    fn test_lexicon_scores_are_normalized() {
        let scorer = lexicon();
        for text in ["I love this", "bad bad day", "nothing to see", "Good, but sad!!"] {
            let score = scorer.polarity_scores(text);
            assert!(score.is_normalized(), "{text}: {score:?}");
            assert!((-1.0..=1.0).contains(&score.compound));
        }
    }

    #[test]
    fn test_lexicon_negation_flips_polarity() {
        let scorer = lexicon();
        let plain = scorer.polarity_scores("this is good").compound;
        let negated = scorer.polarity_scores("this is not good").compound;
        let contracted = scorer.polarity_scores("this isn't good").compound;
        assert!(plain > 0.0);
        assert!(negated < 0.0);
        assert!(contracted < 0.0);
    }

    #[test]
    fn test_lexicon_booster_and_exclamation_amplify() {
        let scorer = lexicon();
        let plain = scorer.polarity_scores("good").compound;
        let boosted = scorer.polarity_scores("very good").compound;
        let shouted = scorer.polarity_scores("good!!").compound;
        assert!(boosted > plain);
        assert!(shouted > plain);
    }

    #[test]
    fn test_booster_leaves_zero_valence_words_alone() {
        let scorer = LexiconScorer::from_lexicon_text("meh\t0\ngood\t3\n", "zero.tsv").unwrap();
        let score = scorer.polarity_scores("very meh");
        assert_eq!(score.compound, 0.0);
        assert_eq!(score.pos, 0.0);
        assert_eq!(score.neg, 0.0);
    }

    #[test]
    fn test_lexicon_punctuation_only_is_neutral() {
        let scorer = lexicon();
        assert_eq!(scorer.polarity_scores("?!..."), RawScore::neutral());
    }

    #[test]
    fn test_normalize_bounds() {
        assert_eq!(normalize(0.0), 0.0);
        assert!(normalize(1000.0) <= 1.0);
        assert!(normalize(-1000.0) >= -1.0);
    }

    // ====== VADER Tests ======

    #[test]
    fn test_vader_polarity_direction() {
        let scorer = VaderScorer::new();
        let positive = scorer.polarity_scores("I love this product, it's absolutely fantastic!");
        let negative = scorer.polarity_scores("This is horrible, I hate it so much.");
        assert!(positive.compound > 0.05);
        assert!(negative.compound < -0.05);
        assert!(negative.neg > 0.0);
        assert!(positive.is_normalized());
        assert!(negative.is_normalized());
    }

    #[test]
    fn test_vader_punctuation_without_valence_is_neutral() {
        let scorer = VaderScorer::new();
        for text in [
            "I went to the store!",
            "Where are you??",
            "The meeting is at noon!!",
            "Is it Tuesday?!",
            "!!!",
        ] {
            assert_eq!(scorer.polarity_scores(text), RawScore::neutral(), "{text}");
        }
    }

    // ====== Handle Tests ======

    #[test]
    fn test_handle_initializes_once() {
        let loads = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&loads);
        let handle = ScorerHandle::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::new(VaderScorer::new()) as Arc<dyn PolarityScorer>)
        });

        assert!(!handle.is_initialized());
        let first = handle.get().unwrap();
        let second = handle.get().unwrap();

        assert!(handle.is_initialized());
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(loads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_handle_initializes_once_across_threads() {
        let loads = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&loads);
        let handle = Arc::new(ScorerHandle::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            std::thread::sleep(std::time::Duration::from_millis(20));
            Ok(Arc::new(VaderScorer::new()) as Arc<dyn PolarityScorer>)
        }));

        let threads: Vec<_> = (0..8)
            .map(|_| {
                let handle = Arc::clone(&handle);
                std::thread::spawn(move || handle.get().map(|s| s.name().to_string()))
            })
            .collect();

        for thread in threads {
            assert_eq!(thread.join().unwrap().unwrap(), "vader");
        }
        assert_eq!(loads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_handle_failed_load_is_reported() {
        let config = ScorerConfig {
            backend: ScorerBackend::Lexicon,
            lexicon_path: Some(PathBuf::from("/no/such/lexicon.tsv")),
        };
        let handle = ScorerHandle::from_config(&config);
        assert!(matches!(
            handle.get(),
            Err(LiaBotError::LexiconUnavailable { .. })
        ));
        assert!(!handle.is_initialized());
    }

    #[test]
    fn test_load_scorer_lexicon_requires_path() {
        let config = ScorerConfig {
            backend: ScorerBackend::Lexicon,
            lexicon_path: None,
        };
        assert!(matches!(load_scorer(&config), Err(LiaBotError::ConfigError(_))));
    }

    #[test]
    fn test_load_scorer_default_is_vader() {
        let scorer = load_scorer(&ScorerConfig::default()).unwrap();
        assert_eq!(scorer.name(), "vader");
    }
}
