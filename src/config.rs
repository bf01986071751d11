use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

use crate::cli::output::print_warning;
use crate::LiaBotError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Directory for the daily rolling log file
    #[serde(default = "default_log_directory")]
    pub directory: PathBuf,
    /// Mirror log output to stderr (noisy during interactive chat)
    #[serde(default)]
    pub console: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_directory() -> PathBuf {
    PathBuf::from("logs")
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: default_log_directory(),
            console: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScorerBackend {
    /// Built-in VADER lexicon
    Vader,
    /// Tab-separated AFINN-style lexicon file
    Lexicon,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScorerConfig {
    #[serde(default = "default_backend")]
    pub backend: ScorerBackend,
    /// Required when `backend = "lexicon"`
    #[serde(default)]
    pub lexicon_path: Option<PathBuf>,
}

fn default_backend() -> ScorerBackend {
    ScorerBackend::Vader
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            lexicon_path: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default = "default_positive_threshold")]
    pub positive_threshold: f64,
    #[serde(default = "default_negative_threshold")]
    pub negative_threshold: f64,
    #[serde(default = "default_trend_window")]
    pub trend_window: usize,
    #[serde(default = "default_min_mood_change")]
    pub min_mood_change: f64,
}

pub(crate) fn default_positive_threshold() -> f64 {
    0.05
}

pub(crate) fn default_negative_threshold() -> f64 {
    -0.05
}

pub(crate) fn default_trend_window() -> usize {
    2
}

pub(crate) fn default_min_mood_change() -> f64 {
    0.3
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            positive_threshold: default_positive_threshold(),
            negative_threshold: default_negative_threshold(),
            trend_window: default_trend_window(),
            min_mood_change: default_min_mood_change(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    #[serde(default = "default_bot_name")]
    pub name: String,
    #[serde(default = "default_export_path")]
    pub export_path: PathBuf,
    /// Fixed seed for reproducible replies
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_bot_name() -> String {
    "LiaBot".to_string()
}

fn default_export_path() -> PathBuf {
    PathBuf::from("conversation.json")
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: default_bot_name(),
            export_path: default_export_path(),
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub scorer: ScorerConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub bot: BotConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from default config file path
    pub fn load() -> crate::Result<Self> {
        // Try to load from config.toml first, then fall back to config.example.toml
        if Path::new("config.toml").exists() {
            Self::from_file("config.toml")
        } else if Path::new("config.example.toml").exists() {
            print_warning("Using config.example.toml. Please create config.toml to customize LiaBot.");
            Self::from_file("config.example.toml")
        } else {
            Ok(Self::default())
        }
    }

    /// Load from an explicit path if given, otherwise the default lookup
    pub fn load_from(path: Option<&Path>) -> crate::Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::load(),
        }
    }

    /// Reject values the analysis engine cannot work with
    pub fn validate(&self) -> crate::Result<()> {
        let analysis = &self.analysis;
        if analysis.trend_window == 0 {
            return Err(LiaBotError::ConfigError(
                "analysis.trend_window must be at least 1".to_string(),
            ));
        }
        if analysis.negative_threshold >= analysis.positive_threshold {
            return Err(LiaBotError::ConfigError(format!(
                "analysis.negative_threshold ({}) must be below analysis.positive_threshold ({})",
                analysis.negative_threshold, analysis.positive_threshold
            )));
        }
        if analysis.min_mood_change.is_nan() || analysis.min_mood_change < 0.0 {
            return Err(LiaBotError::ConfigError(format!(
                "analysis.min_mood_change must be non-negative, got {}",
                analysis.min_mood_change
            )));
        }
        if self.scorer.backend == ScorerBackend::Lexicon && self.scorer.lexicon_path.is_none() {
            return Err(LiaBotError::ConfigError(
                "scorer.lexicon_path is required when scorer.backend = \"lexicon\"".to_string(),
            ));
        }
        Ok(())
    }

    /// Get bot display name
    pub fn bot_name(&self) -> &str {
        &self.bot.name
    }

    /// Get default export file path
    pub fn export_path(&self) -> &Path {
        &self.bot.export_path
    }

    /// Get trend moving-window size
    pub fn trend_window(&self) -> usize {
        self.analysis.trend_window
    }

    /// Get minimum compound change for a mood shift
    pub fn min_mood_change(&self) -> f64 {
        self.analysis.min_mood_change
    }
}
