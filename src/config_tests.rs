//! Unit tests for configuration module
//!
//! These tests validate configuration parsing, defaults, and validation.

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;

    use crate::config::*;
    use crate::LiaBotError;

    // ====== Default Value Tests ======

    #[test]
    fn test_default_analysis_values() {
        let config = AnalysisConfig::default();
        assert_eq!(config.positive_threshold, 0.05);
        assert_eq!(config.negative_threshold, -0.05);
        assert_eq!(config.trend_window, 2);
        assert_eq!(config.min_mood_change, 0.3);
    }

    #[test]
    fn test_default_bot_values() {
        let config = AppConfig::default();
        assert_eq!(config.bot_name(), "LiaBot");
        assert_eq!(config.export_path(), PathBuf::from("conversation.json"));
        assert_eq!(config.scorer.backend, ScorerBackend::Vader);
        assert!(config.validate().is_ok());
    }

    // ====== Parsing Tests ======

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.trend_window(), 2);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.console);
    }

    #[test]
    fn test_partial_sections_fill_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [analysis]
            trend_window = 4

            [scorer]
            backend = "lexicon"
            lexicon_path = "data/afinn.txt"
            "#,
        )
        .unwrap();

        assert_eq!(config.trend_window(), 4);
        assert_eq!(config.min_mood_change(), 0.3);
        assert_eq!(config.scorer.backend, ScorerBackend::Lexicon);
        assert_eq!(config.scorer.lexicon_path, Some(PathBuf::from("data/afinn.txt")));
    }

    #[test]
    fn test_unknown_backend_is_rejected() {
        let result: Result<AppConfig, _> = toml::from_str("[scorer]\nbackend = \"bert\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = AppConfig::default();
        config.bot.seed = Some(7);
        config.analysis.trend_window = 3;

        let text = toml::to_string(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();

        assert_eq!(parsed.bot.seed, Some(7));
        assert_eq!(parsed.trend_window(), 3);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[bot]\nname = \"TestBot\"").unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.bot_name(), "TestBot");
    }

    #[test]
    fn test_from_missing_file_is_io_error() {
        let result = AppConfig::from_file("/definitely/not/here/config.toml");
        assert!(matches!(result, Err(LiaBotError::Io(_))));
    }

    // ====== Validation Tests ======

    #[test]
    fn test_zero_window_is_invalid() {
        let mut config = AppConfig::default();
        config.analysis.trend_window = 0;
        assert!(matches!(config.validate(), Err(LiaBotError::ConfigError(_))));
    }

    #[test]
    fn test_inverted_thresholds_are_invalid() {
        let mut config = AppConfig::default();
        config.analysis.positive_threshold = -0.1;
        config.analysis.negative_threshold = 0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_negative_min_change_is_invalid() {
        let mut config = AppConfig::default();
        config.analysis.min_mood_change = -0.5;
        assert!(config.validate().is_err());

        config.analysis.min_mood_change = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_lexicon_backend_requires_path() {
        let mut config = AppConfig::default();
        config.scorer.backend = ScorerBackend::Lexicon;
        assert!(config.validate().is_err());

        config.scorer.lexicon_path = Some(PathBuf::from("afinn.txt"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_file_validates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[analysis]\ntrend_window = 0").unwrap();

        let result = AppConfig::from_file(file.path());
        assert!(matches!(result, Err(LiaBotError::ConfigError(_))));
    }
}
