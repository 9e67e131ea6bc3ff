//! Tests for the settings file

use super::*;
use std::fs;
use tempfile::TempDir;

// ==================== SETTINGS PARSING TESTS ====================

mod parsing_tests {
    use super::*;

    #[test]
    fn test_load_config_from_toml() {
        let toml = r#"
[format]
enabled = false
indent_width = 2

[folding]
enabled = false
"#;

        let settings = Settings::from_toml_str(toml).unwrap();

        assert!(!settings.format.enabled);
        assert_eq!(settings.format.indent_width, 2);
        assert!(!settings.folding.enabled);
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();

        assert!(settings.format.enabled);
        assert_eq!(settings.format.indent_width, 4);
        assert!(settings.folding.enabled);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let toml = r#"
[format]
indent_width = 3
"#;

        let settings = Settings::from_toml_str(toml).unwrap();

        assert!(settings.format.enabled);
        assert_eq!(settings.format.indent_width, 3);
        assert!(settings.folding.enabled);
    }

    #[test]
    fn test_empty_config_uses_all_defaults() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let toml = r#"
[format]
indent_width = "four"
"#;

        assert!(Settings::from_toml_str(toml).is_err());
    }
}

// ==================== FILE LOADING TESTS ====================

mod loading_tests {
    use super::*;

    #[test]
    fn test_discover_reads_workspace_file() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[folding]\nenabled = false\n",
        )
        .unwrap();

        let settings = Settings::discover(dir.path()).unwrap().unwrap();

        assert!(!settings.folding.enabled);
        assert!(settings.format.enabled);
    }

    #[test]
    fn test_discover_without_file() {
        let dir = TempDir::new().unwrap();
        assert!(Settings::discover(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let result = Settings::load(&dir.path().join("missing.toml"));

        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_invalid_toml_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[format\nenabled = ").unwrap();

        assert!(matches!(Settings::load(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_zero_indent_width_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[format]\nindent_width = 0\n").unwrap();

        let err = Settings::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::IndentWidth { value: 0, .. }));
        assert_eq!(err.to_string(), "indent_width must be between 1 and 16, got 0");
    }
}
