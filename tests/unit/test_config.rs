//! Unit tests for configuration resolution

use center::config::parse_integer;
use center::config::terminal::FixedTerminal;
use center::{Alignment, ConfigLoader, Error, LengthMode, Settings};
use std::fs;
use tempfile::TempDir;

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn test_strtol_style_integers() {
        assert_eq!(parse_integer("72").unwrap(), 72);
        assert_eq!(parse_integer("0x48").unwrap(), 72);
        assert_eq!(parse_integer("0110").unwrap(), 72);
        assert!(parse_integer("72 columns").is_err());
    }

    #[test]
    fn test_width_required_without_terminal() {
        let err = Settings::default()
            .resolve(&FixedTerminal(None))
            .unwrap_err();
        assert!(matches!(err, Error::WidthUnavailable));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_negative_width_rejected() {
        let settings = Settings {
            width: Some(-5),
            ..Settings::default()
        };
        assert!(matches!(
            settings.resolve(&FixedTerminal(Some(80))),
            Err(Error::WidthNotPositive { value: -5 })
        ));
    }

    #[test]
    fn test_file_settings_fill_gaps() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("center.toml");
        fs::write(
            &path,
            "width = 100\ntab_width = 2\ncount_escapes = true\nlongest = true\n",
        )
        .unwrap();

        let file = ConfigLoader::load(Some(path.as_path())).unwrap();
        let cli = Settings {
            width: Some(60),
            ..Settings::default()
        };
        let config = cli.or(file).resolve(&FixedTerminal(None)).unwrap();

        assert_eq!(config.width, 60);
        assert_eq!(config.tab_width, 2);
        assert_eq!(config.length_mode, LengthMode::Raw);
        assert_eq!(config.alignment, Alignment::Block);
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = TempDir::new().unwrap();
        let result = ConfigLoader::load(Some(dir.path().join("missing.toml").as_path()));
        assert!(matches!(result, Err(Error::ConfigLoadFailed { .. })));
    }

    #[test]
    fn test_file_values_validated() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("center.toml");
        fs::write(&path, "tab_width = -4\n").unwrap();

        let settings = ConfigLoader::load_file(&path).unwrap();
        let result = settings.resolve(&FixedTerminal(Some(80)));
        assert!(matches!(result, Err(Error::NegativeTabWidth { value: -4 })));
    }
}
