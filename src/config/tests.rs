//! Configuration tests
//!
//! The round-trip test guards the hand-written TOML template: when a field
//! is added to Config, this fails until to_toml() and FileConfig agree.

use super::*;

/// Verify that the serialized default config can be parsed back
#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    let file = parsed.unwrap();
    assert_eq!(file.bundle.as_deref(), Some("data/content.json"));
    assert_eq!(file.theme.as_deref(), Some("dark"));
    assert_eq!(file.tick_ms, Some(50));
}

/// Round-trip with non-default values in every section
#[test]
fn test_config_roundtrip_custom_values() {
    let config = Config {
        bundle: "https://example.org/data/content.json".to_string(),
        theme: "light".to_string(),
        use_theme_background: false,
        tick_ms: 33,
        demo_mode: false,
        logging: LoggingConfig {
            level: "debug".to_string(),
            file_enabled: true,
            file_dir: PathBuf::from("/tmp/kiosk-logs"),
            file_prefix: "reader".to_string(),
            file_rotation: LogRotation::Hourly,
        },
    };

    let file: FileConfig = toml::from_str(&config.to_toml()).unwrap();
    assert_eq!(file.bundle.as_deref(), Some("https://example.org/data/content.json"));
    assert_eq!(file.use_theme_background, Some(false));

    let logging = file.logging.unwrap();
    assert_eq!(logging.level.as_deref(), Some("debug"));
    assert_eq!(logging.file_enabled, Some(true));
    assert_eq!(logging.file_rotation, Some(LogRotation::Hourly));
}

/// The [logging] section is optional
#[test]
fn test_logging_section_optional() {
    let file: FileConfig = toml::from_str("bundle = \"x.json\"\n").unwrap();
    let logging = LoggingConfig::from_file(file.logging);
    assert_eq!(logging.level, "info");
    assert!(!logging.file_enabled);
}
