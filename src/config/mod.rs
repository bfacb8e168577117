//! Configuration for the kiosk reader
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/kiosk/config.toml)
//! 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::PathBuf;

#[cfg(test)]
mod tests;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Content bundle location: an http(s) URL or a local file path
    pub bundle: String,

    /// Theme name: "dark" or "light"
    pub theme: String,

    /// Use theme's background color (true) or terminal's default (false)
    pub use_theme_background: bool,

    /// Animation tick interval in milliseconds (one particle step per tick)
    pub tick_ms: u64,

    /// Demo mode: render a built-in sample bundle, no network
    pub demo_mode: bool,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bundle: "data/content.json".to_string(),
            theme: "dark".to_string(),
            use_theme_background: true,
            tick_ms: 50,
            demo_mode: false,
            logging: LoggingConfig::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default log level when RUST_LOG is unset
    pub level: String,
    /// Also write JSON logs to rotating files
    pub file_enabled: bool,
    /// Directory for log files
    pub file_dir: PathBuf,
    /// Log file name prefix
    pub file_prefix: String,
    /// Rotation policy for file logs
    pub file_rotation: LogRotation,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: PathBuf::from("./logs"),
            file_prefix: "kiosk".to_string(),
            file_rotation: LogRotation::Daily,
        }
    }
}

/// File log rotation policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    Hourly,
    Daily,
    Never,
}

impl LogRotation {
    fn as_str(&self) -> &'static str {
        match self {
            LogRotation::Hourly => "hourly",
            LogRotation::Daily => "daily",
            LogRotation::Never => "never",
        }
    }
}

/// Config file structure (subset of Config that makes sense to persist)
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub bundle: Option<String>,
    pub theme: Option<String>,
    pub use_theme_background: Option<bool>,
    pub tick_ms: Option<u64>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

/// Optional [logging] section of the config file
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<String>,
    pub file_prefix: Option<String>,
    pub file_rotation: Option<LogRotation>,
}

impl LoggingConfig {
    fn from_file(file: Option<FileLogging>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();
        Self {
            level: file.level.unwrap_or(defaults.level),
            file_enabled: file.file_enabled.unwrap_or(defaults.file_enabled),
            file_dir: file.file_dir.map(PathBuf::from).unwrap_or(defaults.file_dir),
            file_prefix: file.file_prefix.unwrap_or(defaults.file_prefix),
            file_rotation: file.file_rotation.unwrap_or(defaults.file_rotation),
        }
    }
}

impl Config {
    /// Get the config file path: ~/.config/kiosk/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("kiosk").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Silently fail - config is optional
            }
        }

        // Use Config::default().to_toml() as single source of truth
        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Serialize the effective configuration as an annotated TOML template
    pub fn to_toml(&self) -> String {
        format!(
            "# kiosk configuration\n\
             # Content bundle location: an http(s) URL or a local file path\n\
             bundle = {bundle:?}\n\
             # Theme: \"dark\" or \"light\"\n\
             theme = {theme:?}\n\
             use_theme_background = {bg}\n\
             # Banner animation tick interval (milliseconds)\n\
             tick_ms = {tick}\n\
             \n\
             [logging]\n\
             level = {level:?}\n\
             file_enabled = {file_enabled}\n\
             file_dir = {file_dir:?}\n\
             file_prefix = {file_prefix:?}\n\
             # Rotation: \"hourly\", \"daily\" or \"never\"\n\
             file_rotation = {rotation:?}\n",
            bundle = self.bundle,
            theme = self.theme,
            bg = self.use_theme_background,
            tick = self.tick_ms,
            level = self.logging.level,
            file_enabled = self.logging.file_enabled,
            file_dir = self.logging.file_dir.display().to_string(),
            file_prefix = self.logging.file_prefix,
            rotation = self.logging.file_rotation.as_str(),
        )
    }

    /// Load file config if it exists
    ///
    /// A config file that exists but cannot be parsed fails fast with a
    /// clear error instead of silently falling back to defaults.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Config error: failed to parse {}", path.display());
                    eprintln!("  {}", e);
                    eprintln!("  To reset, run: kiosk config --reset");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("Config error: cannot read {}: {}", path.display(), e);
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env vars > file > defaults
    pub fn from_env() -> Self {
        let file = Self::load_file_config();
        let defaults = Self::default();

        // Bundle location: env > file > default
        let bundle = std::env::var("KIOSK_BUNDLE")
            .ok()
            .or(file.bundle)
            .unwrap_or(defaults.bundle);

        // Theme: env > file > default
        let theme = std::env::var("KIOSK_THEME")
            .ok()
            .or(file.theme)
            .unwrap_or(defaults.theme);

        let use_theme_background = file
            .use_theme_background
            .unwrap_or(defaults.use_theme_background);

        let tick_ms = file.tick_ms.unwrap_or(defaults.tick_ms);

        // Demo mode: env only (runtime flag); the CLI flag can also set it
        let demo_mode = std::env::var("KIOSK_DEMO")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        let logging = LoggingConfig::from_file(file.logging);

        Self {
            bundle,
            theme,
            use_theme_background,
            tick_ms,
            demo_mode,
            logging,
        }
    }
}
