//! Layered configuration: embedded defaults, user file, explicit file, environment.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::submit::SimulatedBackend;

/// Prefix for environment overrides, e.g. `EVREG__BACKEND__DELAY_MS=0`.
pub const ENV_PREFIX: &str = "EVREG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Behaviour of the simulated submission backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Artificial latency of each submission in milliseconds (default: 1000)
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    /// Answer every valid submission with a server error
    #[serde(default)]
    pub simulate_failure: bool,
}

fn default_delay_ms() -> u64 {
    1000
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            simulate_failure: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive; `RUST_LOG` takes precedence (default: "info")
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Write logs to a file (the terminal belongs to the TUI)
    #[serde(default = "default_true")]
    pub to_file: bool,
    /// Directory for log files; defaults to the platform data directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            to_file: true,
            dir: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event poll interval in milliseconds; also drives the spinner (default: 100)
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// How long a toast notification stays visible, in seconds (default: 5)
    #[serde(default = "default_toast_secs")]
    pub toast_secs: u64,
}

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_toast_secs() -> u64 {
    5
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            toast_secs: default_toast_secs(),
        }
    }
}

impl Config {
    /// Loads configuration from every source, later ones overriding earlier:
    ///
    /// 1. embedded defaults
    /// 2. `<config_dir>/evreg/config.toml`, if present
    /// 3. `config_path`, if given (must exist)
    /// 4. `EVREG__<SECTION>__<KEY>` environment variables
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let user_config = Self::user_config_path().filter(|p| p.exists());
        Self::load_layers(user_config.as_deref(), config_path, true)
    }

    /// Builds a config from defaults plus the given files.
    pub(crate) fn load_layers(
        user_config: Option<&Path>,
        explicit: Option<&Path>,
        with_env: bool,
    ) -> Result<Self> {
        let defaults_json = serde_json::to_string(&Config::default())
            .context("Failed to serialize default config")?;

        let mut builder = config::Config::builder().add_source(config::File::from_str(
            &defaults_json,
            config::FileFormat::Json,
        ));

        if let Some(path) = user_config {
            builder = builder.add_source(config::File::from(path));
        }

        if let Some(path) = explicit {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        if with_env {
            builder = builder.add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            );
        }

        let config = builder.build().context("Failed to load configuration")?;
        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Path of the per-user config file, if the platform has a config directory.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("evreg").join("config.toml"))
    }

    /// Directory log files are written to.
    pub fn logs_path(&self) -> PathBuf {
        if let Some(dir) = &self.logging.dir {
            return dir.clone();
        }
        dirs::data_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("evreg")
            .join("logs")
    }

    /// UI poll interval.
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.ui.tick_rate_ms)
    }

    /// Toast lifetime.
    pub fn toast_duration(&self) -> Duration {
        Duration::from_secs(self.ui.toast_secs)
    }

    /// Builds the submission backend described by `[backend]`.
    pub fn backend(&self) -> SimulatedBackend {
        SimulatedBackend::new(Duration::from_millis(self.backend.delay_ms))
            .failing(self.backend.simulate_failure)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.backend.delay_ms, 1000);
        assert!(!config.backend.simulate_failure);
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.to_file);
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.ui.toast_secs, 5);
    }

    #[test]
    fn no_files_yields_defaults() {
        let config = Config::load_layers(None, None, false).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn user_file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let user = write(
            &dir,
            "config.toml",
            "[backend]\ndelay_ms = 0\nsimulate_failure = true\n",
        );
        let config = Config::load_layers(Some(&user), None, false).unwrap();
        assert_eq!(config.backend.delay_ms, 0);
        assert!(config.backend.simulate_failure);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn explicit_file_overrides_user_file() {
        let dir = TempDir::new().unwrap();
        let user = write(&dir, "user.toml", "[ui]\ntick_rate_ms = 50\ntoast_secs = 9\n");
        let explicit = write(&dir, "explicit.toml", "[ui]\ntick_rate_ms = 250\n");
        let config = Config::load_layers(Some(&user), Some(&explicit), false).unwrap();
        assert_eq!(config.ui.tick_rate_ms, 250);
        assert_eq!(config.ui.toast_secs, 9);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(Config::load_layers(None, Some(&missing), false).is_err());
    }

    #[test]
    fn malformed_value_is_an_error() {
        let dir = TempDir::new().unwrap();
        let bad = write(&dir, "bad.toml", "[backend]\ndelay_ms = \"soon\"\n");
        assert!(Config::load_layers(None, Some(&bad), false).is_err());
    }

    #[test]
    fn logs_path_prefers_configured_dir() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.logging.dir = Some(dir.path().to_path_buf());
        assert_eq!(config.logs_path(), dir.path());
    }

    #[test]
    fn default_logs_path_ends_in_logs() {
        let config = Config::default();
        assert!(config.logs_path().ends_with("evreg/logs"));
    }

    #[test]
    fn backend_reflects_settings() {
        let mut config = Config::default();
        config.backend.delay_ms = 5;
        config.backend.simulate_failure = true;
        let backend = config.backend();
        assert_eq!(backend.delay(), Duration::from_millis(5));
        assert!(backend.is_failing());
    }

    #[test]
    fn durations() {
        let config = Config::default();
        assert_eq!(config.tick_rate(), Duration::from_millis(100));
        assert_eq!(config.toast_duration(), Duration::from_secs(5));
    }
}
