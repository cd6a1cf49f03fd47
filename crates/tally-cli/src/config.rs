use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const CONFIG_PATH_ENV: &str = "TALLY_CONFIG_PATH";
pub const DEFAULT_CONFIG_PATH: &str = "tally.toml";
pub const LOG_FILTER_ENV: &str = "TALLY_LOG";
pub const OUTPUT_FORMAT_ENV: &str = "TALLY_OUTPUT_FORMAT";

/// How calculation results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub filter: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: default_log_filter(), json: false }
    }
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct TallyConfig {
    pub logging: LoggingConfig,
    pub output: OutputConfig,
    /// File the configuration was read from, `None` when defaults were used
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl TallyConfig {
    /// Loads configuration from `path`, falling back to `$TALLY_CONFIG_PATH`
    /// and then `tally.toml`. A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => std::env::var(CONFIG_PATH_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH)),
        };

        match fs::read_to_string(&config_path) {
            Ok(contents) => {
                let mut config = Self::from_toml(&contents).with_context(|| {
                    format!("Failed to parse configuration file '{}'", config_path.display())
                })?;
                config.source = Some(config_path);
                Ok(config)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e).with_context(|| {
                format!("Failed to read configuration file '{}'", config_path.display())
            }),
        }
    }

    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Applies `TALLY_LOG` and `TALLY_OUTPUT_FORMAT` from the process environment.
    pub fn apply_env(self) -> Self {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides looked up by environment variable name. Values that do
    /// not parse are ignored.
    pub fn apply_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(filter) = lookup(LOG_FILTER_ENV) {
            self.logging.filter = filter;
        }
        if let Some(format) = lookup(OUTPUT_FORMAT_ENV) {
            if let Ok(format) = OutputFormat::from_str(&format, true) {
                self.output.format = format;
            }
        }
        self
    }
}

fn default_log_filter() -> String {
    "warn".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TallyConfig::from_toml("").unwrap();
        assert_eq!(config, TallyConfig::default());
        assert_eq!(config.logging.filter, "warn");
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_parse_full_config() {
        let config = TallyConfig::from_toml(
            r#"
[logging]
filter = "tally_calculator=debug"
json = true

[output]
format = "json"
"#,
        )
        .unwrap();

        assert_eq!(config.logging.filter, "tally_calculator=debug");
        assert!(config.logging.json);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_invalid_format_is_rejected() {
        assert!(TallyConfig::from_toml("[output]\nformat = \"xml\"\n").is_err());
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> =
            [(LOG_FILTER_ENV, "debug"), (OUTPUT_FORMAT_ENV, "JSON")].into_iter().collect();
        let config =
            TallyConfig::default().apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_unparseable_override_is_ignored() {
        let config = TallyConfig::default().apply_overrides(|key| {
            (key == OUTPUT_FORMAT_ENV).then(|| "yaml".to_string())
        });
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let path = std::env::temp_dir().join("tally-config-that-does-not-exist.toml");
        let config = TallyConfig::load(Some(&path)).unwrap();
        assert_eq!(config, TallyConfig::default());
        assert!(config.source.is_none());
    }

    #[test]
    fn test_load_reads_file() {
        let path = std::env::temp_dir().join(format!("tally-config-{}.toml", std::process::id()));
        fs::write(&path, "[output]\nformat = \"json\"\n").unwrap();

        let config = TallyConfig::load(Some(&path)).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.source.as_deref(), Some(path.as_path()));
    }
}
