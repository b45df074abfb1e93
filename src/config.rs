//! CLI configuration, loaded best-effort from config.toml.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use guessmatch::DEFAULT_THRESHOLD;

#[derive(Debug, Deserialize)]
pub struct Config {
    /// Minimum score (inclusive) for declaring a match
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// How `check` prints its result
    #[serde(default)]
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            output: OutputFormat::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable verdict line (default)
    #[default]
    Text,
    /// Serialized result, one JSON object
    Json,
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

impl Config {
    pub fn load() -> Self {
        let path = Path::new("config.toml");
        if path.exists() {
            fs::read_to_string(path)
                .ok()
                .and_then(|s| toml::from_str(&s).ok())
                .unwrap_or_default()
        } else {
            Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.threshold, DEFAULT_THRESHOLD);
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn test_parse() {
        let config: Config = toml::from_str("threshold = 0.8\noutput = \"json\"").unwrap();
        assert_eq!(config.threshold, 0.8);
        assert_eq!(config.output, OutputFormat::Json);
    }
}
