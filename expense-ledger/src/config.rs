//! Configuration for the expense ledger

use crate::types::{Currency, SplitMode};
use serde::{Deserialize, Serialize};

/// Highest supported display precision
pub const MAX_PRECISION: u32 = 10;

/// Ledger configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Service name
    pub service_name: String,

    /// Service version
    pub service_version: String,

    /// Display unit appended to amounts
    pub currency: Currency,

    /// Split arithmetic
    pub split_mode: SplitMode,

    /// Decimal places in rendered amounts
    pub precision: u32,

    /// Settlement configuration
    pub settlement: SettlementConfig,

    /// Output configuration
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_name: "expense-ledger".to_string(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            currency: Currency::default(),
            split_mode: SplitMode::default(),
            precision: 2,
            settlement: SettlementConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Settlement configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettlementConfig {
    /// Cancel A→B against B→A before computing net positions
    pub enable_bilateral: bool,
}

impl Default for SettlementConfig {
    fn default() -> Self {
        Self {
            enable_bilateral: true,
        }
    }
}

/// Report output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON document
    Json,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: OutputFormat,

    /// Print the settlement plan after the summaries
    pub show_settlement: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            show_settlement: true,
        }
    }
}

impl Config {
    /// Load from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse from a TOML string
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from environment variables
    pub fn from_env() -> crate::Result<Self> {
        let mut config = Config::default();

        if let Ok(currency) = std::env::var("SPLITTER_CURRENCY") {
            config.currency = Currency::new(currency);
        }

        if let Ok(mode) = std::env::var("SPLITTER_SPLIT_MODE") {
            config.split_mode = mode.parse()?;
        }

        if let Ok(precision) = std::env::var("SPLITTER_PRECISION") {
            config.precision = precision.trim().parse().map_err(|e| {
                crate::Error::Config(format!("Invalid SPLITTER_PRECISION {:?}: {}", precision, e))
            })?;
        }

        if let Ok(format) = std::env::var("SPLITTER_OUTPUT_FORMAT") {
            config.output.format = match format.trim().to_ascii_lowercase().as_str() {
                "text" => OutputFormat::Text,
                "json" => OutputFormat::Json,
                other => {
                    return Err(crate::Error::Config(format!(
                        "Unknown output format: {}",
                        other
                    )))
                }
            };
        }

        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> crate::Result<()> {
        if self.currency.code().trim().is_empty() {
            return Err(crate::Error::Config("currency must not be empty".to_string()));
        }
        if self.precision > MAX_PRECISION {
            return Err(crate::Error::Config(format!(
                "precision {} exceeds maximum {}",
                self.precision, MAX_PRECISION
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.service_name, "expense-ledger");
        assert_eq!(config.currency.code(), "INR");
        assert_eq!(config.split_mode, SplitMode::Legacy);
        assert_eq!(config.precision, 2);
        assert!(config.settlement.enable_bilateral);
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml(
            r#"
            currency = "EUR"
            split_mode = "even"

            [output]
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.currency.code(), "EUR");
        assert_eq!(config.split_mode, SplitMode::Even);
        assert_eq!(config.precision, 2);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.show_settlement);
    }

    #[test]
    fn test_invalid_toml_rejected() {
        assert!(matches!(
            Config::from_toml("split_mode = \"thirds\""),
            Err(crate::Error::Config(_))
        ));
        assert!(matches!(
            Config::from_toml("precision = 42"),
            Err(crate::Error::Config(_))
        ));
        assert!(matches!(
            Config::from_toml("currency = \" \""),
            Err(crate::Error::Config(_))
        ));
    }
}
