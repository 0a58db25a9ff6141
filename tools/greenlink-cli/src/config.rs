//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use greenlink_commerce::cart::DEFAULT_CART_SLOT;
use greenlink_commerce::Currency;
use greenlink_view::ViewConfig;
use serde::{Deserialize, Serialize};

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Cart storage settings.
    #[serde(default)]
    pub store: StoreConfig,

    /// Catalog settings.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// View timing and layout settings.
    #[serde(default)]
    pub view: ViewConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Load config from a file. `.json` files are JSON, anything else TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Where and how the cart is stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Storage slot name.
    #[serde(default = "default_slot")]
    pub slot: String,

    /// Directory holding slot files (default: platform data dir).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Currency prices are read in.
    #[serde(default)]
    pub currency: Currency,
}

fn default_slot() -> String {
    DEFAULT_CART_SLOT.to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            slot: default_slot(),
            data_dir: None,
            currency: Currency::default(),
        }
    }
}

/// Product catalog source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON catalog file; the built-in demo catalog is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format (for development).
    #[default]
    Human,
    /// JSON format (for log aggregation).
    Json,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,

    /// Filter directive, e.g. `"warn"` or `"greenlink_commerce=debug"`.
    /// `RUST_LOG` takes precedence when set.
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            level: default_level(),
        }
    }
}

/// Generate a default greenlink.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# GreenLink storefront configuration

[store]
slot = "{slot}"
currency = "EUR"
# data_dir = ".greenlink"

[catalog]
# path = "catalog.json"

[view]
toast_ttl_ms = 4000
pulse_ms = 600
mobile_breakpoint_px = 768
header_threshold_px = 100.0
parallax_rate = -0.5
reveal_stagger_ms = 100

[logging]
format = "human"
level = "warn"
"#,
        slot = DEFAULT_CART_SLOT
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config: CliConfig = toml::from_str(
            r#"
            [store]
            currency = "USD"

            [view]
            toast_ttl_ms = 2000
            "#,
        )
        .unwrap();
        assert_eq!(config.store.currency, Currency::USD);
        assert_eq!(config.store.slot, DEFAULT_CART_SLOT);
        assert_eq!(config.view.toast_ttl_ms, 2000);
        assert_eq!(config.view.pulse_ms, 600);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_save_and_load_json_and_toml() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = CliConfig::default();
        config.store.slot = "my-cart".to_string();
        config.logging.format = LogFormat::Json;

        for name in ["greenlink.toml", "greenlink.json"] {
            let path = dir.path().join(name);
            config.save(&path).unwrap();
            assert_eq!(CliConfig::load(&path).unwrap(), config);
        }
    }

    #[test]
    fn test_load_missing_file_has_context() {
        let err = CliConfig::load(Path::new("/nonexistent/greenlink.toml")).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to read config file"));
    }
}
