use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use lexscan_patterns::{DEFAULT_ORDER, PatternDef};

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub extractors: ExtractorsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ExtractorsConfig {
    /// Extractor names used when none are given on the command line.
    #[serde(default = "ExtractorsConfig::default_order")]
    pub default_order: Vec<String>,
    /// User-defined regex extractors, registered next to the built-ins.
    #[serde(default)]
    pub custom: Vec<PatternDef>,
}

impl Default for ExtractorsConfig {
    fn default() -> Self {
        Self {
            default_order: Self::default_order(),
            custom: Vec::new(),
        }
    }
}

impl ExtractorsConfig {
    fn default_order() -> Vec<String> {
        DEFAULT_ORDER.iter().map(ToString::to_string).collect()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

impl Config {
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("lexscan"))
    }

    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load `~/lexscan/config.json`; a missing file yields the defaults.
    pub fn load_or_default() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;
        if config_path.exists() {
            return Self::load_from(&config_path);
        }
        info!(
            "No config at {}, using built-in defaults",
            config_path.display()
        );
        Ok(Self::default())
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config at {}: {e}", path.display()))?;

        info!(
            "Loaded config from {} ({} custom patterns)",
            path.display(),
            config.extractors.custom.len()
        );
        Ok(config)
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    /// Template written by `lexscan init`.
    #[must_use]
    pub fn template() -> &'static str {
        r#"{
  "extractors": {
    "default_order": [
      "dates_iso8601",
      "dates_string_month",
      "mixed_ordinals",
      "integers"
    ],
    "custom": [
      {
        "name": "percentages",
        "label": "percent",
        "pattern": "\\b\\d+(?:\\.\\d+)?%"
      }
    ]
  },
  "output": {
    "format": "text"
  }
}"#
    }

    pub fn create_config() -> anyhow::Result<PathBuf> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");
        Self::write_template(&config_path)?;

        println!("Created config file at: {}", config_path.display());
        println!();
        println!("Configuration options:");
        println!("   - extractors.default_order: extractors used by 'lexscan scan', highest priority first");
        println!("   - extractors.custom: extra regex extractors (name, label, pattern, not_followed_by)");
        println!("   - output.format: \"text\" or \"json\"");
        println!();
        Ok(config_path)
    }

    pub fn write_template(path: &Path) -> anyhow::Result<()> {
        if path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                path.display()
            );
        }
        std::fs::write(path, Self::template())?;
        Ok(())
    }
}
