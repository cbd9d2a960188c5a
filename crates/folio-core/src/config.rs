use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{FolioError, Result};

/// Top-level configuration for the Folio application.
///
/// Loaded from `~/.folio/config.toml` by default. Every section falls back
/// to its defaults when omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub companion: CompanionConfig,
    #[serde(default)]
    pub fixtures: FixturesConfig,
}

impl FolioConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read, parsed, or fails validation.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: FolioConfig = toml::from_str(&content)?;
        config.companion.validate()?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Timing and probability knobs for the chat companion widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanionConfig {
    /// Minimum simulated "thinking" delay before a reply, in milliseconds.
    pub reply_delay_ms: u64,
    /// Upper bound of the random extra delay added to each reply.
    pub reply_jitter_ms: u64,
    /// Delay before the welcome message appears on first open.
    pub welcome_delay_ms: u64,
    /// Period of the ambient tick while the widget is open.
    pub ambient_interval_secs: u64,
    /// How long a fact popup stays visible.
    pub fact_display_ms: u64,
    /// How long the skills-cloud popup stays visible.
    pub skills_cloud_display_ms: u64,
    /// Probability that an ambient tick shows a fact popup.
    pub fact_probability: f64,
    /// Probability that an ambient tick shows the skills cloud.
    pub skills_cloud_probability: f64,
    /// Probability that an ambient tick injects the next suggestion.
    pub suggestion_probability: f64,
}

impl Default for CompanionConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: 1000,
            reply_jitter_ms: 1000,
            welcome_delay_ms: 500,
            ambient_interval_secs: 10,
            fact_display_ms: 4000,
            skills_cloud_display_ms: 3000,
            fact_probability: 0.2,
            skills_cloud_probability: 0.2,
            suggestion_probability: 0.2,
        }
    }
}

impl CompanionConfig {
    /// Reject settings the ambient partition or tick loop cannot honour.
    pub fn validate(&self) -> Result<()> {
        let probabilities = [
            ("fact_probability", self.fact_probability),
            ("skills_cloud_probability", self.skills_cloud_probability),
            ("suggestion_probability", self.suggestion_probability),
        ];
        for (name, p) in probabilities {
            if !(0.0..=1.0).contains(&p) {
                return Err(FolioError::Config(format!(
                    "companion.{name} must be within [0, 1], got {p}"
                )));
            }
        }
        let total: f64 = probabilities.iter().map(|(_, p)| p).sum();
        if total > 1.0 + f64::EPSILON {
            return Err(FolioError::Config(format!(
                "companion ambient probabilities sum to {total}, must not exceed 1"
            )));
        }
        if self.ambient_interval_secs == 0 {
            return Err(FolioError::Config(
                "companion.ambient_interval_secs must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    pub fn reply_jitter(&self) -> Duration {
        Duration::from_millis(self.reply_jitter_ms)
    }

    pub fn welcome_delay(&self) -> Duration {
        Duration::from_millis(self.welcome_delay_ms)
    }

    pub fn ambient_interval(&self) -> Duration {
        Duration::from_secs(self.ambient_interval_secs)
    }

    pub fn fact_display(&self) -> Duration {
        Duration::from_millis(self.fact_display_ms)
    }

    pub fn skills_cloud_display(&self) -> Duration {
        Duration::from_millis(self.skills_cloud_display_ms)
    }
}

/// Where the static portfolio data comes from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FixturesConfig {
    /// Optional JSON file replacing the built-in portfolio data.
    pub path: Option<String>,
}
