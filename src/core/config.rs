//! User configuration for link generation.
//!
//! Settings live in a JSON file in the platform config directory (see
//! [`crate::core::dirs`]). A missing file is not an error: every field has a default, and
//! command-line flags are layered on top by the caller.

use crate::core::dirs::get_config_file;
use crate::core::error::{GitPermalinkError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_REMOTE_NAME: &str = "origin";

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CustomUrlConfig {
    pub enabled: bool,
    pub template: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct LinkConfig {
    pub preferred_remote_name: String,
    pub custom_url: CustomUrlConfig,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            preferred_remote_name: DEFAULT_REMOTE_NAME.to_string(),
            custom_url: CustomUrlConfig::default(),
        }
    }
}

impl LinkConfig {
    pub fn load() -> Result<Self> {
        let config_file = get_config_file()?;
        Self::load_from(&config_file)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| GitPermalinkError::config_read_failed(path, e))?;
        let mut config: Self = serde_json::from_str(&content)
            .map_err(|e| GitPermalinkError::config_parse_failed(path, e))?;

        if config.preferred_remote_name.trim().is_empty() {
            log::warn!("Empty preferredRemoteName in config, using '{DEFAULT_REMOTE_NAME}'");
            config.preferred_remote_name = DEFAULT_REMOTE_NAME.to_string();
        }

        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Layer command-line overrides on top of the file settings
    pub fn with_overrides(mut self, remote: Option<String>, template: Option<String>) -> Self {
        if let Some(remote) = remote {
            self.preferred_remote_name = remote;
        }
        if let Some(template) = template {
            self.custom_url = CustomUrlConfig {
                enabled: true,
                template,
            };
        }
        self
    }

    /// Custom-URL mode is only active with a non-empty template
    pub fn custom_template(&self) -> Option<&str> {
        (self.custom_url.enabled && !self.custom_url.template.is_empty())
            .then_some(self.custom_url.template.as_str())
    }
}
