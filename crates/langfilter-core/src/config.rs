//! Site and widget configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    error::{CoreError, Result},
    filter::DEFAULT_MAX_RESULTS,
};

/// Main configuration structure for langfilter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    pub site: SiteConfig,

    /// Language filter widget settings.
    #[serde(default)]
    pub widget: WidgetConfig,

    /// Content and output locations.
    #[serde(default)]
    pub content: ContentConfig,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,

    /// URL prefix prepended to derived language page links (e.g., "/docs").
    #[serde(default)]
    pub base_path: String,
}

/// Widget configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Maximum number of matches shown before truncating.
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Placeholder text of the filter input.
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// DOM id of the filter input.
    #[serde(default = "default_input_id")]
    pub input_id: String,

    /// DOM id of the list container.
    #[serde(default = "default_list_id")]
    pub list_id: String,

    /// DOM id of the embedded catalog JSON.
    #[serde(default = "default_data_id")]
    pub data_id: String,
}

/// Content configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Directory containing the section directories.
    #[serde(default = "default_content_dir")]
    pub dir: String,

    /// Output directory for generated catalogs and sidebar partials.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

// Default value functions
fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

fn default_placeholder() -> String {
    "Search languages...".to_string()
}

fn default_input_id() -> String {
    "language-search".to_string()
}

fn default_list_id() -> String {
    "language-list".to_string()
}

fn default_data_id() -> String {
    "language-data".to_string()
}

fn default_content_dir() -> String {
    "content".to_string()
}

fn default_output_dir() -> String {
    "public".to_string()
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
            placeholder: default_placeholder(),
            input_id: default_input_id(),
            list_id: default_list_id(),
            data_id: default_data_id(),
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            dir: default_content_dir(),
            output_dir: default_output_dir(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `LANGFILTER__SECTION__KEY` environment overrides.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("LANGFILTER").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.site.title.is_empty() {
            return Err(CoreError::config("site.title cannot be empty"));
        }

        if self.widget.max_results == 0 {
            return Err(CoreError::config("widget.max_results must be at least 1"));
        }

        for (key, id) in [
            ("widget.input_id", &self.widget.input_id),
            ("widget.list_id", &self.widget.list_id),
            ("widget.data_id", &self.widget.data_id),
        ] {
            if id.is_empty() {
                return Err(CoreError::config(format!("{key} cannot be empty")));
            }
        }

        if self.site.base_path.ends_with('/') {
            tracing::warn!("site.base_path should not have a trailing slash");
        }

        Ok(())
    }

    /// Build a site-relative URL under the configured base path.
    pub fn url_for(&self, path: &str) -> String {
        let base = self.site.base_path.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}
