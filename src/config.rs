//! CLI defaults loaded from `~/.config/navgen/config.toml`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::navigator::{BrowserFamily, Filter, PlatformFamily};

/// A family filter as written in TOML: one name or a list of names.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    One(String),
    Many(Vec<String>),
}

impl FilterValue {
    fn names(&self) -> Vec<&str> {
        match self {
            FilterValue::One(name) => vec![name.as_str()],
            FilterValue::Many(names) => names.iter().map(String::as_str).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Top-level config file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub platform: Option<FilterValue>,
    #[serde(default)]
    pub browser: Option<FilterValue>,
    /// Number of records to print per invocation.
    #[serde(default)]
    pub count: Option<usize>,
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

impl Config {
    /// Load from `path`, or from the default location when `None`.
    ///
    /// A missing default file yields the default config; an explicitly
    /// requested file must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (config_path(), false),
        };
        if !required && !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("invalid config in {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn platform_filter(&self) -> Result<Filter<PlatformFamily>> {
        Ok(match &self.platform {
            Some(value) => Filter::from_names(&value.names())?,
            None => Filter::Any,
        })
    }

    pub fn browser_filter(&self) -> Result<Filter<BrowserFamily>> {
        Ok(match &self.browser {
            Some(value) => Filter::from_names(&value.names())?,
            None => Filter::Any,
        })
    }
}

/// Return the path to the default config file.
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("navgen")
        .join("config.toml")
}
