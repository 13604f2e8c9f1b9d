//! Source configuration and factory.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use skillpath_core::traits::ContentSource;

use crate::fallback::StaticSource;
use crate::gemini::GeminiSource;

/// Configuration for a single content source.
///
/// Note: Custom Debug impl masks API keys to prevent accidental exposure in logs.
#[derive(Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SourceConfig {
    Gemini {
        api_key: String,
        #[serde(default)]
        base_url: Option<String>,
        #[serde(default)]
        model: Option<String>,
    },
    Static {},
}

impl std::fmt::Debug for SourceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceConfig::Gemini {
                api_key: _,
                base_url,
                model,
            } => f
                .debug_struct("Gemini")
                .field("api_key", &"***")
                .field("base_url", base_url)
                .field("model", model)
                .finish(),
            SourceConfig::Static {} => f.debug_struct("Static").finish(),
        }
    }
}

/// Top-level skillpath configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillpathConfig {
    /// Source configurations keyed by name.
    #[serde(default)]
    pub sources: HashMap<String, SourceConfig>,
    /// Default source to use.
    #[serde(default = "default_source")]
    pub default_source: String,
    /// Default topic when none is given.
    #[serde(default = "default_topic")]
    pub default_topic: String,
    /// Default weekly study hours when none is given.
    #[serde(default = "default_weekly_hours")]
    pub default_weekly_hours: u32,
    /// Output directory for reports.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_source() -> String {
    "static".to_string()
}
fn default_topic() -> String {
    "Python".to_string()
}
fn default_weekly_hours() -> u32 {
    5
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("./skillpath-reports")
}

impl Default for SkillpathConfig {
    fn default() -> Self {
        Self {
            sources: HashMap::new(),
            default_source: default_source(),
            default_topic: default_topic(),
            default_weekly_hours: default_weekly_hours(),
            output_dir: default_output_dir(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

/// Resolve env vars in a source config.
fn resolve_source_config(config: &SourceConfig) -> SourceConfig {
    match config {
        SourceConfig::Gemini {
            api_key,
            base_url,
            model,
        } => SourceConfig::Gemini {
            api_key: resolve_env_vars(api_key),
            base_url: base_url.as_ref().map(|u| resolve_env_vars(u)),
            model: model.clone(),
        },
        SourceConfig::Static {} => SourceConfig::Static {},
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `skillpath.toml` in the current directory
/// 2. `~/.config/skillpath/config.toml`
///
/// Environment variable override: `SKILLPATH_GEMINI_KEY`.
pub fn load_config() -> Result<SkillpathConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<SkillpathConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("skillpath.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<SkillpathConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => SkillpathConfig::default(),
    };

    // Apply env var override
    if let Ok(key) = std::env::var("SKILLPATH_GEMINI_KEY") {
        config
            .sources
            .entry("gemini".into())
            .or_insert(SourceConfig::Gemini {
                api_key: String::new(),
                base_url: None,
                model: None,
            });
        if let Some(SourceConfig::Gemini { api_key, .. }) = config.sources.get_mut("gemini") {
            *api_key = key;
        }
        if config.default_source == default_source() {
            config.default_source = "gemini".to_string();
        }
    }

    // Resolve env vars in all source configs
    let resolved: HashMap<String, SourceConfig> = config
        .sources
        .iter()
        .map(|(k, v)| (k.clone(), resolve_source_config(v)))
        .collect();
    config.sources = resolved;

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("skillpath"))
}

/// Create a source instance from its configuration.
pub fn create_source(config: &SourceConfig) -> Result<Box<dyn ContentSource>> {
    match config {
        SourceConfig::Gemini {
            api_key,
            base_url,
            model,
        } => {
            if api_key.is_empty() {
                anyhow::bail!("gemini source configured without an API key");
            }
            Ok(Box::new(GeminiSource::new(
                api_key,
                base_url.clone(),
                model.clone(),
            )))
        }
        SourceConfig::Static {} => Ok(Box::new(StaticSource)),
    }
}
