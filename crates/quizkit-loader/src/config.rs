//! Loader configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Well-known name of the curriculum resource.
pub const CURRICULUM_FILE: &str = "grade-subjects.json";

/// Top-level quizkit configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizkitConfig {
    /// Origin the quiz is served from.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path of the curriculum document relative to `base_url`.
    #[serde(default = "default_curriculum_path")]
    pub curriculum_path: String,
    /// Transport timeout in seconds. Unset means the HTTP client's default.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Questions per quiz when the caller does not ask for a count.
    #[serde(default = "default_question_count")]
    pub default_question_count: usize,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}
fn default_curriculum_path() -> String {
    CURRICULUM_FILE.to_string()
}
fn default_question_count() -> usize {
    10
}

impl Default for QuizkitConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            curriculum_path: default_curriculum_path(),
            timeout_secs: None,
            default_question_count: default_question_count(),
        }
    }
}

impl QuizkitConfig {
    /// Absolute URL of the curriculum document.
    pub fn curriculum_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.curriculum_path.trim_start_matches('/')
        )
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

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `quizkit.toml` in the current directory
/// 2. `~/.config/quizkit/config.toml`
///
/// Environment variable override: `QUIZKIT_BASE_URL`.
pub fn load_config() -> Result<QuizkitConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizkitConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizkit.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizkitConfig::default(),
    };

    if let Ok(url) = std::env::var("QUIZKIT_BASE_URL") {
        config.base_url = url;
    }

    Ok(config)
}

/// Parse a TOML config string, expanding `${VAR}` references.
pub fn parse_config_str(content: &str) -> Result<QuizkitConfig> {
    let mut config: QuizkitConfig = toml::from_str(content)?;
    config.base_url = resolve_env_vars(&config.base_url);
    config.curriculum_path = resolve_env_vars(&config.curriculum_path);
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizkit"))
}
