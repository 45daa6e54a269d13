use std::env;
use std::fs;
use std::path::PathBuf;

/// Environment/config key holding the Gemini API key
const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Application configuration
///
/// Built once at startup and threaded through the pipeline; a missing
/// key simply disables AI summarization.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Gemini API key, if configured
    pub api_key: Option<String>,
}

impl Config {
    /// Load configuration from the process environment and the
    /// per-user config file
    ///
    /// The environment variable takes precedence; the file is only
    /// consulted when the variable is unset. A missing file is not an
    /// error.
    pub fn load() -> Self {
        if let Ok(key) = env::var(API_KEY_VAR) {
            if !key.is_empty() {
                return Self { api_key: Some(key) };
            }
        }

        let api_key = Self::config_path()
            .and_then(|path| fs::read_to_string(path).ok())
            .and_then(|contents| lookup_env_file(&contents, API_KEY_VAR));

        Self { api_key }
    }

    /// Path of the per-user config file (~/.git-daily/.env)
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".git-daily").join(".env"))
    }
}

/// Find `key` in env-style `KEY=VALUE` contents
///
/// Blank lines and `#` comments are skipped; the first `=` splits key
/// from value; surrounding single or double quotes are stripped.
fn lookup_env_file(contents: &str, key: &str) -> Option<String> {
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (name, value) = match line.split_once('=') {
            Some(pair) => pair,
            None => continue,
        };

        if name.trim() != key {
            continue;
        }

        let value = value.trim();
        let value = value
            .strip_prefix('"')
            .and_then(|v| v.strip_suffix('"'))
            .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
            .unwrap_or(value);

        if value.is_empty() {
            return None;
        }
        return Some(value.to_string());
    }

    None
}
