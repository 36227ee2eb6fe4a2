//! Shared configuration for the TR-069 data model tools.
//!
//! A small TOML file holding output defaults, overridable through
//! `TR069_`-prefixed environment variables (`TR069_DEFAULTS_OUTPUT=yaml`).
//! Command-line flags are layered on top by the binary.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Output formats the CLI can render.
pub const OUTPUT_FORMATS: &[&str] = &["table", "json", "json-compact", "yaml", "xml"];

/// Accepted `color` settings.
pub const COLOR_MODES: &[&str] = &["auto", "always", "never"];

const MAX_INDENT: usize = 16;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Defaults {
    /// One of [`OUTPUT_FORMATS`].
    #[serde(default = "default_output")]
    pub output: String,

    /// One of [`COLOR_MODES`].
    #[serde(default = "default_color")]
    pub color: String,

    /// Spaces per nesting level for pretty XML.
    #[serde(default = "default_indent")]
    pub indent: usize,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            indent: default_indent(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_indent() -> usize {
    2
}

impl Config {
    /// Reject values no command could act on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let d = &self.defaults;
        if !OUTPUT_FORMATS.contains(&d.output.as_str()) {
            return Err(ConfigError::Validation {
                field: "defaults.output".into(),
                reason: format!("expected one of {}, got '{}'", OUTPUT_FORMATS.join(", "), d.output),
            });
        }
        if !COLOR_MODES.contains(&d.color.as_str()) {
            return Err(ConfigError::Validation {
                field: "defaults.color".into(),
                reason: format!("expected one of {}, got '{}'", COLOR_MODES.join(", "), d.color),
            });
        }
        if d.indent > MAX_INDENT {
            return Err(ConfigError::Validation {
                field: "defaults.indent".into(),
                reason: format!("must be at most {MAX_INDENT}, got {}", d.indent),
            });
        }
        Ok(())
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("org", "tr069", "tr069").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("tr069");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load config from `path` + environment. A missing file is not an error.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("TR069_").split("_"));

    let config: Config = figment.extract()?;
    config.validate()?;
    Ok(config)
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path();
    save_config_to(cfg, &path)?;
    Ok(path)
}

pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}
