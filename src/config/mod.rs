use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::tui::theme::ThemeConfig;

#[derive(Debug, Default, Deserialize, Clone)]
pub struct Config {
    /// `ansi` or `truecolor`. Unset: decided from the environment.
    #[serde(default)]
    pub color_mode: Option<String>,

    /// Write tracing output here. Unset: no logging.
    #[serde(default)]
    pub log_file: Option<String>,

    #[serde(default)]
    pub theme: ThemeConfig,
}

/// How much colour the terminal can be trusted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Foreground colours only; no shaded panel backgrounds.
    Ansi,
    Truecolor,
}

impl ColorMode {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "ansi" => ColorMode::Ansi,
            _ => ColorMode::Truecolor,
        }
    }

    pub fn shaded_backgrounds(&self) -> bool {
        *self != ColorMode::Ansi
    }
}

/// `TMX_COLOR_MODE` wins over the config file; otherwise Apple Terminal gets
/// plain ANSI and everything else truecolor.
pub fn resolve_color_mode(
    env_override: Option<&str>,
    configured: Option<&str>,
    term_program: Option<&str>,
) -> ColorMode {
    if let Some(mode) = env_override.or(configured) {
        return ColorMode::parse(mode);
    }
    if term_program == Some("Apple_Terminal") {
        ColorMode::Ansi
    } else {
        ColorMode::Truecolor
    }
}

/// [`resolve_color_mode`] against the process environment.
pub fn color_mode_from_env(config: &Config) -> ColorMode {
    let env_override = std::env::var("TMX_COLOR_MODE").ok();
    let term_program = std::env::var("TERM_PROGRAM").ok();
    resolve_color_mode(
        env_override.as_deref(),
        config.color_mode.as_deref(),
        term_program.as_deref(),
    )
}

/// Returns the base supermux config directory: ~/.supermux/
pub fn base_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("could not determine home directory")?;
    Ok(home.join(".supermux"))
}

/// Returns the default picker config path: ~/.supermux/picker.toml
pub fn default_path() -> Result<PathBuf> {
    Ok(base_dir()?.join("picker.toml"))
}

/// Load config from `path` (or return defaults if it doesn't exist).
pub fn load_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let config: Config =
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(config)
}

/// Load from an explicit path, or from the default location.
pub fn load(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(p) => load_from(p),
        None => load_from(&default_path()?),
    }
}
