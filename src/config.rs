//! Configuration management for vortexflow
//!
//! Attract text, backdrop, shell options and the sidebar menu. The theme is
//! not stored here: every start begins dark.
//!
//! Config file location: ~/.config/vortexflow/config.toml

use crate::catalog::{default_menu, Catalog, CatalogError, MenuEntry};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const INTRO_LINE: &str = "Intelligently automating your digital workflow.";
pub const PROMPT_LINE: &str = "Open the Command Deck to begin your work";

const FILLER_LINES: [&str; 6] = [
    "Connecting to Neural Nexus...",
    "Calibrating link analyzers...",
    "Warming up the download queue...",
    "Restoring operator session...",
    "All systems nominal.",
    "Welcome, Operator.",
];

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub attract: AttractConfig,
    pub backdrop: BackdropConfig,
    pub shell: ShellConfig,
    pub menu: Vec<MenuEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            attract: AttractConfig::default(),
            backdrop: BackdropConfig::default(),
            shell: ShellConfig::default(),
            menu: default_menu(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttractConfig {
    /// Milliseconds between two lines
    pub interval_ms: u64,
    pub intro_line: String,
    pub prompt_line: String,
    pub filler_lines: Vec<String>,
}

impl Default for AttractConfig {
    fn default() -> Self {
        Self {
            interval_ms: 2500,
            intro_line: INTRO_LINE.to_string(),
            prompt_line: PROMPT_LINE.to_string(),
            filler_lines: FILLER_LINES.iter().map(|l| l.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackdropConfig {
    pub enabled: bool,
    pub particles: usize,
    pub seed: u64,
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            particles: 90,
            seed: 0x2CC985,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Whether the sidebar footer carries a theme toggle
    pub theme_toggle: bool,
    /// Upper bound on the input poll timeout, in milliseconds
    pub tick_ms: u64,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            theme_toggle: true,
            tick_ms: 100,
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("vortexflow");
        Ok(config_dir.join("config.toml"))
    }

    /// Resolve an explicit path or fall back to the default location
    pub fn resolve(path: Option<&Path>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(p.to_path_buf()),
            None => Self::path(),
        }
    }

    /// Load config from `path`. A missing file yields the defaults and is
    /// not created.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {:?}", path))?;
        tracing::info!(path = %path.display(), entries = config.menu.len(), "config loaded");
        Ok(config)
    }

    /// Save config to `path`, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;
        Ok(())
    }

    /// Validated navigation catalog built from `[[menu]]`
    pub fn catalog(&self) -> Result<Catalog, CatalogError> {
        Catalog::new(self.menu.clone())
    }
}
