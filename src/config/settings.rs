use anyhow::{Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about = "AI SaaS usage dashboard")]
pub struct Config {
    /// Enable debug mode
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Event poll interval in milliseconds
    #[arg(short = 't', long)]
    pub tick_rate: Option<u64>,

    /// Skip the landing screen and start signed in
    #[arg(long)]
    pub signed_in: bool,
}

impl Config {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Application settings (from config file)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Event poll interval in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,

    /// UI settings
    #[serde(default)]
    pub ui: UiSettings,
}

/// UI-specific settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiSettings {
    /// Show the navigation sidebar
    #[serde(default = "default_show_sidebar")]
    pub show_sidebar: bool,

    /// Sidebar width in columns
    #[serde(default = "default_sidebar_width")]
    pub sidebar_width: u16,

    /// Height of the analytics chart in rows
    #[serde(default = "default_chart_height")]
    pub chart_height: u16,
}

fn default_tick_rate() -> u64 {
    50
}

fn default_show_sidebar() -> bool {
    true
}

fn default_sidebar_width() -> u16 {
    24
}

fn default_chart_height() -> u16 {
    12
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            ui: UiSettings::default(),
        }
    }
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            show_sidebar: default_show_sidebar(),
            sidebar_width: default_sidebar_width(),
            chart_height: default_chart_height(),
        }
    }
}

impl Settings {
    /// Load settings from config file or use defaults
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        // Try custom path first
        if let Some(p) = path {
            if p.exists() {
                let content = std::fs::read_to_string(p)
                    .with_context(|| format!("Failed to read config file: {:?}", p))?;
                return toml::from_str(&content)
                    .with_context(|| format!("Failed to parse config file: {:?}", p));
            }
        }

        // Try default config locations
        let default_paths = [
            dirs::config_dir().map(|p| p.join("quotadeck/config.toml")),
            dirs::home_dir().map(|p| p.join(".config/quotadeck/config.toml")),
            dirs::home_dir().map(|p| p.join(".quotadeck.toml")),
        ];

        for path in default_paths.iter().flatten() {
            if path.exists() {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file: {:?}", path))?;
                return toml::from_str(&content)
                    .with_context(|| format!("Failed to parse config file: {:?}", path));
            }
        }

        // Return defaults if no config file found
        Ok(Self::default())
    }

    /// Merge CLI config into settings (CLI takes precedence)
    pub fn merge_cli(&mut self, cli: &Config) {
        if let Some(tick_rate) = cli.tick_rate {
            self.tick_rate_ms = tick_rate;
        }
    }

    /// Validate and normalize settings values
    ///
    /// Ensures the poll interval has a minimum value to prevent CPU exhaustion.
    pub fn validate(&mut self) {
        const MIN_TICK_RATE: u64 = 10;
        const MIN_CHART_HEIGHT: u16 = 6;

        if self.tick_rate_ms < MIN_TICK_RATE {
            self.tick_rate_ms = MIN_TICK_RATE;
        }
        if self.ui.chart_height < MIN_CHART_HEIGHT {
            self.ui.chart_height = MIN_CHART_HEIGHT;
        }
    }
}
