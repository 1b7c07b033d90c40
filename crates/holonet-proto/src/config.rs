use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::platform;
use crate::payload::DetailTransport;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub network: NetworkConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Root of the REST API; collection paths are appended to it.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// How the three list screens are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleSetting {
    /// Decide from the host platform at startup.
    #[default]
    Auto,
    Tabs,
    Drawer,
}

/// Resolved presentation, fixed for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationStyle {
    Tabs,
    Drawer,
}

impl StyleSetting {
    pub fn resolve(self) -> PresentationStyle {
        match self {
            Self::Tabs => PresentationStyle::Tabs,
            Self::Drawer => PresentationStyle::Drawer,
            Self::Auto => {
                if platform::prefers_tabs() {
                    PresentationStyle::Tabs
                } else {
                    PresentationStyle::Drawer
                }
            }
        }
    }
}

impl std::str::FromStr for StyleSetting {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "tabs" => Ok(Self::Tabs),
            "drawer" => Ok(Self::Drawer),
            other => Err(format!("unknown presentation style '{other}' (tabs, drawer, auto)")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub presentation: StyleSetting,
    /// Pass the selected record to the detail screen by value or through a route string.
    #[serde(default)]
    pub detail_transport: DetailTransport,
    /// Number of UI ticks the list enter transition lasts.
    #[serde(default = "default_enter_ticks")]
    pub enter_transition_ticks: u16,
    #[serde(default = "default_show_keys_bar")]
    pub show_keys_bar: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Probe connectivity alongside every fetch and show the offline view when unreachable.
    #[serde(default)]
    pub check_reachability: bool,
    #[serde(default = "default_probe_timeout_ms")]
    pub probe_timeout_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            presentation: StyleSetting::default(),
            detail_transport: DetailTransport::default(),
            enter_transition_ticks: default_enter_ticks(),
            show_keys_bar: default_show_keys_bar(),
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            check_reachability: false,
            probe_timeout_ms: default_probe_timeout_ms(),
        }
    }
}

fn default_base_url() -> String {
    "https://swapi.dev/api/".to_string()
}

fn default_user_agent() -> String {
    format!("holonet/{}", env!("CARGO_PKG_VERSION"))
}

fn default_enter_ticks() -> u16 {
    6
}

fn default_show_keys_bar() -> bool {
    true
}

fn default_probe_timeout_ms() -> u64 {
    3000
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load from `path`, writing the defaults there first if it does not exist.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        platform::config_dir().join("config.toml")
    }
}
