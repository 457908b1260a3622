//! User configuration loaded from `config.toml`.
//!
//! Every field has a default, so a missing or partial file is fine. A file
//! that fails to parse is reported and replaced by the defaults.

use crate::http::HttpOptions;
use crate::netaddr::DEFAULT_MAC_INTERFACE;
use crate::public_ip::DEFAULT_PUBLIC_IP_URL;
use crate::update::{CURRENT_VERSION, DEFAULT_RELEASE_URL};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub update: UpdateConfig,

    #[serde(default)]
    pub network: NetworkConfig,

    #[serde(default)]
    pub memory: MemoryConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateConfig {
    /// Release metadata endpoint (JSON with `tag_name` and `html_url`).
    #[serde(default = "default_release_url")]
    pub release_url: String,

    /// Baseline the latest tag is compared against.
    #[serde(default = "default_current_version")]
    pub current_version: String,
}

impl Default for UpdateConfig {
    fn default() -> Self {
        Self {
            release_url: default_release_url(),
            current_version: default_current_version(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    #[serde(default = "default_public_ip_url")]
    pub public_ip_url: String,

    /// Interface whose hardware address is shown as the WiFi MAC.
    #[serde(default = "default_mac_interface")]
    pub mac_interface: String,

    /// Request timeout for both lookups. Unset keeps transport defaults.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            public_ip_url: default_public_ip_url(),
            mac_interface: default_mac_interface(),
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryConfig {
    /// Available memory below this is reported as "Low Memory: Yes".
    #[serde(default = "default_low_memory_threshold_mb")]
    pub low_memory_threshold_mb: u64,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            low_memory_threshold_mb: default_low_memory_threshold_mb(),
        }
    }
}

fn default_release_url() -> String {
    DEFAULT_RELEASE_URL.into()
}
fn default_current_version() -> String {
    CURRENT_VERSION.into()
}
fn default_public_ip_url() -> String {
    DEFAULT_PUBLIC_IP_URL.into()
}
fn default_mac_interface() -> String {
    DEFAULT_MAC_INTERFACE.into()
}
fn default_low_memory_threshold_mb() -> u64 {
    256
}

impl Config {
    /// Default location: `<config dir>/device-inspector/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "device-inspector")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load from `path`, or from the default location when `None`.
    ///
    /// Never fails: problems are printed as warnings and defaults are used.
    pub fn load(path: Option<&Path>) -> Self {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) => p,
                None => return Self::default(),
            },
        };

        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: {:#}. Using default configuration.", e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    /// Apply command-line overrides on top of the file values.
    pub fn apply_cli_overrides(
        &mut self,
        release_url: Option<String>,
        public_ip_url: Option<String>,
        timeout_secs: Option<u64>,
    ) {
        if let Some(url) = release_url {
            self.update.release_url = url;
        }
        if let Some(url) = public_ip_url {
            self.network.public_ip_url = url;
        }
        if timeout_secs.is_some() {
            self.network.timeout_secs = timeout_secs;
        }
    }

    pub fn http_options(&self) -> HttpOptions {
        HttpOptions::with_timeout_secs(self.network.timeout_secs)
    }

    pub fn low_memory_threshold_bytes(&self) -> u64 {
        self.memory.low_memory_threshold_mb.saturating_mul(1024 * 1024)
    }
}
