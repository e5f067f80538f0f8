use crate::keymap::Keymap;
use crate::router::Route;
use crate::styles::ThemeType;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable that relocates the config directory
pub const CONFIG_DIR_ENV: &str = "ASSIMOX_CONFIG_DIR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the admin authentication API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Route opened at startup
    #[serde(default = "default_start_route")]
    pub start_route: String,
    #[serde(default)]
    pub theme: ThemeType,
    /// Event poll timeout; also the carousel tick granularity
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub keymap: Keymap,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselConfig {
    #[serde(default = "default_videos_interval_ms")]
    pub videos_interval_ms: u64,
    #[serde(default = "default_testimonials_interval_ms")]
    pub testimonials_interval_ms: u64,
    #[serde(default = "default_slider_interval_ms")]
    pub slider_interval_ms: u64,
}

impl CarouselConfig {
    pub fn videos_interval(&self) -> Duration {
        Duration::from_millis(self.videos_interval_ms)
    }

    pub fn testimonials_interval(&self) -> Duration {
        Duration::from_millis(self.testimonials_interval_ms)
    }

    pub fn slider_interval(&self) -> Duration {
        Duration::from_millis(self.slider_interval_ms)
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            videos_interval_ms: default_videos_interval_ms(),
            testimonials_interval_ms: default_testimonials_interval_ms(),
            slider_interval_ms: default_slider_interval_ms(),
        }
    }
}

fn default_api_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_start_route() -> String {
    "/".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_videos_interval_ms() -> u64 {
    3000
}

fn default_testimonials_interval_ms() -> u64 {
    5000
}

fn default_slider_interval_ms() -> u64 {
    5000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            start_route: default_start_route(),
            theme: ThemeType::default(),
            tick_rate_ms: default_tick_rate_ms(),
            carousel: CarouselConfig::default(),
            keymap: Keymap::default(),
        }
    }
}

impl Config {
    pub fn load_or_create(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
            let mut config: Config =
                toml::from_str(&content).with_context(|| "Failed to parse config file")?;

            // Zero would spin the event loop
            if config.tick_rate_ms == 0 {
                config.tick_rate_ms = default_tick_rate_ms();
            }
            if config.api_base_url.trim().is_empty() {
                config.api_base_url = default_api_base_url();
            }

            Ok(config)
        } else {
            let config = Self::default();
            config.save(config_path)?;
            Ok(config)
        }
    }

    pub fn save(&self, config_path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        std::fs::write(config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        // 600: owner read/write only
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(config_path)
                .with_context(|| format!("Failed to get file metadata: {:?}", config_path))?
                .permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(config_path, perms)
                .with_context(|| format!("Failed to set file permissions: {:?}", config_path))?;
        }

        Ok(())
    }

    pub fn start_route(&self) -> Route {
        Route::from_path(&self.start_route)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Theme to use, with `NO_COLOR` taking precedence over the file.
    pub fn effective_theme(&self) -> ThemeType {
        if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            ThemeType::NoColor
        } else {
            self.theme
        }
    }
}

/// `~/.config/assimox`, or `$ASSIMOX_CONFIG_DIR` when set.
pub fn config_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("assimox")
}

pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Directory holding the log file.
pub fn cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("assimox")
}
