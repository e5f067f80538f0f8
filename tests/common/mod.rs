//! Shared test utilities.
//!
//! `TestEnv` is an isolated config directory that is cleaned up on drop.
//! With `.with_env_override()` it also points `ASSIMOX_CONFIG_DIR` at that
//! directory so `config::config_path()` resolves into it.

use assimox::config::{Config, CONFIG_DIR_ENV};
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};
use tempfile::TempDir;

/// Only one test at a time may touch process environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Restores `ASSIMOX_CONFIG_DIR` when dropped.
struct EnvGuard {
    old_config: Option<String>,
    _lock: MutexGuard<'static, ()>,
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_config {
            Some(v) => std::env::set_var(CONFIG_DIR_ENV, v),
            None => std::env::remove_var(CONFIG_DIR_ENV),
        }
    }
}

#[allow(dead_code)]
pub struct TestEnv {
    _temp_dir: TempDir,
    pub config_dir: PathBuf,
    _env_guard: Option<EnvGuard>,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_dir = temp_dir.path().join("config");
        std::fs::create_dir_all(&config_dir).expect("Failed to create config dir");
        Self {
            _temp_dir: temp_dir,
            config_dir,
            _env_guard: None,
        }
    }

    /// Redirect the default config location into this environment.
    pub fn with_env_override(mut self) -> Self {
        let lock = ENV_MUTEX
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let old_config = std::env::var(CONFIG_DIR_ENV).ok();
        std::env::set_var(CONFIG_DIR_ENV, &self.config_dir);
        self._env_guard = Some(EnvGuard {
            old_config,
            _lock: lock,
        });
        self
    }

    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    pub fn write_config(&self, toml: &str) {
        std::fs::write(self.config_path(), toml).expect("Failed to write config");
    }

    pub fn load_config(&self) -> Config {
        Config::load_or_create(&self.config_path()).expect("Failed to load config")
    }
}
