//! # lp-config
//!
//! Layered configuration loading for Launchpad using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`LAUNCHPAD_*` prefix, `__` as separator)
//! 2. Project-level `.launchpad/config.toml`
//! 3. User-level `~/.config/launchpad/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `LAUNCHPAD_SUMMARIZER__TIMEOUT_SECS` -> `summarizer.timeout_secs`,
//! `LAUNCHPAD_STORAGE__DATA_DIR` -> `storage.data_dir`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use lp_config::LaunchpadConfig;
//!
//! let config = LaunchpadConfig::load_with_dotenv(None).expect("config");
//! println!("summaries time out after {:?}", config.summarizer.timeout());
//! ```

mod error;
mod general;
mod storage;
mod summarizer;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use storage::StorageConfig;
pub use summarizer::SummarizerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project-local config file, relative to the project root.
pub const PROJECT_CONFIG_FILE: &str = ".launchpad/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LaunchpadConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub summarizer: SummarizerConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl LaunchpadConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// `project_root` selects the project-local config file; `None` uses the
    /// current directory. Does NOT read `.env`; see [`Self::load_with_dotenv`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load(project_root: Option<&Path>) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(project_root).extract()?;
        config.summarizer.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the project root (or the
    /// current directory when no root is given). A missing `.env` is fine.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load_with_dotenv(project_root: Option<&Path>) -> Result<Self, ConfigError> {
        match project_root {
            Some(root) => {
                let _ = dotenvy::from_path(root.join(".env"));
            }
            None => {
                let _ = dotenvy::dotenv();
            }
        }
        Self::load(project_root)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment(project_root: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = project_root.map_or_else(
            || PathBuf::from(PROJECT_CONFIG_FILE),
            |root| root.join(PROJECT_CONFIG_FILE),
        );
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("LAUNCHPAD_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("launchpad").join("config.toml"))
    }
}
