//! # ghtest-config
//!
//! Layered configuration loading for ghtest using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`GHTEST_*` prefix, `__` as separator)
//! 2. Project-level `.ghtest/config.toml`
//! 3. User-level `~/.config/ghtest/config.toml`
//! 4. Built-in defaults
//!
//! Command-line flags are applied on top by the binary.
//!
//! # Environment Variable Mapping
//!
//! `GHTEST_OUTPUT__DIALECT` -> `output.dialect`,
//! `GHTEST_DISCOVERY__UNIT_TEST_KIND` -> `discovery.unit_test_kind`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use ghtest_config::GhTestConfig;
//!
//! let config = GhTestConfig::load_with_dotenv(None).expect("config");
//! println!("namespace: {}", config.output.namespace);
//! ```

mod discovery;
mod error;
mod output;

pub use discovery::{DEFAULT_UNIT_TEST_KIND, DiscoveryConfig};
pub use error::ConfigError;
pub use output::{DEFAULT_NAMESPACE, DEFAULT_OUTPUT_NAME, OutputConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory holding project-local configuration.
pub const PROJECT_CONFIG_DIR: &str = ".ghtest";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GhTestConfig {
    #[serde(default)]
    pub discovery: DiscoveryConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl GhTestConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// `project_root` is where `.ghtest/config.toml` is looked up; the current
    /// directory when `None`.
    pub fn load(project_root: Option<&Path>) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(project_root).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading a `.env` file from the project root
    /// (or the current directory). A missing `.env` is not an error.
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
    /// Public so tests can inspect the figment or layer more providers.
    pub fn figment(project_root: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = Self::project_config_path(project_root);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("GHTEST_").split("__"))
    }

    /// Check cross-field values that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.discovery.unit_test_kind()?;
        if self.output.namespace.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "output.namespace".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }

    /// Path to the project-local config file.
    #[must_use]
    pub fn project_config_path(project_root: Option<&Path>) -> PathBuf {
        project_root
            .map_or_else(PathBuf::new, Path::to_path_buf)
            .join(PROJECT_CONFIG_DIR)
            .join("config.toml")
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ghtest").join("config.toml"))
    }
}
