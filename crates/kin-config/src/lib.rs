//! # kin-config
//!
//! Layered configuration loading for kinecalc using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`KINECALC_*` prefix, `__` as separator)
//! 2. Project-level `.kinecalc/config.toml`
//! 3. User-level `~/.config/kinecalc/config.toml`
//! 4. Built-in defaults
//!
//! Every source is optional. With none present the defaults reproduce the
//! stock behaviour: two decimal places, banner shown, self-check on,
//! km/h conversion offered, history recorded.
//!
//! # Environment Variable Mapping
//!
//! Figment maps `KINECALC_DISPLAY__DECIMALS` -> `display.decimals`,
//! `KINECALC_SESSION__SELF_CHECK` -> `session.self_check`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use kin_config::KinecalcConfig;
//!
//! let config = KinecalcConfig::load().expect("config");
//! println!("results use {} decimals", config.display.decimals);
//! ```

mod display;
mod error;
mod session;

pub use display::{DisplayConfig, MAX_DECIMALS};
pub use error::ConfigError;
pub use session::SessionConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix for overrides.
pub const ENV_PREFIX: &str = "KINECALC_";

/// Project-local config file, relative to the working directory.
pub const LOCAL_CONFIG_PATH: &str = ".kinecalc/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct KinecalcConfig {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

impl KinecalcConfig {
    /// Load configuration from all sources and validate it.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(LOCAL_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Reject values that deserialize but make no sense.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.display.validate()
    }

    /// Path to the user-global config file.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("kinecalc").join("config.toml"))
    }
}
