//! Output formatting configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Largest accepted `display.decimals`.
pub const MAX_DECIMALS: u8 = 10;

/// Default decimal places for results.
const fn default_decimals() -> u8 {
    2
}

const fn default_banner() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Decimal places used for computed results.
    #[serde(default = "default_decimals")]
    pub decimals: u8,

    /// Print the formula overview before the first menu.
    #[serde(default = "default_banner")]
    pub banner: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            decimals: default_decimals(),
            banner: default_banner(),
        }
    }
}

impl DisplayConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.decimals > MAX_DECIMALS {
            return Err(ConfigError::InvalidValue {
                field: "display.decimals".to_string(),
                reason: format!("must be at most {MAX_DECIMALS}, got {}", self.decimals),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = DisplayConfig::default();
        assert_eq!(config.decimals, 2);
        assert!(config.banner);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_too_many_decimals() {
        let config = DisplayConfig {
            decimals: 11,
            ..DisplayConfig::default()
        };
        let err = config.validate().expect_err("11 decimals is out of range");
        assert!(err.to_string().contains("display.decimals"));
    }
}
