//! Interactive session behaviour.

use serde::{Deserialize, Serialize};

const fn enabled() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Evaluate the known-answer scenarios before the first menu.
    #[serde(default = "enabled")]
    pub self_check: bool,

    /// Offer a km/h conversion after a velocity result.
    #[serde(default = "enabled")]
    pub offer_conversion: bool,

    /// Append successful computations to the history ledger.
    #[serde(default = "enabled")]
    pub record_history: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            self_check: true,
            offer_conversion: true,
            record_history: true,
        }
    }
}
