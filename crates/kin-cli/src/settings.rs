//! Merge loaded configuration with command-line flags.

use kin_config::KinecalcConfig;

use crate::cli::GlobalFlags;
use crate::controller::SessionOptions;
use crate::ui::UiPrefs;

/// Effective settings for one process run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub session: SessionOptions,
    pub self_check: bool,
    pub record_history: bool,
}

impl Settings {
    /// Flags win over config. `--quiet` also hides the banner.
    #[must_use]
    pub fn resolve(config: &KinecalcConfig, flags: &GlobalFlags, ui: UiPrefs) -> Self {
        let decimals = flags.decimals.unwrap_or(config.display.decimals);
        Self {
            session: SessionOptions {
                decimals: usize::from(decimals),
                banner: config.display.banner && !flags.quiet,
                offer_conversion: config.session.offer_conversion,
                ui,
            },
            self_check: config.session.self_check && !flags.no_self_check,
            record_history: config.session.record_history,
        }
    }
}

#[cfg(test)]
mod tests {
    use kin_config::KinecalcConfig;
    use pretty_assertions::assert_eq;

    use super::Settings;
    use crate::cli::GlobalFlags;
    use crate::ui::UiPrefs;

    #[test]
    fn defaults_pass_through() {
        let settings = Settings::resolve(
            &KinecalcConfig::default(),
            &GlobalFlags::default(),
            UiPrefs::default(),
        );
        assert_eq!(settings.session.decimals, 2);
        assert!(settings.session.banner);
        assert!(settings.session.offer_conversion);
        assert!(settings.self_check);
        assert!(settings.record_history);
    }

    #[test]
    fn flags_override_config() {
        let mut config = KinecalcConfig::default();
        config.display.decimals = 5;

        let flags = GlobalFlags {
            quiet: true,
            decimals: Some(1),
            no_self_check: true,
            ..GlobalFlags::default()
        };
        let settings = Settings::resolve(&config, &flags, UiPrefs::default());

        assert_eq!(settings.session.decimals, 1);
        assert!(!settings.session.banner);
        assert!(!settings.self_check);
    }

    #[test]
    fn config_can_disable_session_features() {
        let mut config = KinecalcConfig::default();
        config.session.offer_conversion = false;
        config.session.record_history = false;
        config.session.self_check = false;

        let settings = Settings::resolve(&config, &GlobalFlags::default(), UiPrefs::default());
        assert!(!settings.session.offer_conversion);
        assert!(!settings.record_history);
        assert!(!settings.self_check);
    }
}
