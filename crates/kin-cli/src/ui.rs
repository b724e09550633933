use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiPrefs {
    pub color: bool,
    pub term_width: Option<usize>,
}

impl UiPrefs {
    /// Wrap a successful result line in green when color is on.
    #[must_use]
    pub fn success(&self, text: &str) -> String {
        self.paint("32", text)
    }

    /// Wrap an error line in red when color is on.
    #[must_use]
    pub fn failure(&self, text: &str) -> String {
        self.paint("31", text)
    }

    #[must_use]
    pub fn notice(&self, text: &str) -> String {
        self.paint("33", text)
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("\u{1b}[{code}m{text}\u{1b}[0m")
        } else {
            text.to_string()
        }
    }
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let is_tty = std::io::stdout().is_terminal();
    let color = match flags.color {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => is_tty && std::env::var_os("NO_COLOR").is_none(),
    };

    let term_width = std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= 40);

    let _ = UI_PREFS.set(UiPrefs { color, term_width });
}

#[must_use]
pub fn prefs() -> UiPrefs {
    UI_PREFS.get().copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::UiPrefs;

    #[test]
    fn plain_when_color_is_off() {
        let prefs = UiPrefs::default();
        assert_eq!(prefs.success("ok"), "ok");
        assert_eq!(prefs.failure("bad"), "bad");
    }

    #[test]
    fn ansi_wrapped_when_color_is_on() {
        let prefs = UiPrefs {
            color: true,
            term_width: None,
        };
        assert_eq!(prefs.failure("bad"), "\u{1b}[31mbad\u{1b}[0m");
        assert!(prefs.notice("hm").starts_with("\u{1b}[33m"));
    }
}
