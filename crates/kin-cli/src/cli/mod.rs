use clap::{Parser, Subcommand};

pub mod global;

pub use global::{ColorMode, GlobalFlags};

/// Top-level CLI parser for the `kinecalc` binary.
#[derive(Debug, Parser)]
#[command(
    name = "kinecalc",
    version,
    about = "Kinematics calculator built on a = (vF - vi)/Δt"
)]
pub struct Cli {
    /// What to do; starts the interactive session when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (no banner, errors-only logging)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Colorize results: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Decimal places for results (overrides display.decimals)
    #[arg(short, long, global = true, value_parser = clap::value_parser!(u8).range(0..=i64::from(kin_config::MAX_DECIMALS)))]
    pub decimals: Option<u8>,

    /// Skip the known-answer check before the first menu
    #[arg(long, global = true)]
    pub no_self_check: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Start the interactive menu (default)
    Run,
    /// Evaluate the known-answer scenarios and exit
    Check,
    /// Print the common speeds conversion table and exit
    Table,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            quiet: self.quiet,
            verbose: self.verbose,
            color: self.color,
            decimals: self.decimals,
            no_self_check: self.no_self_check,
        }
    }

    /// The subcommand to run, defaulting to the interactive session.
    #[must_use]
    pub fn selected_command(&self) -> Commands {
        self.command.unwrap_or(Commands::Run)
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, ColorMode, Commands};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_run() {
        let cli = Cli::try_parse_from(["kinecalc"]).expect("cli should parse");
        assert_eq!(cli.selected_command(), Commands::Run);
        assert_eq!(cli.color, ColorMode::Auto);
        assert!(cli.decimals.is_none());
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["kinecalc", "table", "--color", "never", "--quiet"])
            .expect("cli should parse");
        assert_eq!(cli.selected_command(), Commands::Table);
        assert_eq!(cli.color, ColorMode::Never);
        assert!(cli.quiet);
    }

    #[test]
    fn decimals_are_range_checked() {
        let cli = Cli::try_parse_from(["kinecalc", "--decimals", "4"]).expect("cli should parse");
        assert_eq!(cli.global_flags().decimals, Some(4));
        assert!(Cli::try_parse_from(["kinecalc", "--decimals", "11"]).is_err());
        assert!(Cli::try_parse_from(["kinecalc", "--decimals", "-1"]).is_err());
    }

    #[test]
    fn verbose_reaches_global_flags() {
        let cli = Cli::try_parse_from(["kinecalc", "run", "-v"]).expect("cli should parse");
        let flags = cli.global_flags();
        assert!(flags.verbose);
        assert!(!flags.quiet);
    }

    #[test]
    fn color_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["kinecalc", "--color", "sometimes"]).is_err());
    }

    #[test]
    fn check_subcommand_with_no_self_check_flag() {
        let cli = Cli::try_parse_from(["kinecalc", "--no-self-check", "check"])
            .expect("cli should parse");
        assert_eq!(cli.selected_command(), Commands::Check);
        assert!(cli.global_flags().no_self_check);
    }
}
