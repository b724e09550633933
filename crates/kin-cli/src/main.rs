use std::io::Write;

use anyhow::Context;
use clap::Parser;
use kin_config::KinecalcConfig;
use kin_core::Calculator;

mod cli;
mod controller;
mod error;
mod interrupt;
mod menu;
mod output;
mod prompt;
mod self_check;
mod settings;
mod ui;

use controller::Controller;
use prompt::{CancelFlag, Prompter};
use settings::Settings;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("kinecalc error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();
    init_tracing(&flags)?;
    ui::init(&flags);

    let config = KinecalcConfig::load().context("failed to load kinecalc configuration")?;
    let settings = Settings::resolve(&config, &flags, ui::prefs());
    tracing::debug!(?settings, "settings resolved");

    match cli.selected_command() {
        cli::Commands::Check => {
            let mut stdout = std::io::stdout().lock();
            self_check::report(&mut stdout, settings.session.decimals)
        }
        cli::Commands::Table => {
            let options = output::table::TableOptions {
                max_width: settings.session.ui.term_width,
            };
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", output::speed_table(options))?;
            Ok(())
        }
        cli::Commands::Run => {
            if settings.self_check {
                self_check::verify().context("startup self-check failed")?;
            }
            run_session(settings).await
        }
    }
}

/// Drive the interactive menu on a blocking thread while the runtime
/// listens for interrupts.
async fn run_session(settings: Settings) -> anyhow::Result<()> {
    let cancel = CancelFlag::new();
    interrupt::install(cancel.clone());

    tokio::task::spawn_blocking(move || {
        let calculator = Calculator::new()
            .with_decimals(settings.session.decimals)
            .with_recording(settings.record_history);
        let prompter = Prompter::new(std::io::stdin().lock(), cancel);
        let mut controller = Controller::new(
            calculator,
            prompter,
            std::io::stdout().lock(),
            settings.session,
        );
        controller.run()
    })
    .await
    .context("interactive session panicked")?
    .context("terminal i/o failed")
}

fn init_tracing(flags: &cli::GlobalFlags) -> anyhow::Result<()> {
    let level = if flags.quiet {
        "error"
    } else if flags.verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("KINECALC_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
